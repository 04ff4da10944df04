// src/presentation/graphql/query.rs
use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use crate::application::services::RecordService;
use crate::presentation::graphql::types::RecordObject;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The currently stored record.
    async fn record(&self, ctx: &Context<'_>) -> Result<RecordObject> {
        let services = ctx.data_unchecked::<Arc<RecordService>>();
        let record = services.record().await?;
        Ok(record.into())
    }
}
