// src/presentation/graphql/mutation.rs
use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use crate::application::services::RecordService;
use crate::presentation::graphql::scalar::Date;
use crate::presentation::graphql::types::UpdateResult;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Store a new date, echoing the parsed instant and the server's
    /// locale-formatted rendering of it.
    async fn update_record(&self, ctx: &Context<'_>, date: Date) -> Result<UpdateResult> {
        let services = ctx.data_unchecked::<Arc<RecordService>>();
        let outcome = services.update_record(date.0).await?;
        Ok(outcome.into())
    }
}
