// src/presentation/graphql/mod.rs
pub mod mutation;
pub mod query;
pub mod scalar;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::application::services::RecordService;

use self::mutation::MutationRoot;
use self::query::QueryRoot;

pub type TzdriftSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with the record service injected as shared state.
pub fn build_schema(services: Arc<RecordService>) -> TzdriftSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}
