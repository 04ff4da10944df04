// src/presentation/http/state.rs
use crate::presentation::graphql::TzdriftSchema;

#[derive(Clone)]
pub struct HttpState {
    pub schema: TzdriftSchema,
}
