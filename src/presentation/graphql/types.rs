// src/presentation/graphql/types.rs
use async_graphql::SimpleObject;

use crate::application::dto::{RecordDto, UpdateOutcomeDto};
use crate::presentation::graphql::scalar::Date;

/// The record held by the server.
#[derive(Debug, SimpleObject)]
#[graphql(name = "Record")]
pub struct RecordObject {
    pub date: Date,
    pub server_offset_minutes: i32,
}

impl From<RecordDto> for RecordObject {
    fn from(dto: RecordDto) -> Self {
        Self {
            date: dto.date.into(),
            server_offset_minutes: dto.server_offset_minutes,
        }
    }
}

/// What the server made of a submitted date: the instant the scalar parsed,
/// and its rendering in the server's local time.
#[derive(Debug, SimpleObject)]
pub struct UpdateResult {
    pub scalar_result: Date,
    pub server_local_string: String,
}

impl From<UpdateOutcomeDto> for UpdateResult {
    fn from(dto: UpdateOutcomeDto) -> Self {
        Self {
            scalar_result: dto.scalar_result.into(),
            server_local_string: dto.server_local_string,
        }
    }
}
