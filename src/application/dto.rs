// src/application/dto.rs
use crate::domain::record::Record;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct RecordDto {
    pub date: DateTime<Utc>,
    pub server_offset_minutes: i32,
}

impl From<Record> for RecordDto {
    fn from(record: Record) -> Self {
        Self {
            date: record.date,
            server_offset_minutes: record.server_offset_minutes,
        }
    }
}

/// Response projection of an update; never stored.
#[derive(Debug, Clone)]
pub struct UpdateOutcomeDto {
    pub scalar_result: DateTime<Utc>,
    pub server_local_string: String,
}
