// src/application/services.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::dto::{RecordDto, UpdateOutcomeDto};
use crate::application::error::ApplicationResult;
use crate::application::ports::time::Clock;
use crate::domain::record::RecordRepository;
use crate::domain::wall_clock;

pub struct RecordService {
    repo: Arc<dyn RecordRepository>,
    clock: Arc<dyn Clock>,
}

impl RecordService {
    pub fn new(repo: Arc<dyn RecordRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// The currently stored record.
    pub async fn record(&self) -> ApplicationResult<RecordDto> {
        let record = self.repo.load().await?;
        Ok(record.into())
    }

    /// Store a new date and report what the server made of it: the parsed
    /// instant, and that instant rendered in the server's local offset.
    pub async fn update_record(&self, date: DateTime<Utc>) -> ApplicationResult<UpdateOutcomeDto> {
        let mut record = self.repo.load().await?;
        record.set_date(date);
        self.repo.store(record).await?;

        tracing::info!(date = %date, "record updated");

        Ok(UpdateOutcomeDto {
            scalar_result: date,
            server_local_string: wall_clock::locale_string(
                date.with_timezone(&self.clock.local_offset()),
            ),
        })
    }
}
