// src/infrastructure/time.rs
use crate::application::ports::time::Clock;
use chrono::{DateTime, FixedOffset, Local, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_offset(&self) -> FixedOffset {
        *Local::now().offset()
    }
}
