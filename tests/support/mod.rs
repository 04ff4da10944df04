// tests/support/mod.rs
#![allow(dead_code)]

pub mod mocks;

use std::sync::Arc;

use axum::Router;
use tzdrift::application::ports::time::Clock;
use tzdrift::application::services::RecordService;
use tzdrift::domain::record::{Record, RecordRepository};
use tzdrift::domain::wall_clock;
use tzdrift::infrastructure::store::InMemoryRecordStore;
use tzdrift::presentation::graphql::{TzdriftSchema, build_schema};
use tzdrift::presentation::http::routes::build_router;
use tzdrift::presentation::http::state::HttpState;

use self::mocks::time::FixedClock;

/// Wire the full stack against a deterministic clock.
pub fn make_test_schema_with_clock(clock: FixedClock) -> TzdriftSchema {
    let clock: Arc<dyn Clock> = Arc::new(clock);
    let initial = Record::seeded(
        clock.now(),
        wall_clock::timezone_offset_minutes(clock.local_offset()),
    );
    let repo: Arc<dyn RecordRepository> = Arc::new(InMemoryRecordStore::new(initial));
    let services = Arc::new(RecordService::new(repo, clock));
    build_schema(services)
}

pub fn make_test_schema() -> TzdriftSchema {
    make_test_schema_with_clock(FixedClock::utc())
}

pub fn make_test_router_with_clock(clock: FixedClock) -> Router {
    build_router(HttpState {
        schema: make_test_schema_with_clock(clock),
    })
}

pub fn make_test_router() -> Router {
    make_test_router_with_clock(FixedClock::utc())
}
