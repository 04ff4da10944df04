// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tzdrift::application::ports::time::Clock;
use tzdrift::application::services::RecordService;
use tzdrift::config::AppConfig;
use tzdrift::domain::record::{Record, RecordRepository};
use tzdrift::domain::wall_clock;
use tzdrift::infrastructure::store::InMemoryRecordStore;
use tzdrift::infrastructure::time::SystemClock;
use tzdrift::presentation::graphql::build_schema;
use tzdrift::presentation::http::routes::build_router;
use tzdrift::presentation::http::state::HttpState;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let initial = Record::seeded(
        clock.now(),
        wall_clock::timezone_offset_minutes(clock.local_offset()),
    );
    let repo: Arc<dyn RecordRepository> = Arc::new(InMemoryRecordStore::new(initial));
    let services = Arc::new(RecordService::new(repo, clock));

    let state = HttpState {
        schema: build_schema(services),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
