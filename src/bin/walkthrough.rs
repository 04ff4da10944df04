// src/bin/walkthrough.rs
use anyhow::Result;
use chrono::Local;

use tzdrift::client::api::ApiClient;
use tzdrift::client::walkthrough;
use tzdrift::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let api = ApiClient::new(config.graphql_endpoint())?;

    // Stand-in for the original demo's date picker: the current local time.
    let selected = Local::now().fixed_offset();

    for adjust in [false, true] {
        let report = walkthrough::run(&api, selected, adjust).await?;
        println!("{report}");
    }

    Ok(())
}
