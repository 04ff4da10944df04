// src/client/api.rs
use std::time::Duration;

use anyhow::{Result, anyhow};
use graphql_client::{GraphQLQuery, Response};
use reqwest::Client;

// The Date scalar travels as its ISO-8601 string; the walkthrough wants the
// raw wire value anyway, so no richer type is warranted here.
type Date = String;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/record.graphql",
    response_derives = "Debug, Clone"
)]
pub struct RecordQuery;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/update_record.graphql",
    response_derives = "Debug, Clone"
)]
pub struct UpdateRecord;

/// The stored record as the query returns it: the ISO string exactly as the
/// server serialized it, plus the server's offset.
#[derive(Debug, Clone)]
pub struct QueriedRecord {
    pub iso_date: String,
    pub server_offset_minutes: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub scalar_result: String,
    pub server_local_string: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub async fn record(&self) -> Result<QueriedRecord> {
        let body = RecordQuery::build_query(record_query::Variables {});
        let response: Response<record_query::ResponseData> = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        let data = unwrap_data(response)?;

        Ok(QueriedRecord {
            iso_date: data.record.date,
            server_offset_minutes: i32::try_from(data.record.server_offset_minutes)?,
        })
    }

    pub async fn update_record(&self, iso_date: String) -> Result<UpdateOutcome> {
        let body = UpdateRecord::build_query(update_record::Variables { date: iso_date });
        let response: Response<update_record::ResponseData> = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        let data = unwrap_data(response)?;

        Ok(UpdateOutcome {
            scalar_result: data.update_record.scalar_result,
            server_local_string: data.update_record.server_local_string,
        })
    }
}

fn unwrap_data<T>(response: Response<T>) -> Result<T> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        return Err(anyhow!("graphql errors: {errors:?}"));
    }
    response
        .data
        .ok_or_else(|| anyhow!("graphql response carried no data"))
}
