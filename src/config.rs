// src/config.rs
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    graphql_endpoint: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_graphql_endpoint() -> String {
    "http://127.0.0.1:8080/graphql".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults that let both halves of the demo run locally out of the box.
    pub fn from_env() -> Self {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let graphql_endpoint =
            env::var("TZDRIFT_ENDPOINT").unwrap_or_else(|_| default_graphql_endpoint());

        Self {
            listen_addr,
            graphql_endpoint,
        }
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Where the walkthrough client sends its GraphQL operations.
    pub fn graphql_endpoint(&self) -> &str {
        &self.graphql_endpoint
    }
}
