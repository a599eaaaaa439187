//! casebook-server - serves the case-study catalog over HTTP
//!
//! Binds 127.0.0.1:5000 by default and answers GET /api/data with the
//! catalog JSON, CORS-restricted to the configured browser origin.

use anyhow::Result;
use casebook::server::{self, config::load_settings};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("CASEBOOK_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let settings = load_settings();
    server::run(settings).await
}
