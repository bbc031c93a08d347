//! # RipaPay Site Server
//!
//! Thin entry point that delegates to lib-web for server setup.

use lib_web::{start_server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    start_server(config).await
}
