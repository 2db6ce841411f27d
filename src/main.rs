use anyhow::Result;
use clap::Parser;

use epicgen_lib::config::ServerConfig;
use epicgen_lib::server::run_server;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();
    run_server(config).await.map_err(anyhow::Error::msg)
}
