mod config;
mod devices;
mod generate;
mod output;
mod popular;
mod source;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::{Cli, Config};
use generate::Generator;
use source::PlayStoreSource;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  let config = Config::from(Cli::parse());

  // RUST_LOG wins, otherwise report progress
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_target(false)
    .with_writer(io::stderr)
    .init();

  let source = PlayStoreSource::new(config.source_url.clone());
  Generator::new(&config).run(&source).await?;

  Ok(())
}
