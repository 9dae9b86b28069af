use std::path::PathBuf;

use clap::Parser;

use crate::{output::DEFAULT_OUTPUT_DIR, popular::DEFAULT_POPULAR_PATH, source::DEFAULT_SOURCE_URL};

#[derive(Debug, Parser)]
#[command(name = "device-names", version, about = "Generate JSON files mapping Android device codenames to marketing names")]
pub struct Cli {
  /// Directory the JSON files are written to
  #[arg(default_value = DEFAULT_OUTPUT_DIR)]
  pub output_dir: PathBuf
}

/// Everything a generation run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub source_url: String,
  pub popular_path: PathBuf,
  pub output_dir: PathBuf
}

impl Default for Config {
  fn default() -> Self {
    Config {
      source_url: DEFAULT_SOURCE_URL.into(),
      popular_path: DEFAULT_POPULAR_PATH.into(),
      output_dir: DEFAULT_OUTPUT_DIR.into()
    }
  }
}

impl From<Cli> for Config {
  fn from(cli: Cli) -> Config {
    Config {
      output_dir: cli.output_dir,
      ..Config::default()
    }
  }
}
