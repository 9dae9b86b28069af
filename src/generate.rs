use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::{
  config::Config,
  devices::{group_by_codename, group_by_manufacturer, parse_devices, popular_devices, NAME_CORRECTIONS},
  output::OutputTree,
  popular::load_popular_names,
  source::DeviceSource
};

/// What a run wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
  pub devices: usize,
  pub dropped_rows: usize,
  pub codenames: usize,
  pub manufacturers: usize,
  pub popular_devices: usize
}

/// Turns the device table into the JSON output tree in one pass:
/// fetch, parse, group, write.
pub struct Generator {
  popular_path: PathBuf,
  output: OutputTree
}

impl Generator {
  pub fn new(config: &Config) -> Self {
    Generator {
      popular_path: config.popular_path.clone(),
      output: OutputTree::new(&config.output_dir)
    }
  }

  pub async fn run<S: DeviceSource + ?Sized>(&self, source: &S) -> Result<Summary> {
    let lines = source.fetch_lines().await?;
    let records = parse_devices(&lines, NAME_CORRECTIONS);
    info!(devices = records.devices.len(), dropped = records.dropped, "parsed device table");

    let popular_names = load_popular_names(&self.popular_path)?;
    let devices = records.devices;

    let by_codename = group_by_codename(&devices);
    let by_manufacturer = group_by_manufacturer(&devices);
    let popular = popular_devices(&devices, &popular_names);

    let summary = Summary {
      devices: devices.len(),
      dropped_rows: records.dropped,
      codenames: by_codename.len(),
      manufacturers: by_manufacturer.len(),
      popular_devices: popular.len()
    };

    info!(root = %self.output.root().display(), "writing json");
    self.output.write_devices(&devices)?;
    self.output.write_codenames(&by_codename)?;
    self.output.write_manufacturers(by_manufacturer)?;
    self.output.write_popular_devices(&popular)?;

    info!(
      devices = summary.devices,
      dropped = summary.dropped_rows,
      codenames = summary.codenames,
      manufacturers = summary.manufacturers,
      popular = summary.popular_devices,
      "done"
    );

    Ok(summary)
  }
}
