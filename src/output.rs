use std::{collections::BTreeMap, fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::devices::{Device, Oem};

pub const DEFAULT_OUTPUT_DIR: &str = "json";

/// Writes `value` as pretty JSON, creating missing parent directories and
/// replacing whatever was at `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)
      .with_context(|| format!("Failed to create directory {}", parent.display()))?;
  }

  let json = serde_json::to_string_pretty(value)
    .with_context(|| format!("Failed to serialize {}", path.display()))?;

  fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
  debug!(path = %path.display(), "wrote");
  Ok(())
}

pub fn codename_file_name(codename: &str) -> String {
  format!("{}.json", codename.to_lowercase())
}

/// Lays the generated files out under one output directory:
///
/// ```text
/// devices.json
/// popular-devices.json
/// devices/<codename>.json
/// manufacturers/<MANUFACTURER>.json
/// ```
#[derive(Debug, Clone)]
pub struct OutputTree {
  root: PathBuf
}

impl OutputTree {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    OutputTree { root: root.into() }
  }

  pub fn root(&self) -> &Path { &self.root }

  pub fn devices_path(&self) -> PathBuf {
    self.root.join("devices.json")
  }

  pub fn popular_devices_path(&self) -> PathBuf {
    self.root.join("popular-devices.json")
  }

  pub fn codename_path(&self, codename: &str) -> PathBuf {
    self.root.join("devices").join(codename_file_name(codename))
  }

  pub fn manufacturer_path(&self, oem: &Oem) -> PathBuf {
    self.root.join("manufacturers").join(oem.file_name())
  }

  pub fn write_devices(&self, devices: &[Device]) -> Result<()> {
    write_json(&self.devices_path(), devices)
  }

  pub fn write_popular_devices(&self, devices: &[Device]) -> Result<()> {
    write_json(&self.popular_devices_path(), devices)
  }

  pub fn write_codenames(&self, groups: &BTreeMap<String, Vec<Device>>) -> Result<()> {
    for (codename, devices) in groups {
      write_json(&self.codename_path(codename), devices)?;
    }
    Ok(())
  }

  /// Each group is written as an [`Oem`] record
  pub fn write_manufacturers(&self, groups: BTreeMap<String, Vec<Device>>) -> Result<()> {
    for (manufacturer, devices) in groups {
      let oem = Oem::new(manufacturer, devices);
      write_json(&self.manufacturer_path(&oem), &oem)?;
    }
    Ok(())
  }
}
