use serde::{Deserialize, Serialize};

use super::Device;

/// All devices sold under a single manufacturer.
/// The devices carry an empty manufacturer since it is stored once here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Oem {
  pub manufacturer: String,
  pub devices: Vec<Device>
}

impl Oem {
  pub fn new(manufacturer: impl Into<String>, devices: Vec<Device>) -> Self {
    Oem { manufacturer: manufacturer.into(), devices }
  }

  /// "Sony Mobile-Com." => "SONY_MOBILECOM.json"
  pub fn file_name(&self) -> String {
    manufacturer_file_name(&self.manufacturer)
  }
}

pub fn manufacturer_file_name(manufacturer: &str) -> String {
  let stem: String = manufacturer
    .to_uppercase()
    .chars()
    .filter(|c| *c != '.' && *c != '-')
    .map(|c| if c == ' ' { '_' } else { c })
    .collect();

  format!("{}.json", stem)
}
