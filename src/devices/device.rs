use serde::{Deserialize, Serialize};

/// One retail device variant as listed in the supported devices table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
  /// The retail brand, e.g. "Google"
  pub manufacturer: String,

  /// The consumer-recognizable name of the device
  pub market_name: String,

  /// Value of `ro.product.device`
  pub codename: String,

  /// Value of `ro.product.model`
  pub model: String
}

impl Device {
  pub fn new(
    manufacturer: impl Into<String>,
    market_name: impl Into<String>,
    codename: impl Into<String>,
    model: impl Into<String>
  ) -> Self {
    Device {
      manufacturer: manufacturer.into(),
      market_name: market_name.into(),
      codename: codename.into(),
      model: model.into()
    }
  }

  /// The same device with the manufacturer blanked out, used once it is
  /// already grouped under its manufacturer.
  pub fn without_manufacturer(&self) -> Self {
    Device {
      manufacturer: String::new(),
      ..self.clone()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_market_name_key_in_field_order() {
    let json = serde_json::to_string(&Device::new("Acme", "FooBar", "foocode", "FB100")).unwrap();
    assert_eq!(
      json,
      r#"{"manufacturer":"Acme","market_name":"FooBar","codename":"foocode","model":"FB100"}"#
    );
  }

  #[test]
  fn without_manufacturer_keeps_other_fields() {
    let device = Device::new("Acme", "FooBar", "foocode", "FB100").without_manufacturer();
    assert_eq!(device, Device::new("", "FooBar", "foocode", "FB100"));
  }
}
