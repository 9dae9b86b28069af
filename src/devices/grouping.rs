use std::collections::BTreeMap;

use super::Device;

fn is_blank(s: &str) -> bool {
  s.trim().is_empty()
}

/// Groups devices by lower-cased codename, keeping encounter order within each group.
/// Devices without a codename are left out.
pub fn group_by_codename(devices: &[Device]) -> BTreeMap<String, Vec<Device>> {
  let mut groups = BTreeMap::<String, Vec<Device>>::new();

  for device in devices.iter().filter(|d| !is_blank(&d.codename)) {
    groups
      .entry(device.codename.to_lowercase())
      .or_default()
      .push(device.clone());
  }

  groups
}

/// Groups devices by their exact manufacturer string, ordered by manufacturer.
/// Stored devices have their manufacturer cleared; devices without one are left out.
pub fn group_by_manufacturer(devices: &[Device]) -> BTreeMap<String, Vec<Device>> {
  let mut groups = BTreeMap::<String, Vec<Device>>::new();

  for device in devices.iter().filter(|d| !is_blank(&d.manufacturer)) {
    groups
      .entry(device.manufacturer.clone())
      .or_default()
      .push(device.without_manufacturer());
  }

  groups
}

/// For each popular name in order, every device whose marketing name matches it
/// ignoring case. A device matched by more than one name appears more than once.
pub fn popular_devices<S: AsRef<str>>(devices: &[Device], popular_names: &[S]) -> Vec<Device> {
  let lowered: Vec<String> = devices.iter().map(|d| d.market_name.to_lowercase()).collect();
  let mut popular = vec![];

  for name in popular_names {
    let name = name.as_ref().to_lowercase();
    popular.extend(
      devices
        .iter()
        .zip(&lowered)
        .filter(|(_, market_name)| **market_name == name)
        .map(|(device, _)| device.clone())
    );
  }

  popular
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Vec<Device> {
    vec![
      Device::new("Zeta", "Z One", "Foo", "Z1"),
      Device::new("Acme", "Pixel 2", "foo", "A1"),
      Device::new("acme", "Widget", "bar", "A2"),
      Device::new("", "Nameless", "baz", "N1"),
      Device::new("Acme", "Blank", "  ", "A3")
    ]
  }

  #[test]
  fn codename_groups_ignore_case() {
    let groups = group_by_codename(&sample());

    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["bar", "baz", "foo"]);
    assert_eq!(
      groups["foo"],
      vec![
        Device::new("Zeta", "Z One", "Foo", "Z1"),
        Device::new("Acme", "Pixel 2", "foo", "A1")
      ]
    );
  }

  #[test]
  fn blank_codenames_are_not_grouped() {
    let groups = group_by_codename(&sample());
    assert!(groups.values().flatten().all(|d| d.model != "A3"));
    assert!(!groups.contains_key("  "));
  }

  #[test]
  fn manufacturer_groups_are_case_sensitive_and_sorted() {
    let groups = group_by_manufacturer(&sample());

    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["Acme", "Zeta", "acme"]);
    assert_eq!(
      groups["Acme"],
      vec![
        Device::new("", "Pixel 2", "foo", "A1"),
        Device::new("", "Blank", "  ", "A3")
      ]
    );
    assert_eq!(groups["acme"], vec![Device::new("", "Widget", "bar", "A2")]);
  }

  #[test]
  fn blank_manufacturers_are_not_grouped() {
    let groups = group_by_manufacturer(&sample());
    assert!(!groups.contains_key(""));
    assert_eq!(groups.values().map(Vec::len).sum::<usize>(), 4);
  }

  #[test]
  fn popular_matches_ignore_case_and_keep_duplicates() {
    let popular = popular_devices(&sample(), &["pixel 2", "Nothing", "PIXEL 2", "widget"]);

    assert_eq!(
      popular,
      vec![
        Device::new("Acme", "Pixel 2", "foo", "A1"),
        Device::new("Acme", "Pixel 2", "foo", "A1"),
        Device::new("acme", "Widget", "bar", "A2")
      ]
    );
  }

  #[test]
  fn no_popular_names_means_no_popular_devices() {
    assert!(popular_devices::<&str>(&sample(), &[]).is_empty());
  }
}
