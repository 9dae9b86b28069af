use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Where the grouped lists of popular marketing names live by default
pub const DEFAULT_POPULAR_PATH: &str = "POPULAR.json";

/// Reads the popular names file, see [`parse_popular_names`].
pub fn load_popular_names(path: &Path) -> Result<Vec<String>> {
  let text = fs::read_to_string(path)
    .with_context(|| format!("Failed to read popular names from {}", path.display()))?;

  parse_popular_names(&text)
    .with_context(|| format!("Failed to parse popular names in {}", path.display()))
}

/// The file maps a category label to a list of marketing names. Labels are thrown away,
/// names are concatenated in file order.
pub fn parse_popular_names(text: &str) -> Result<Vec<String>> {
  let categories: Map<String, Value> = serde_json::from_str(text)?;
  let mut names = vec![];

  for (category, value) in categories {
    let category_names: Vec<String> = serde_json::from_value(value)
      .with_context(|| format!("Category '{}' is not a list of names", category))?;
    names.extend(category_names);
  }

  Ok(names)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn flattens_categories_in_file_order() {
    let names = parse_popular_names(r#"{
      "Samsung": ["Galaxy S8", "Galaxy S9"],
      "Google": ["Pixel 2", "Pixel 3"],
      "Apple-ish": []
    }"#).unwrap();

    assert_eq!(names, vec!["Galaxy S8", "Galaxy S9", "Pixel 2", "Pixel 3"]);
  }

  #[test]
  fn keeps_names_repeated_across_categories() {
    let names = parse_popular_names(r#"{"Zeta": ["Pixel 2"], "Alpha": ["Pixel 2"]}"#).unwrap();
    assert_eq!(names, vec!["Pixel 2", "Pixel 2"]);
  }

  #[test]
  fn empty_object_has_no_names() {
    assert!(parse_popular_names("{}").unwrap().is_empty());
  }

  #[test]
  fn rejects_malformed_files() {
    assert!(parse_popular_names("[\"Pixel 2\"]").is_err());
    assert!(parse_popular_names(r#"{"Google": "Pixel 2"}"#).is_err());
    assert!(parse_popular_names(r#"{"Google": ["Pixel 2", 3]}"#).is_err());
    assert!(parse_popular_names("{").is_err());
  }

  #[test]
  fn loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"Google": ["Pixel 2"]}}"#).unwrap();

    assert_eq!(load_popular_names(file.path()).unwrap(), vec!["Pixel 2"]);
  }

  #[test]
  fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_popular_names(&dir.path().join(DEFAULT_POPULAR_PATH)).is_err());
  }
}
