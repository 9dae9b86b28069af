use tracing::debug;

use super::{normalize_market_name, Device};

/// Columns per row: manufacturer, marketing name, codename, model
const FIELD_COUNT: usize = 4;

/// Result of parsing the data rows of the source table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecords {
  pub devices: Vec<Device>,

  /// rows skipped for not having exactly four fields
  pub dropped: usize
}

/// Splits a row on commas, ignoring the empty fields trailing commas leave behind.
fn split_fields(line: &str) -> Vec<&str> {
  let mut fields: Vec<&str> = line.split(',').collect();
  while fields.last().map_or(false, |f| f.is_empty()) {
    fields.pop();
  }
  fields
}

/// Parses one data row. Rows of the wrong shape yield `None`.
pub fn parse_device(line: &str, corrections: &[(&str, &str)]) -> Option<Device> {
  match split_fields(line).as_slice() {
    [manufacturer, market_name, codename, model] => Some(Device::new(
      *manufacturer,
      normalize_market_name(market_name, corrections),
      *codename,
      *model
    )),
    _ => None
  }
}

/// Parses every data row (header already removed), keeping a count of the rows dropped.
pub fn parse_devices<I, S>(lines: I, corrections: &[(&str, &str)]) -> ParsedRecords
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>
{
  let mut records = ParsedRecords::default();

  for line in lines {
    let line = line.as_ref();
    match parse_device(line, corrections) {
      Some(device) => records.devices.push(device),
      None => {
        debug!(row = line, "dropping row without {} fields", FIELD_COUNT);
        records.dropped += 1;
      }
    }
  }

  records
}
