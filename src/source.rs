use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::info;

/// Where Google Play publishes the table of supported devices
pub const DEFAULT_SOURCE_URL: &str = "https://storage.googleapis.com/play_public/supported_devices.csv";

/// Anything that can produce the rows of the supported devices table.
#[async_trait]
pub trait DeviceSource {
  /// The data rows of the table, header excluded
  async fn fetch_lines(&self) -> Result<Vec<String>>;
}

/// Downloads the table over HTTP
#[derive(Debug, Clone)]
pub struct PlayStoreSource {
  url: String,
  http_client: reqwest::Client
}

impl PlayStoreSource {
  pub fn new(url: impl Into<String>) -> Self {
    PlayStoreSource {
      url: url.into(),
      http_client: reqwest::Client::new()
    }
  }
}

#[async_trait]
impl DeviceSource for PlayStoreSource {
  async fn fetch_lines(&self) -> Result<Vec<String>> {
    info!(url = %self.url, "downloading device table");

    let response = self.http_client
      .get(&self.url)
      .send()
      .await
      .with_context(|| format!("Failed to GET {}", self.url))?
      .error_for_status()
      .with_context(|| format!("Bad response fetching {}", self.url))?;

    let body = response
      .bytes()
      .await
      .context("Failed to read device table response body")?;

    let text = decode_utf16(&body).context("Failed to interpret device table as UTF-16 text")?;
    Ok(data_lines(&text))
  }
}

/// The table is served as UTF-16. A byte-order mark picks the endianness,
/// otherwise little-endian is assumed.
pub fn decode_utf16(bytes: &[u8]) -> Result<String> {
  let (bytes, big_endian) = match bytes {
    [0xFF, 0xFE, rest @ ..] => (rest, false),
    [0xFE, 0xFF, rest @ ..] => (rest, true),
    _ => (bytes, false)
  };

  if bytes.len() % 2 != 0 {
    bail!("odd number of bytes ({}) in UTF-16 text", bytes.len());
  }

  let units: Vec<u16> = bytes
    .chunks_exact(2)
    .map(|pair| {
      let pair = [pair[0], pair[1]];
      if big_endian { u16::from_be_bytes(pair) } else { u16::from_le_bytes(pair) }
    })
    .collect();

  Ok(String::from_utf16(&units)?)
}

/// Splits decoded text into rows and drops the header row.
pub fn data_lines(text: &str) -> Vec<String> {
  text
    .lines()
    .skip(1)
    .map(String::from)
    .collect()
}
