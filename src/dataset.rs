use serde::Deserialize;

use crate::api::config::Config;

const DATASET_URL: &str = "https://raw.githubusercontent.com/radekstursa/validator_of_addresses/main/addresses_praha.csv";

/// One row of the reference dataset, with the CSV header's column names. All
/// fields are raw display strings, normalization happens at indexing time.
#[derive(Clone, Debug, Deserialize)]
pub struct AddressRecord {
  pub city: String,
  #[serde(rename = "psc")]
  pub postal_code: String,
  pub street: String,
  #[serde(rename = "cp")]
  pub house_number: String,
  #[serde(rename = "co", default)]
  pub orientation_number: Option<String>,
}

/// Loads the reference dataset, from `DATASET_PATH` when set, otherwise over
/// HTTP from `DATASET_URL` or the published default.
pub async fn load(config: &Config) -> anyhow::Result<Vec<AddressRecord>> {
  let contents = match &config.dataset_path {
    Some(path) => tokio::fs::read_to_string(path).await?,
    None => reqwest::get(config.dataset_url.as_deref().unwrap_or(DATASET_URL)).await?.error_for_status()?.text().await?,
  };

  let records = parse(&contents);

  tracing::info!(records = records.len(), "fetched address dataset");

  Ok(records)
}

/// Best-effort CSV parse: undecodable rows are skipped with a warning, never
/// fatal. The reference file is served with a UTF-8 BOM.
pub fn parse(contents: &str) -> Vec<AddressRecord> {
  let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

  let mut reader = csv::Reader::from_reader(contents.as_bytes());
  let mut records = Vec::new();

  for row in reader.deserialize::<AddressRecord>() {
    match row {
      Ok(record) => records.push(record),
      Err(err) => tracing::warn!(error = err.to_string(), "skipping malformed dataset row"),
    }
  }

  records
}
