use std::fmt;

use serde::Serialize;

/// A caller-supplied address to resolve, fields verbatim from the request.
#[derive(Clone, Debug)]
pub struct AddressQuery {
  pub city: String,
  pub postal_code: String,
  pub street: String,
  pub house_number: String,
  pub orientation_number: Option<String>,
}

/// A fully resolved address, carrying the dataset's display values. The
/// orientation number is present only when one was supplied and resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedAddress {
  pub city: String,
  pub postal_code: String,
  pub street: String,
  pub house_number: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub orientation_number: Option<String>,
}

/// The cascade stage at which resolution stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
  City,
  PostalCode,
  Street,
  HouseNumber,
  OrientationNumber,
}

impl Stage {
  pub fn as_str(&self) -> &'static str {
    match self {
      Stage::City => "city",
      Stage::PostalCode => "postal_code",
      Stage::Street => "street",
      Stage::HouseNumber => "house_number",
      Stage::OrientationNumber => "orientation_number",
    }
  }
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

pub mod reasons {
  pub const CITY_NOT_FOUND: &str = "city not found";
  pub const POSTAL_CODE_MISMATCH: &str = "postal code does not match city";
  pub const STREET_NOT_FOUND: &str = "street not found";
  pub const HOUSE_NUMBER_NOT_FOUND: &str = "house number not found";
  pub const ORIENTATION_NUMBER_NOT_FOUND: &str = "orientation number not found";
}

/// Every resolution outcome is data, there is no error path out of the
/// cascade.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationResult {
  Valid(ResolvedAddress),
  Invalid { stage: Stage, reason: &'static str, suggestions: Vec<String> },
}

impl ValidationResult {
  pub fn invalid(stage: Stage, reason: &'static str) -> ValidationResult {
    ValidationResult::Invalid { stage, reason, suggestions: Vec::new() }
  }

  pub fn invalid_with(stage: Stage, reason: &'static str, suggestions: Vec<String>) -> ValidationResult {
    ValidationResult::Invalid { stage, reason, suggestions }
  }
}
