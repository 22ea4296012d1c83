use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{AddressQuery, ResolvedAddress, Stage, ValidationResult};

/// Per-request overrides for the configured similarity thresholds.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ValidateParams {
  pub city_threshold: Option<f64>,
  pub street_threshold: Option<f64>,
}

/// The address under validation. Aliases accept the reference dataset's
/// column names (`psc`, `cp`, `co`).
#[derive(Clone, Debug, Deserialize, Validate)]
pub(crate) struct ValidatePayload {
  #[validate(length(min = 1, message = "city must not be empty"))]
  pub city: String,
  #[serde(alias = "psc")]
  #[validate(length(min = 1, message = "postal_code must not be empty"))]
  pub postal_code: String,
  #[validate(length(min = 1, message = "street must not be empty"))]
  pub street: String,
  #[serde(alias = "cp")]
  #[validate(length(min = 1, message = "house_number must not be empty"))]
  pub house_number: String,
  #[serde(alias = "co", default)]
  pub orientation_number: Option<String>,
}

impl From<ValidatePayload> for AddressQuery {
  fn from(payload: ValidatePayload) -> Self {
    AddressQuery {
      city: payload.city,
      postal_code: payload.postal_code,
      street: payload.street,
      house_number: payload.house_number,
      orientation_number: payload.orientation_number,
    }
  }
}

#[derive(Serialize)]
pub(crate) struct ValidateResponse {
  pub valid: bool,
  #[serde(flatten)]
  pub address: Option<ResolvedAddress>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub stage: Option<Stage>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reason: Option<&'static str>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub suggestions: Vec<String>,
}

impl From<ValidationResult> for ValidateResponse {
  fn from(result: ValidationResult) -> Self {
    match result {
      ValidationResult::Valid(address) => ValidateResponse {
        valid: true,
        address: Some(address),
        stage: None,
        reason: None,
        suggestions: Vec::new(),
      },

      ValidationResult::Invalid { stage, reason, suggestions } => ValidateResponse {
        valid: false,
        address: None,
        stage: Some(stage),
        reason: Some(reason),
        suggestions,
      },
    }
  }
}

#[derive(Serialize)]
pub(crate) struct DatasetInfo {
  pub records: usize,
  pub cities: usize,
  pub streets: usize,
  pub loaded_at: Timestamp,
}
