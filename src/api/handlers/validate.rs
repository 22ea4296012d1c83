use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::{Query, QueryRejection, WithRejection};
use tracing::instrument;

use crate::{
  api::{
    AppState,
    dto::{ValidateParams, ValidatePayload, ValidateResponse},
    errors::AppError,
    middlewares::json_rejection::TypedJson,
  },
  model::{AddressQuery, ValidationResult},
  resolver::{self, Thresholds},
};

#[instrument(skip_all)]
pub(crate) async fn validate_address(
  State(state): State<AppState>,
  WithRejection(Query(params), _): WithRejection<Query<ValidateParams>, QueryRejection>,
  TypedJson(payload): TypedJson<ValidatePayload>,
) -> Result<(StatusCode, impl IntoResponse), AppError> {
  let thresholds = Thresholds {
    city: params.city_threshold.unwrap_or(state.config.city_threshold).clamp(0.0, 100.0),
    street: params.street_threshold.unwrap_or(state.config.street_threshold).clamp(0.0, 100.0),
  };

  let query = AddressQuery::from(payload);

  let result = {
    let index = state.index.read().await;

    resolver::resolve(&index, &query, thresholds)
  };

  match &result {
    ValidationResult::Valid(address) => tracing::debug!(city = address.city, street = address.street, "validated address"),
    ValidationResult::Invalid { stage, .. } => tracing::debug!(stage = stage.as_str(), "rejected address"),
  }

  Ok((StatusCode::OK, Json(ValidateResponse::from(result))))
}
