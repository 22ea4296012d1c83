use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::api::{AppState, dto::DatasetInfo, errors::AppError};

#[instrument(skip_all)]
pub(crate) async fn dataset_info(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
  let index = state.index.read().await;

  let info = DatasetInfo {
    records: index.records(),
    cities: index.cities().len(),
    streets: index.street_count(),
    loaded_at: index.loaded_at(),
  };

  Ok((StatusCode::OK, Json(info)))
}
