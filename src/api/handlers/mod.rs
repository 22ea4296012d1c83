mod dataset;
mod validate;

use axum::response::IntoResponse;

use crate::api::errors::AppError;

pub(crate) use self::dataset::dataset_info;
pub(crate) use self::validate::validate_address;

pub(crate) async fn not_found() -> impl IntoResponse {
  AppError::ResourceNotFound
}
