use std::{sync::Arc, time::Duration};

use axum::{
  Router, middleware,
  routing::{get, post},
};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::{api::config::Config, dataset, index::AddressIndex};

pub mod config;
pub mod dto;
pub mod errors;

pub(crate) mod handlers;
pub(crate) mod middlewares;

#[derive(Clone)]
pub struct AppState {
  pub config: Config,
  pub index: Arc<RwLock<AddressIndex>>,
}

pub fn routes(config: &Config, index: AddressIndex) -> Router {
  let index = Arc::new(RwLock::new(index));

  let state = AppState {
    config: config.clone(),
    index: Arc::clone(&index),
  };

  if config.refresh_interval > 0 {
    let config = config.clone();

    tokio::spawn(async move {
      loop {
        tokio::time::sleep(Duration::from_secs(config.refresh_interval)).await;

        // A fresh index is built aside and swapped whole, readers never see a
        // partially built one. Failures keep the previous index serving.
        match dataset::load(&config).await {
          Ok(records) => {
            let rebuilt = AddressIndex::build(records);

            tracing::info!(records = rebuilt.records(), "refreshed address index");

            let mut guard = index.write().await;
            *guard = rebuilt;
          }

          Err(err) => tracing::error!(error = err.to_string(), "could not refresh dataset"),
        }
      }
    });
  }

  Router::new()
    .route("/validate", post(handlers::validate_address))
    .route("/dataset", get(handlers::dataset_info))
    .fallback(handlers::not_found)
    .layer(middleware::from_fn(middlewares::logging::api_logger))
    .layer(TraceLayer::new_for_http().make_span_with(middlewares::create_request_span))
    .layer(middleware::from_fn(middlewares::request_id))
    .with_state(state)
}
