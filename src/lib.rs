mod api;
pub mod dataset;
pub mod index;
pub mod matching;
pub mod model;
pub mod normalize;
pub mod resolver;

#[cfg(any(test, feature = "benchmarks"))]
pub mod tests;

use tokio::signal;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

use crate::{
  api::config::{Config, Env},
  index::AddressIndex,
};

pub async fn entrypoint() -> anyhow::Result<()> {
  let config = Config::from_env()?;
  let _logger = init_logger(&config);

  let records = dataset::load(&config).await.expect("could not load initial address dataset");
  let index = AddressIndex::build(records);

  tracing::info!(records = index.records(), cities = index.cities().len(), streets = index.street_count(), "built address index");

  let app = api::routes(&config, index);

  tracing::info!("listening on {}", config.listen_addr);

  let listener = tokio::net::TcpListener::bind(&config.listen_addr).await.expect("could not create listener");

  axum::serve(listener, app).with_graceful_shutdown(shutdown()).await.expect("could not start app");

  Ok(())
}

fn init_logger(config: &Config) -> WorkerGuard {
  use tracing_subscriber::{EnvFilter, prelude::*};

  let (appender, guard) = tracing_appender::non_blocking(std::io::stdout());

  let formatter = match config.env {
    Env::Dev => fmt::layer().compact().with_writer(appender).boxed(),
    Env::Production => fmt::layer().json().with_writer(appender).boxed(),
  };

  tracing_subscriber::registry()
    .with(EnvFilter::builder().try_from_env().or_else(|_| EnvFilter::try_new("info")).unwrap())
    .with(formatter)
    .init();

  guard
}

async fn shutdown() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("failed to install ^C handler");
  };

  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("failed to install terminate signal handler")
      .recv()
      .await;
  };

  tokio::select! {
      () = ctrl_c => tracing::info!("received ^C, initiating shutdown"),
      () = terminate => tracing::info!("received terminate signal, initiating shutdown"),
  }
}
