use std::{
  env::{self, VarError},
  fmt::Display,
  str::FromStr,
};

use crate::api::errors::AppError;

#[derive(Clone)]
pub struct Config {
  pub env: Env,
  pub listen_addr: String,

  // Reference dataset
  pub dataset_url: Option<String>,
  pub dataset_path: Option<String>,
  pub refresh_interval: u64,

  // Matching thresholds for the fuzzy stages
  pub city_threshold: f64,
  pub street_threshold: f64,
}

impl Config {
  pub fn from_env() -> Result<Config, AppError> {
    let config = Config {
      env: Env::from(env::var("ENV").unwrap_or("dev".into())),
      listen_addr: env::var("LISTEN_ADDR").unwrap_or("0.0.0.0:8000".into()),
      dataset_url: env::var("DATASET_URL").ok(),
      dataset_path: env::var("DATASET_PATH").ok(),
      refresh_interval: parse_env("DATASET_REFRESH_INTERVAL", 0)?,
      city_threshold: parse_env("CITY_THRESHOLD", 80.0)?,
      street_threshold: parse_env("STREET_THRESHOLD", 85.0)?,
    };

    for (name, threshold) in [("CITY_THRESHOLD", config.city_threshold), ("STREET_THRESHOLD", config.street_threshold)] {
      if !(0.0..=100.0).contains(&threshold) {
        return Err(AppError::ConfigError(format!("{name} must be a similarity score between 0 and 100")));
      }
    }

    Ok(config)
  }
}

#[derive(Clone)]
pub enum Env {
  Dev,
  Production,
}

impl From<String> for Env {
  fn from(value: String) -> Self {
    match value.as_ref() {
      "dev" => Env::Dev,
      "production" => Env::Production,
      _ => Env::Dev,
    }
  }
}

pub fn parse_env<T>(name: &str, default: T) -> anyhow::Result<T>
where
  T: FromStr,
  T::Err: Display,
{
  match env::var(name) {
    Ok(value) if value.is_empty() => Ok(default),
    Ok(value) => Ok(value.parse::<T>().map_err(|err| AppError::ConfigError(format!("could not read {name}: {err}")))?),
    Err(err) => match err {
      VarError::NotPresent => Ok(default),
      _ => Err(AppError::ConfigError(format!("could not read {name}: {err}")).into()),
    },
  }
}

#[cfg(test)]
mod tests {
  use float_cmp::assert_approx_eq;

  #[test]
  fn parse_env_defaults_when_absent() {
    assert_approx_eq!(f64, super::parse_env("ADRESA_TEST_UNSET", 85.0).unwrap(), 85.0);
    assert_eq!(super::parse_env("ADRESA_TEST_UNSET", 60u64).unwrap(), 60);
  }
}
