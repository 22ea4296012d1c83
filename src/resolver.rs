use tracing::instrument;

use crate::{
  index::AddressIndex,
  matching,
  model::{AddressQuery, ResolvedAddress, Stage, ValidationResult, reasons},
  normalize::{normalize, normalize_postal, split_house_number},
};

/// Similarity thresholds, in [0, 100], for the two fuzzy stages. The numeric
/// stages are always exact.
#[derive(Clone, Copy, Debug)]
pub struct Thresholds {
  pub city: f64,
  pub street: f64,
}

/// Resolves a query through the five-stage cascade: city, postal code,
/// street, house number, orientation number. Each stage narrows the candidate
/// sets of the next; the first failing stage terminates resolution and is
/// reported with the valid candidates at that point. A pure computation over
/// the shared index, safe to call from any number of tasks concurrently.
#[instrument(skip_all)]
pub fn resolve(index: &AddressIndex, query: &AddressQuery, thresholds: Thresholds) -> ValidationResult {
  // City: exact match after normalization short-circuits fuzzy scoring. No
  // suggestions on failure, the universe of cities is unbounded.
  let city_input = normalize(&query.city);
  let city = if index.contains_city(&city_input) {
    city_input
  } else {
    match matching::best_match(&city_input, index.cities(), thresholds.city) {
      Some((city, score)) => {
        tracing::debug!(input = %city_input, resolved = %city, score, "fuzzy-matched city");

        city.clone()
      }

      None => return ValidationResult::invalid(Stage::City, reasons::CITY_NOT_FOUND),
    }
  };

  // Postal codes are digit strings and never fuzzy-matched, a transposed
  // digit must not silently correct. A city with exactly one known code
  // substitutes it for whatever was supplied.
  let postal_codes = index.postal_codes(&city);
  let postal_input = normalize_postal(&query.postal_code);
  let postal = if postal_codes.contains(postal_input.as_str()) {
    postal_input
  } else {
    match postal_codes.first() {
      Some(only) if postal_codes.len() == 1 => {
        tracing::debug!(input = %postal_input, resolved = %only, "substituted the city's only postal code");

        only.clone()
      }

      _ => return ValidationResult::invalid_with(Stage::PostalCode, reasons::POSTAL_CODE_MISMATCH, index.displays(postal_codes)),
    }
  };

  let streets = index.streets(&city, &postal);
  let street_input = normalize(&query.street);
  let street = if streets.contains(street_input.as_str()) {
    street_input
  } else {
    match matching::best_match(&street_input, streets, thresholds.street) {
      Some((street, score)) => {
        tracing::debug!(input = %street_input, resolved = %street, score, "fuzzy-matched street");

        street.clone()
      }

      None => return ValidationResult::invalid_with(Stage::Street, reasons::STREET_NOT_FOUND, index.displays(streets)),
    }
  };

  let (house_input, split_orientation) = split_house_number(&query.house_number);
  let house = normalize(house_input);
  let house_numbers = index.house_numbers(&city, &postal, &street);

  if !house_numbers.contains(house.as_str()) {
    return ValidationResult::invalid_with(Stage::HouseNumber, reasons::HOUSE_NUMBER_NOT_FOUND, index.displays(house_numbers));
  }

  // The orientation number is optional, absence skips the stage. A composite
  // "cp/co" house number supplies one implicitly.
  let orientation_input = query.orientation_number.as_deref().map(str::trim).filter(|co| !co.is_empty()).or(split_orientation);

  let orientation = match orientation_input {
    None => None,

    Some(orientation_input) => {
      let orientation = normalize(orientation_input);
      let orientation_numbers = index.orientation_numbers(&city, &postal, &street, &house);

      if !orientation_numbers.contains(orientation.as_str()) {
        return ValidationResult::invalid_with(Stage::OrientationNumber, reasons::ORIENTATION_NUMBER_NOT_FOUND, index.displays(orientation_numbers));
      }

      Some(orientation)
    }
  };

  ValidationResult::Valid(ResolvedAddress {
    city: index.display(&city),
    postal_code: index.display(&postal),
    street: index.display(&street),
    house_number: index.display(&house),
    orientation_number: orientation.map(|orientation| index.display(&orientation)),
  })
}
