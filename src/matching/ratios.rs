use std::collections::BTreeSet;

use itertools::Itertools;
use strsim::normalized_levenshtein;

const UNBASE_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.9;
const LONG_PARTIAL_SCALE: f64 = 0.6;

/// Plain edit-distance ratio in [0, 100].
pub fn ratio(lhs: &str, rhs: &str) -> f64 {
  normalized_levenshtein(lhs, rhs) * 100.0
}

/// Best `ratio` of the shorter string against every same-length window of the
/// longer one. Scores a string highly when it appears as a substring of the
/// other.
pub fn partial_ratio(lhs: &str, rhs: &str) -> f64 {
  let (shorter, longer) = if lhs.chars().count() <= rhs.chars().count() { (lhs, rhs) } else { (rhs, lhs) };

  if shorter.is_empty() {
    return ratio(shorter, longer);
  }

  let short = shorter.chars().collect::<Vec<_>>();
  let long = longer.chars().collect::<Vec<_>>();

  if short.len() == long.len() {
    return ratio(shorter, longer);
  }

  let mut best = 0.0f64;

  for window in long.windows(short.len()) {
    let window = window.iter().collect::<String>();
    best = best.max(ratio(shorter, &window));

    if best >= 100.0 {
      break;
    }
  }

  best
}

/// `ratio` over whitespace tokens sorted into a canonical order, so word
/// reordering does not count as an edit.
pub fn token_sort_ratio(lhs: &str, rhs: &str) -> f64 {
  token_sort(lhs, rhs, ratio)
}

pub fn partial_token_sort_ratio(lhs: &str, rhs: &str) -> f64 {
  token_sort(lhs, rhs, partial_ratio)
}

/// Token-set construction: compare the sorted token intersection against each
/// side's full sorted token list and keep the best ratio, so one string being
/// a token subset of the other scores close to 100.
pub fn token_set_ratio(lhs: &str, rhs: &str) -> f64 {
  token_set(lhs, rhs, ratio)
}

pub fn partial_token_set_ratio(lhs: &str, rhs: &str) -> f64 {
  token_set(lhs, rhs, partial_ratio)
}

/// Weighted combination of the ratios above, in [0, 100]: the maximum of the
/// plain ratio and the 0.95-scaled token ratios, switching to the partial
/// (substring) variants when one string is at least 1.5 times longer than the
/// other.
pub fn weighted_ratio(lhs: &str, rhs: &str) -> f64 {
  if lhs.is_empty() || rhs.is_empty() {
    return 0.0;
  }

  let base = ratio(lhs, rhs);

  let (shorter, longer) = {
    let (lhs, rhs) = (lhs.chars().count(), rhs.chars().count());

    if lhs <= rhs { (lhs, rhs) } else { (rhs, lhs) }
  };

  let length_ratio = longer as f64 / shorter as f64;

  if length_ratio < 1.5 {
    return base.max(token_sort_ratio(lhs, rhs) * UNBASE_SCALE).max(token_set_ratio(lhs, rhs) * UNBASE_SCALE);
  }

  let partial_scale = if length_ratio > 8.0 { LONG_PARTIAL_SCALE } else { PARTIAL_SCALE };

  base
    .max(partial_ratio(lhs, rhs) * partial_scale)
    .max(partial_token_sort_ratio(lhs, rhs) * UNBASE_SCALE * partial_scale)
    .max(partial_token_set_ratio(lhs, rhs) * UNBASE_SCALE * partial_scale)
}

fn token_sort(lhs: &str, rhs: &str, scorer: fn(&str, &str) -> f64) -> f64 {
  let lhs = lhs.split_whitespace().sorted_unstable().join(" ");
  let rhs = rhs.split_whitespace().sorted_unstable().join(" ");

  scorer(&lhs, &rhs)
}

fn token_set(lhs: &str, rhs: &str, scorer: fn(&str, &str) -> f64) -> f64 {
  let lhs_tokens = lhs.split_whitespace().collect::<BTreeSet<_>>();
  let rhs_tokens = rhs.split_whitespace().collect::<BTreeSet<_>>();

  let intersection = lhs_tokens.intersection(&rhs_tokens).join(" ");
  let lhs_full = lhs_tokens.iter().join(" ");
  let rhs_full = rhs_tokens.iter().join(" ");

  scorer(&intersection, &lhs_full).max(scorer(&intersection, &rhs_full)).max(scorer(&lhs_full, &rhs_full))
}

#[cfg(test)]
mod tests {
  use float_cmp::assert_approx_eq;

  #[test]
  fn ratio() {
    assert_approx_eq!(f64, super::ratio("praha", "praha"), 100.0);
    assert_approx_eq!(f64, super::ratio("prah", "praha"), 80.0);
    assert_approx_eq!(f64, super::ratio("", "praha"), 0.0);
  }

  #[test]
  fn partial_ratio() {
    assert_approx_eq!(f64, super::partial_ratio("namesti", "vaclavske namesti"), 100.0);
    assert_approx_eq!(f64, super::partial_ratio("vaclavske namesti", "namesti"), 100.0);
  }

  #[test]
  fn token_sort_ratio() {
    assert_approx_eq!(f64, super::token_sort_ratio("namesti vaclavske", "vaclavske namesti"), 100.0);
  }

  #[test]
  fn token_set_ratio() {
    assert_approx_eq!(f64, super::token_set_ratio("vaclavske", "vaclavske namesti"), 100.0);
  }

  #[test]
  fn weighted_ratio() {
    assert_approx_eq!(f64, super::weighted_ratio("vaclavske namesti", "vaclavske namesti"), 100.0);
    assert_approx_eq!(f64, super::weighted_ratio("namesti vaclavske", "vaclavske namesti"), 95.0);
    assert_approx_eq!(f64, super::weighted_ratio("vaclavske", "vaclavske namesti praha"), 90.0);
    assert_approx_eq!(f64, super::weighted_ratio("", "praha"), 0.0);

    // A truncated street stays below the default street threshold.
    assert!(super::weighted_ratio("vaclavske nam", "vaclavske namesti") < 85.0);
    // A single-character typo stays above it.
    assert!(super::weighted_ratio("vaclavske namesty", "vaclavske namesti") > 85.0);
  }
}
