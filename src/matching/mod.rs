pub mod ratios;

use compact_str::CompactString;

/// Scores `query` against every candidate and returns the best one, or `None`
/// when no candidate reaches `threshold`, when `query` is empty, or when the
/// candidate set is. Ties keep the first-encountered candidate, so callers
/// wanting run-to-run determinism must iterate candidates in a stable order.
pub fn best_match<'c, I>(query: &str, candidates: I, threshold: f64) -> Option<(&'c CompactString, f64)>
where
  I: IntoIterator<Item = &'c CompactString>,
{
  if query.is_empty() {
    return None;
  }

  let mut best: Option<(&CompactString, f64)> = None;

  for candidate in candidates {
    let score = ratios::weighted_ratio(query, candidate);

    if best.is_none_or(|(_, high)| score > high) {
      best = Some((candidate, score));
    }
  }

  best.filter(|(_, score)| *score >= threshold)
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use compact_str::CompactString;

  fn candidates(values: &[&str]) -> BTreeSet<CompactString> {
    values.iter().map(|value| CompactString::from(*value)).collect()
  }

  #[test]
  fn best_match() {
    let cities = candidates(&["brno", "ostrava", "praha"]);

    let (city, score) = super::best_match("prhaa", &cities, 50.0).unwrap();

    assert_eq!(city, "praha");
    assert!(score >= 50.0);
  }

  #[test]
  fn best_match_below_threshold() {
    let cities = candidates(&["brno", "ostrava", "praha"]);

    assert_eq!(super::best_match("unknownville", &cities, 80.0), None);
  }

  #[test]
  fn best_match_empty_inputs() {
    assert_eq!(super::best_match("praha", &candidates(&[]), 0.0), None);
    assert_eq!(super::best_match("", &candidates(&["praha"]), 0.0), None);
  }

  #[test]
  fn best_match_tie_keeps_first() {
    // Both candidates are one edit away, iteration order breaks the tie.
    let streets = candidates(&["dlouha 1", "dlouha 2"]);

    let (street, _) = super::best_match("dlouha 3", &streets, 0.0).unwrap();

    assert_eq!(street, "dlouha 1");
  }
}
