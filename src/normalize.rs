use any_ascii::any_ascii;
use compact_str::CompactString;

/// Canonical form of a text field: trimmed, diacritics folded to ASCII,
/// lower-cased. Total over any input, the empty string maps to the empty key.
pub fn normalize(text: &str) -> CompactString {
  CompactString::from(any_ascii(text.trim()).to_lowercase())
}

/// Postal codes are digit sequences, only whitespace is stripped.
pub fn normalize_postal(text: &str) -> CompactString {
  text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Splits a composite house number on the first `/`. An absent or empty
/// remainder yields no orientation part.
pub fn split_house_number(text: &str) -> (&str, Option<&str>) {
  match text.split_once('/') {
    Some((house, orientation)) => {
      let orientation = orientation.trim();

      (house, (!orientation.is_empty()).then_some(orientation))
    }

    None => (text, None),
  }
}

#[cfg(test)]
mod tests {
  #[test]
  fn normalize() {
    assert_eq!(super::normalize("  PRAHA "), "praha");
    assert_eq!(super::normalize("Václavské náměstí"), "vaclavske namesti");
    assert_eq!(super::normalize("Nad Šutkou"), "nad sutkou");
    assert_eq!(super::normalize(""), "");
  }

  #[test]
  fn normalize_postal() {
    assert_eq!(super::normalize_postal("110 00"), "11000");
    assert_eq!(super::normalize_postal(" 1 1 0 0 0 "), "11000");
    assert_eq!(super::normalize_postal("ČR 110"), "ČR110");
  }

  #[test]
  fn split_house_number() {
    assert_eq!(super::split_house_number("846/1"), ("846", Some("1")));
    assert_eq!(super::split_house_number("846"), ("846", None));
    assert_eq!(super::split_house_number("846/"), ("846", None));
    assert_eq!(super::split_house_number("846/1/2"), ("846", Some("1/2")));
  }
}
