use std::collections::{BTreeMap, BTreeSet, HashMap};

use ahash::RandomState;
use compact_str::CompactString;
use jiff::Timestamp;

use crate::{
  dataset::AddressRecord,
  normalize::{normalize, normalize_postal, split_house_number},
};

pub type Key = CompactString;

static EMPTY: BTreeSet<Key> = BTreeSet::new();

/// Precomputed lookup structure over the reference dataset: five nested
/// levels keyed by normalized values, plus a reverse map back to one original
/// display string per key. Built once, never mutated afterwards; a dataset
/// refresh builds a new value and swaps it whole.
///
/// Candidate sets are ordered so fuzzy-match tie-breaks and suggestion lists
/// are deterministic across runs.
#[derive(Clone, Debug)]
pub struct AddressIndex {
  cities: BTreeSet<Key>,
  postal_codes: BTreeMap<Key, BTreeSet<Key>>,
  streets: BTreeMap<(Key, Key), BTreeSet<Key>>,
  house_numbers: BTreeMap<(Key, Key, Key), BTreeSet<Key>>,
  orientation_numbers: BTreeMap<(Key, Key, Key, Key), BTreeSet<Key>>,
  display: HashMap<Key, String, RandomState>,
  records: usize,
  loaded_at: Timestamp,
}

impl AddressIndex {
  pub fn build(records: impl IntoIterator<Item = AddressRecord>) -> AddressIndex {
    let mut index = AddressIndex {
      cities: BTreeSet::new(),
      postal_codes: BTreeMap::new(),
      streets: BTreeMap::new(),
      house_numbers: BTreeMap::new(),
      orientation_numbers: BTreeMap::new(),
      display: HashMap::default(),
      records: 0,
      loaded_at: Timestamp::now(),
    };

    for record in records {
      index.insert(&record);
      index.records += 1;
    }

    index
  }

  fn insert(&mut self, record: &AddressRecord) {
    let city = normalize(&record.city);
    let postal = normalize_postal(&record.postal_code);
    let street = normalize(&record.street);

    let (house_raw, split_orientation) = split_house_number(&record.house_number);
    let house = normalize(house_raw);

    self.remember(&city, &record.city);
    self.remember(&postal, &record.postal_code);
    self.remember(&street, &record.street);
    self.remember(&house, house_raw);

    self.cities.insert(city.clone());
    self.postal_codes.entry(city.clone()).or_default().insert(postal.clone());
    self.streets.entry((city.clone(), postal.clone())).or_default().insert(street.clone());
    self.house_numbers.entry((city.clone(), postal.clone(), street.clone())).or_default().insert(house.clone());

    // An explicit orientation number wins over one carried in a composite
    // "cp/co" house number; empty values are not indexed.
    let orientation_raw = record.orientation_number.as_deref().map(str::trim).filter(|co| !co.is_empty()).or(split_orientation);

    if let Some(orientation_raw) = orientation_raw {
      let orientation = normalize(orientation_raw);

      self.remember(&orientation, orientation_raw);
      self.orientation_numbers.entry((city, postal, street, house)).or_default().insert(orientation);
    }
  }

  fn remember(&mut self, key: &Key, display: &str) {
    if !self.display.contains_key(key) {
      self.display.insert(key.clone(), display.trim().to_string());
    }
  }

  pub fn cities(&self) -> &BTreeSet<Key> {
    &self.cities
  }

  pub fn contains_city(&self, city: &str) -> bool {
    self.cities.contains(city)
  }

  pub fn postal_codes(&self, city: &str) -> &BTreeSet<Key> {
    self.postal_codes.get(city).unwrap_or(&EMPTY)
  }

  pub fn streets(&self, city: &str, postal: &str) -> &BTreeSet<Key> {
    self.streets.get(&(Key::from(city), Key::from(postal))).unwrap_or(&EMPTY)
  }

  pub fn house_numbers(&self, city: &str, postal: &str, street: &str) -> &BTreeSet<Key> {
    self.house_numbers.get(&(Key::from(city), Key::from(postal), Key::from(street))).unwrap_or(&EMPTY)
  }

  pub fn orientation_numbers(&self, city: &str, postal: &str, street: &str, house: &str) -> &BTreeSet<Key> {
    self
      .orientation_numbers
      .get(&(Key::from(city), Key::from(postal), Key::from(street), Key::from(house)))
      .unwrap_or(&EMPTY)
  }

  /// The display form of a normalized key, falling back to the key itself for
  /// values that never went through indexing.
  pub fn display(&self, key: &Key) -> String {
    self.display.get(key).cloned().unwrap_or_else(|| key.to_string())
  }

  pub fn displays(&self, keys: &BTreeSet<Key>) -> Vec<String> {
    keys.iter().map(|key| self.display(key)).collect()
  }

  pub fn records(&self) -> usize {
    self.records
  }

  pub fn street_count(&self) -> usize {
    self.streets.values().map(BTreeSet::len).sum()
  }

  pub fn loaded_at(&self) -> Timestamp {
    self.loaded_at
  }
}

#[cfg(test)]
mod tests {
  use crate::{dataset::AddressRecord, tests::rec};

  use super::AddressIndex;

  #[test]
  fn build_nests_levels_under_their_parents() {
    let index = AddressIndex::build([
      rec("Praha").postal_code("110 00").street("Václavské náměstí").house_number("846").orientation_number("1").call(),
      rec("Praha").postal_code("120 00").street("Karlovo náměstí").house_number("317").call(),
      rec("Brno").postal_code("602 00").street("Náměstí Svobody").house_number("91").call(),
    ]);

    assert_eq!(index.records(), 3);
    assert!(index.contains_city("praha"));
    assert!(index.contains_city("brno"));

    assert_eq!(index.postal_codes("praha").len(), 2);
    assert_eq!(index.postal_codes("brno").len(), 1);

    // Streets are scoped by (city, postal), not global.
    assert!(index.streets("praha", "11000").contains("vaclavske namesti"));
    assert!(!index.streets("praha", "12000").contains("vaclavske namesti"));
    assert!(index.house_numbers("praha", "11000", "vaclavske namesti").contains("846"));
    assert!(index.orientation_numbers("praha", "11000", "vaclavske namesti", "846").contains("1"));
    assert!(index.orientation_numbers("praha", "12000", "karlovo namesti", "317").is_empty());
  }

  #[test]
  fn duplicate_records_collapse() {
    let record = rec("Praha").postal_code("110 00").street("Václavské náměstí").house_number("846").call();
    let index = AddressIndex::build([record.clone(), record]);

    assert_eq!(index.records(), 2);
    assert_eq!(index.postal_codes("praha").len(), 1);
    assert_eq!(index.house_numbers("praha", "11000", "vaclavske namesti").len(), 1);
  }

  #[test]
  fn first_seen_display_wins() {
    let index = AddressIndex::build([
      rec("PRAHA ").postal_code("110 00").street("Václavské náměstí").house_number("846").call(),
      rec("Praha").postal_code("110 00").street("Václavské náměstí").house_number("847").call(),
    ]);

    assert_eq!(index.display(&"praha".into()), "PRAHA");
    assert_eq!(index.display(&"11000".into()), "110 00");
  }

  #[test]
  fn composite_house_number_feeds_both_levels() {
    let index = AddressIndex::build([rec("Praha").postal_code("110 00").street("Václavské náměstí").house_number("846/1").call()]);

    assert!(index.house_numbers("praha", "11000", "vaclavske namesti").contains("846"));
    assert!(index.orientation_numbers("praha", "11000", "vaclavske namesti", "846").contains("1"));
  }

  #[test]
  fn missing_keys_resolve_to_empty_sets() {
    let index = AddressIndex::build(Vec::<AddressRecord>::new());

    assert!(index.postal_codes("nowhere").is_empty());
    assert!(index.streets("nowhere", "00000").is_empty());
    assert!(index.house_numbers("nowhere", "00000", "x").is_empty());
    assert!(index.orientation_numbers("nowhere", "00000", "x", "1").is_empty());
  }

  #[test]
  fn suggestions_render_display_values() {
    let index = AddressIndex::build([
      rec("Praha").postal_code("110 00").street("Václavské náměstí").house_number("846").call(),
      rec("Praha").postal_code("110 00").street("Na Příkopě").house_number("852").call(),
    ]);

    assert_eq!(index.displays(index.streets("praha", "11000")), vec!["Na Příkopě", "Václavské náměstí"]);
  }
}
