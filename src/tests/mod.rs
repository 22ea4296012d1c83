
use crate::{dataset::AddressRecord, index::AddressIndex, model::AddressQuery};

#[bon::builder]
pub fn rec(#[builder(start_fn)] city: &str, postal_code: &str, street: &str, house_number: &str, orientation_number: Option<&str>) -> AddressRecord {
  AddressRecord {
    city: city.to_string(),
    postal_code: postal_code.to_string(),
    street: street.to_string(),
    house_number: house_number.to_string(),
    orientation_number: orientation_number.map(ToOwned::to_owned),
  }
}

pub fn q(city: &str, postal_code: &str, street: &str, house_number: &str, orientation_number: Option<&str>) -> AddressQuery {
  AddressQuery {
    city: city.to_string(),
    postal_code: postal_code.to_string(),
    street: street.to_string(),
    house_number: house_number.to_string(),
    orientation_number: orientation_number.map(ToOwned::to_owned),
  }
}

pub fn prague_records() -> Vec<AddressRecord> {
  vec![
    rec("Praha").postal_code("110 00").street("Václavské náměstí").house_number("846").orientation_number("1").call(),
    rec("Praha").postal_code("110 00").street("Václavské náměstí").house_number("847").orientation_number("2").call(),
    rec("Praha").postal_code("110 00").street("Na Příkopě").house_number("852").orientation_number("3").call(),
    rec("Praha").postal_code("120 00").street("Karlovo náměstí").house_number("317").orientation_number("13").call(),
    rec("Brno").postal_code("602 00").street("Náměstí Svobody").house_number("91").call(),
  ]
}

pub fn prague_index() -> AddressIndex {
  AddressIndex::build(prague_records())
}
