//! Shared sample data for integration tests.

use address_book_assistant::models::{AddressBook, Record};
use chrono::NaiveDate;

/// The date the characterization tests are pinned to.
#[allow(dead_code)]
pub fn june_first_2024() -> NaiveDate {
    date(2024, 6, 1)
}

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a sample record; panics on invalid test data.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    Record::build(name, phones.iter().copied(), birthday).unwrap()
}

/// A small book with a mix of phones and birthdays.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890", "5555555555"], Some("15.06.1990")));
    book.add_record(sample_record("Jane", &["0987654321"], None));
    book.add_record(sample_record("Leap", &[], Some("29.02.2000")));
    book
}

/// Names of the given records, in order.
#[allow(dead_code)]
pub fn names_of<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .map(|r| r.name().as_str().to_string())
        .collect()
}
