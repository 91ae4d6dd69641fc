//! The address book: records keyed by contact name.

use crate::domain::anniversary;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Serialized form of the whole book: records in listing order.
#[derive(Serialize)]
struct BookSnapshotRef<'a> {
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct BookSnapshot {
    #[serde(default)]
    records: Vec<Record>,
}

/// A mapping from contact name to [`Record`].
///
/// Lookups are by exact name. Listing follows insertion order; replacing a
/// record under an existing name keeps that name's original position.
/// Every stored record's own name equals the key it is stored under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name, replacing any record with that name.
    ///
    /// This is a blind upsert: phone lists are not merged. Returns the record
    /// that was replaced, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        debug!(contact = %key, "storing record");

        let previous = self.records.insert(key.clone(), record);
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for mutation.
    ///
    /// The record's name cannot be changed through the reference, so the
    /// key invariant holds.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let removed = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        debug!(contact = name, "deleted record");
        Ok(removed)
    }

    /// Records whose birthday falls within `days` days from the local date.
    pub fn upcoming_birthdays(&self, days: u32) -> Vec<&Record> {
        self.upcoming_birthdays_on(Local::now().date_naive(), days)
    }

    /// Records whose birthday this year falls in `today..=today + days`.
    ///
    /// Only this calendar year's occurrence is considered: a birthday that
    /// already passed this year is excluded even when next year's occurrence
    /// would be inside the window. Feb 29 birthdays are observed on Feb 28 in
    /// common years. Results follow insertion order, not proximity.
    pub fn upcoming_birthdays_on(&self, today: NaiveDate, days: u32) -> Vec<&Record> {
        let end = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);

        let upcoming: Vec<&Record> = self
            .iter()
            .filter(|record| {
                record
                    .birthday()
                    .and_then(|birthday| {
                        anniversary::anniversary_in_year(birthday.date(), today.year())
                    })
                    .is_some_and(|date| today <= date && date <= end)
            })
            .collect();

        debug!(%today, days, matches = upcoming.len(), "upcoming birthdays query");
        upcoming
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Serde support - the book is stored as an ordered list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BookSnapshotRef {
            records: self.iter().collect(),
        }
        .serialize(serializer)
    }
}

// Serde support - rebuild the index; a repeated name keeps the last record
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let snapshot = BookSnapshot::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in snapshot.records {
            book.add_record(record);
        }
        Ok(book)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.iter().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
