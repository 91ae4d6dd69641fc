//! Record model representing one contact in the address book.

use crate::domain::anniversary;
use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name, an ordered list of phone numbers and an optional birthday.
///
/// Fields are private so every phone and birthday held by a record has passed
/// validation. The name is fixed at construction; there is no rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    /// Phone numbers in insertion order; duplicates are kept
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a record with initial phones and birthday.
    ///
    /// All-or-nothing: the first field that fails validation is returned as
    /// the error and no record is produced.
    pub fn build<I, S>(
        name: impl Into<String>,
        phones: I,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = ContactName::new(name)?;
        let phones = phones
            .into_iter()
            .map(PhoneNumber::new)
            .collect::<Result<Vec<_>, _>>()?;
        let birthday = birthday.map(Birthday::new).transpose()?;

        Ok(Self {
            name,
            phones,
            birthday,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone` and return it.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<PhoneNumber> {
        let index = self.position_of(phone)?;
        debug!(contact = %self.name, phone, "removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace `old_phone` with `new_phone`.
    ///
    /// The old number is looked up first and the new one validated before the
    /// list is touched, so a failed edit leaves the phones unchanged. On
    /// success the old entry is removed and the new one appended at the end.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let index = self.position_of(old_phone)?;
        let replacement = PhoneNumber::new(new_phone)?;

        debug!(contact = %self.name, old_phone, new_phone, "editing phone");
        self.phones.remove(index);
        self.phones.push(replacement);
        Ok(())
    }

    /// The first phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(birthday)?;
        debug!(contact = %self.name, birthday = %birthday, "setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days until the next birthday counted from the local date.
    ///
    /// `None` when no birthday is set.
    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday_on(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// A birthday already passed this year counts towards next year's, so the
    /// result is never negative. Feb 29 birthdays are observed on Feb 28 in
    /// common years.
    pub fn days_to_next_birthday_on(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        anniversary::days_until_next(birthday.date(), today)
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Name: {}, Phones: [{}]", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
