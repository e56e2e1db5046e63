//! Record model representing one entry in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, an optional birthday, and an ordered list of
/// phone numbers unique by value.
///
/// The name is fixed at construction; it is the key under which the record
/// lives inside an [`AddressBook`](crate::AddressBook). Phones keep their
/// insertion order, and adding an already-present number is a silent no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    birthday: Birthday,
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a new record with the given name and optional birthday string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for an empty name and
    /// `ValidationError::InvalidDate` for a birthday string that is not a
    /// real `YYYY.MM.DD` calendar date.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            birthday: Birthday::new(birthday)?,
            phones: Vec::new(),
        })
    }

    /// Get the record's name value.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the record's birthday.
    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    /// Get the record's phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Add a phone number to the record.
    ///
    /// A number already present on the record is ignored, so repeated adds
    /// of the same value are idempotent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is not a ten digit
    /// string.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        if !self.phones.contains(&phone) {
            tracing::debug!(name = self.name.as_str(), phone = %phone, "adding phone");
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Remove every phone whose value equals `raw`.
    ///
    /// Missing values are a no-op, and so is a `raw` that is not a valid
    /// phone number (it cannot match a stored value).
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| p.as_str() != raw);
    }

    /// Replace the phone `old` with `new`.
    ///
    /// The old number is removed, then `new` goes through [`add_phone`]'s
    /// validation and dedup.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` when `old` or `new` is not a valid
    /// phone number, and `RecordError::PhoneNotFound` when `old` is not on
    /// the record.
    ///
    /// [`add_phone`]: Record::add_phone
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let old_phone = PhoneNumber::new(old)?;
        if self.phones.contains(&old_phone) {
            self.remove_phone(old_phone.as_str());
            self.add_phone(new)?;
            return Ok(());
        }
        Err(RecordError::PhoneNotFound(old.to_string()))
    }

    /// Find a stored phone by exact value. `raw` is not validated; a value
    /// that could never be stored is simply not found.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Days from today until the record's next birthday.
    ///
    /// Returns `None` when no birthday is set, or when the birthday has no
    /// occurrence in the target year (Feb 29 outside a leap year).
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Same as [`days_to_birthday`], with an explicit "today".
    ///
    /// [`days_to_birthday`]: Record::days_to_birthday
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.days_until_next(today)
    }
}

// Display support - the per-entry line body used by paged listings
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(
            f,
            "birthday: {}, phones: [{}]",
            self.birthday,
            phones.join(", ")
        )
    }
}
