//! Contact entity and its plain record form.

use crate::domain::{
    parse_birthday, BirthdayInput, ContactId, EmailAddress, PhoneNumber, ValidationError,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// ISO date format used in the backing file and in CSV cells.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Plain key-value representation of a contact.
///
/// This is what the backing file and CSV interchange carry. A record is not
/// validated by itself; [`Contact::from_record`] turns it into a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,

    /// ISO date when serialized; tolerated as free text when deserialized.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::domain::deserialize_lenient"
    )]
    pub birthday: Option<BirthdayInput>,
}

/// A validated contact.
///
/// Fields are private: the only ways to obtain a `Contact` are
/// [`Contact::create`] and [`Contact::from_record`], both of which validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    name: String,
    phone: PhoneNumber,
    email: EmailAddress,
    birthday: Option<NaiveDate>,
}

impl Contact {
    /// Build a contact, normalizing and validating every field.
    ///
    /// The name and email are trimmed and the phone is reduced to its
    /// digits. An unparseable birthday is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: `EmptyName`, `InvalidPhone` or
    /// `InvalidEmail`.
    pub fn create(
        id: ContactId,
        name: &str,
        phone: &str,
        email: &str,
        birthday: Option<&BirthdayInput>,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let phone = PhoneNumber::new(phone)?;
        let email = EmailAddress::new(email)?;

        Ok(Self {
            id,
            name: name.to_string(),
            phone,
            email,
            birthday: parse_birthday(birthday),
        })
    }

    /// Rebuild a contact from its record, re-running full validation.
    ///
    /// # Errors
    ///
    /// Returns `EmptyId` for a blank id, otherwise the same errors as
    /// [`Contact::create`].
    pub fn from_record(record: &ContactRecord) -> Result<Self, ValidationError> {
        let id = ContactId::new(record.id.as_str())?;
        Self::create(
            id,
            &record.name,
            &record.phone,
            &record.email,
            record.birthday.as_ref(),
        )
    }

    /// Convert to the plain record form, with the birthday as an ISO date.
    pub fn to_record(&self) -> ContactRecord {
        ContactRecord {
            id: self.id.as_str().to_string(),
            name: self.name.clone(),
            phone: self.phone.as_str().to_string(),
            email: self.email.as_str().to_string(),
            birthday: self.birthday.map(BirthdayInput::Date),
        }
    }

    /// Check an email address without building a contact.
    pub fn is_valid_email(email: &str) -> bool {
        EmailAddress::is_valid(email.trim())
    }

    /// Check a phone number (after normalization) without building a contact.
    pub fn is_valid_phone(phone: &str) -> bool {
        PhoneNumber::is_valid(phone)
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    /// Birthday rendered as `YYYY-MM-DD`, if set.
    pub fn birthday_iso(&self) -> Option<String> {
        self.birthday
            .map(|date| date.format(ISO_DATE_FORMAT).to_string())
    }

    /// Sort key for birthday ordering: `(month, day)`, with absent
    /// birthdays placed after every real date.
    pub(crate) fn birthday_key(&self) -> (u32, u32) {
        self.birthday
            .map_or((13, 32), |date| (date.month(), date.day()))
    }

    /// Lowercased name used for case-insensitive ordering.
    pub(crate) fn sort_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Case-insensitive substring match on name, phone or email.
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        [self.name.as_str(), self.phone.as_str(), self.email.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
