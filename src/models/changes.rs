//! Input types for creating and updating contacts.

use crate::domain::BirthdayInput;
use serde::Deserialize;

/// Fields for a new contact. The id is always generated by the agenda.
///
/// Missing fields deserialize as empty strings so that an incomplete
/// request is reported as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(deserialize_with = "crate::domain::deserialize_lenient")]
    pub birthday: Option<BirthdayInput>,
}

impl NewContact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            birthday: None,
        }
    }

    #[must_use]
    pub fn with_birthday(mut self, birthday: impl Into<BirthdayInput>) -> Self {
        self.birthday = Some(birthday.into());
        self
    }
}

/// A single field of an update: leave it, replace it, or clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    Keep,
    Set(T),
    Clear,
}

impl<T> FieldUpdate<T> {
    /// Resolve against the current value.
    ///
    /// `Clear` yields `None`; for required fields the caller maps that to an
    /// empty value, which then fails validation.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Set(value) => Some(value),
            Self::Clear => None,
        }
    }

    /// Transform the value carried by `Set`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldUpdate<U> {
        match self {
            Self::Keep => FieldUpdate::Keep,
            Self::Set(value) => FieldUpdate::Set(f(value)),
            Self::Clear => FieldUpdate::Clear,
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

/// Partial update of a contact. Every field defaults to [`FieldUpdate::Keep`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: FieldUpdate<String>,
    pub phone: FieldUpdate<String>,
    pub email: FieldUpdate<String>,
    pub birthday: FieldUpdate<BirthdayInput>,
}

impl ContactUpdate {
    /// True when no field is touched.
    pub fn is_empty(&self) -> bool {
        self.name.is_keep() && self.phone.is_keep() && self.email.is_keep() && self.birthday.is_keep()
    }
}
