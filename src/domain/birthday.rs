//! Lenient birthday parsing.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Text formats tried, in order, when a birthday arrives as a string.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d-%m-%Y",
    "%Y%m%d",
    "%d %b %Y",
    "%B %d, %Y",
];

/// A birthday as supplied by a caller: an already-typed date or raw text.
///
/// Deserializes from a JSON string: ISO dates become `Date`, anything else
/// stays `Text` and is resolved by [`parse_birthday`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BirthdayInput {
    Date(NaiveDate),
    Text(String),
}

impl From<NaiveDate> for BirthdayInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<String> for BirthdayInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for BirthdayInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Resolve a birthday input to a date.
///
/// Blank or unparseable text yields `None` rather than an error.
pub fn parse_birthday(input: Option<&BirthdayInput>) -> Option<NaiveDate> {
    match input? {
        BirthdayInput::Date(date) => Some(*date),
        BirthdayInput::Text(text) => parse_text(text),
    }
}

/// Field deserializer for an optional birthday.
///
/// Strings become [`BirthdayInput`]; `null` and every other JSON type are
/// treated as absent instead of failing the enclosing object.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<BirthdayInput>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(match text.parse::<NaiveDate>() {
            Ok(date) => BirthdayInput::Date(date),
            Err(_) => BirthdayInput::Text(text),
        })),
        Some(other) => {
            tracing::debug!(input = %other, "Non-text birthday treated as absent");
            Ok(None)
        }
    }
}

fn parse_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let parsed = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok());
    if parsed.is_none() {
        tracing::debug!(input = %text, "Unparseable birthday treated as absent");
    }
    parsed
}
