//! Presentation order for contact listings.

use std::str::FromStr;

/// How [`crate::agenda::Agenda::list`] orders its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Case-insensitive by name.
    #[default]
    Name,
    /// By `(month, day)` of birthday, contacts without one last.
    Birthday,
}

impl FromStr for ListOrder {
    type Err = std::convert::Infallible;

    /// Exactly `"birthday"` selects birthday order; anything else is name order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "birthday" {
            Ok(Self::Birthday)
        } else {
            Ok(Self::Name)
        }
    }
}
