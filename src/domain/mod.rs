//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact. Each value object
//! normalizes its input and validates it at construction time, so an
//! invalid value cannot be represented once it exists.

pub mod birthday;
pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use birthday::{deserialize_lenient, parse_birthday, BirthdayInput};
pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
