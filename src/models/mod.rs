//! Data models for the contact agenda.
//!
//! The validated [`Contact`] entity, its plain [`ContactRecord`] form, and
//! the input and output types used by agenda operations.

pub mod changes;
pub mod contact;
pub mod import;
pub mod order;

pub use changes::{ContactUpdate, FieldUpdate, NewContact};
pub use contact::{Contact, ContactRecord, ISO_DATE_FORMAT};
pub use import::{ImportError, ImportOptions, ImportReport};
pub use order::ListOrder;
