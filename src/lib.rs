//! Contact Agenda - a personal contact list with validated entries.
//!
//! Contacts live in memory and are mirrored to a single JSON file after
//! every change. The list can be searched, sorted by name or birthday, and
//! moved in and out of CSV.
//!
//! # Architecture
//!
//! - **domain**: Value objects (id, email, phone, birthday) and validation errors
//! - **models**: The `Contact` entity, its record form, and operation inputs/outputs
//! - **repositories**: The `ContactStore` seam and its JSON file implementation
//! - **agenda**: The `Agenda` that owns the collection and its persistence
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Interactive menu and sample-data seeding
//! - **server**: Minimal HTTP API (list and create)

pub mod agenda;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;

pub use agenda::Agenda;
pub use config::Config;
pub use domain::{BirthdayInput, ContactId, ValidationError};
pub use error::{AgendaError, AgendaResult, ConfigError};
pub use models::{
    Contact, ContactRecord, ContactUpdate, FieldUpdate, ImportOptions, ImportReport, ListOrder,
    NewContact,
};
pub use repositories::{ContactStore, JsonFileStore};
