//! The contact agenda: an in-memory collection mirrored to a backing store.
//!
//! [`Agenda`] is the single owner of its contacts. Reads work on the
//! in-memory collection; every successful mutation hands the whole
//! collection to the [`ContactStore`] before returning. If that save fails
//! the in-memory change is rolled back, so memory and store never diverge
//! from a caller's point of view.

mod transfer;

use crate::config::Config;
use crate::domain::ContactId;
use crate::error::{AgendaError, AgendaResult};
use crate::models::{Contact, ContactRecord, ContactUpdate, ListOrder, NewContact};
use crate::repositories::{ContactStore, JsonFileStore};
use std::collections::HashSet;
use tracing::{debug, info};

/// Personal contact list with validated entries and durable storage.
pub struct Agenda {
    contacts: Vec<Contact>,
    store: Box<dyn ContactStore>,
}

impl Agenda {
    /// Open the agenda at the configured backing file.
    ///
    /// The data directory is created if missing. A missing file starts an
    /// empty agenda; a file that is not JSON at all also starts empty.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created, the file cannot be read,
    /// or any record in a well-formed file is invalid.
    pub fn open(config: &Config) -> AgendaResult<Self> {
        let store = JsonFileStore::open(config.data_path())?;
        info!(path = %store.path().display(), "Opening agenda");
        Self::with_store(Box::new(store))
    }

    /// Build an agenda over any store, loading its current contents.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::InvalidRecord` if a stored record fails
    /// validation or repeats an earlier id, and propagates store errors.
    pub fn with_store(store: Box<dyn ContactStore>) -> AgendaResult<Self> {
        let records = store.load()?;
        let contacts = Self::validate_loaded(&records)?;
        info!(count = contacts.len(), "Agenda loaded");
        Ok(Self { contacts, store })
    }

    fn validate_loaded(records: &[ContactRecord]) -> AgendaResult<Vec<Contact>> {
        let mut seen = HashSet::with_capacity(records.len());
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let contact =
                    Contact::from_record(record).map_err(|e| AgendaError::InvalidRecord {
                        index,
                        reason: e.to_string(),
                    })?;
                if !seen.insert(contact.id().clone()) {
                    return Err(AgendaError::InvalidRecord {
                        index,
                        reason: format!("duplicate id {}", contact.id()),
                    });
                }
                Ok(contact)
            })
            .collect()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts in stored order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Look up a contact by id.
    pub fn find(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id().as_str() == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.id().as_str() == id)
    }

    /// All contacts in the requested presentation order.
    pub fn list(&self, order: ListOrder) -> Vec<Contact> {
        let mut contacts = self.contacts.clone();
        match order {
            ListOrder::Name => contacts.sort_by_cached_key(Contact::sort_name),
            ListOrder::Birthday => {
                contacts.sort_by_cached_key(|c| (c.birthday_key(), c.sort_name()));
            }
        }
        contacts
    }

    /// Contacts whose name, phone or email contains `query`, ignoring case.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let results: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|c| c.matches(&needle))
            .cloned()
            .collect();
        debug!(query = %needle, result_count = results.len(), "Search completed");
        results
    }

    /// Contacts born in `month` (1-12), ordered by day.
    ///
    /// Any other month yields an empty list.
    pub fn birthdays_in_month(&self, month: u32) -> Vec<Contact> {
        if !(1..=12).contains(&month) {
            return Vec::new();
        }
        let mut contacts: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|c| c.birthday_key().0 == month)
            .cloned()
            .collect();
        contacts.sort_by_cached_key(|c| (c.birthday_key().1, c.sort_name()));
        contacts
    }

    /// Validate and append a new contact under a fresh id, then persist.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::Validation` without touching the collection or
    /// the store, or a store error after rolling the append back.
    pub fn add(&mut self, new: NewContact) -> AgendaResult<Contact> {
        let contact = Contact::create(
            ContactId::generate(),
            &new.name,
            &new.phone,
            &new.email,
            new.birthday.as_ref(),
        )?;

        self.contacts.push(contact.clone());
        if let Err(e) = self.persist() {
            self.contacts.pop();
            return Err(e);
        }

        info!(id = %contact.id(), "Contact added");
        Ok(contact)
    }

    /// Apply `changes` to the contact with `id`, revalidate, then persist.
    ///
    /// Fields left as `Keep` retain their values. The updated contact takes
    /// the original's position.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::NotFound` for an unknown id and
    /// `AgendaError::Validation` if the merged record is invalid; in both
    /// cases nothing changes and nothing is persisted.
    pub fn update(&mut self, id: &str, changes: ContactUpdate) -> AgendaResult<Contact> {
        let index = self
            .position(id)
            .ok_or_else(|| AgendaError::NotFound(id.to_string()))?;
        debug!(id = %id, noop = changes.is_empty(), "Updating contact");

        let current = self.contacts[index].to_record();
        let merged = ContactRecord {
            id: current.id,
            name: changes.name.apply(Some(current.name)).unwrap_or_default(),
            phone: changes.phone.apply(Some(current.phone)).unwrap_or_default(),
            email: changes.email.apply(Some(current.email)).unwrap_or_default(),
            birthday: changes.birthday.apply(current.birthday),
        };
        let updated = Contact::from_record(&merged)?;

        let previous = std::mem::replace(&mut self.contacts[index], updated.clone());
        if let Err(e) = self.persist() {
            self.contacts[index] = previous;
            return Err(e);
        }

        info!(id = %id, "Contact updated");
        Ok(updated)
    }

    /// Remove the contact with `id`. Returns whether anything was removed.
    ///
    /// The store is only written when a contact was actually removed.
    ///
    /// # Errors
    ///
    /// Propagates store errors, after restoring the removed contact.
    pub fn remove(&mut self, id: &str) -> AgendaResult<bool> {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "Nothing to remove");
            return Ok(false);
        };

        let removed = self.contacts.remove(index);
        if let Err(e) = self.persist() {
            self.contacts.insert(index, removed);
            return Err(e);
        }

        info!(id = %id, "Contact removed");
        Ok(true)
    }

    fn persist(&self) -> AgendaResult<()> {
        let records: Vec<ContactRecord> = self.contacts.iter().map(Contact::to_record).collect();
        self.store.save(&records)
    }
}
