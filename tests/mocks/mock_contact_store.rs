use contact_agenda::error::AgendaResult;
use contact_agenda::models::ContactRecord;
use contact_agenda::repositories::ContactStore;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Holds records in memory, can be preloaded, and counts saves so tests can
/// verify when the agenda persists.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    records: Arc<Mutex<Vec<ContactRecord>>>,
    save_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `records`.
    pub fn with_records(records: Vec<ContactRecord>) -> Self {
        let store = Self::new();
        *store.records.lock().unwrap() = records;
        store
    }

    /// Records as of the last save.
    pub fn records(&self) -> Vec<ContactRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Number of times `save` was called.
    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap()
    }
}

impl ContactStore for MockContactStore {
    fn load(&self) -> AgendaResult<Vec<ContactRecord>> {
        Ok(self.records())
    }

    fn save(&self, records: &[ContactRecord]) -> AgendaResult<()> {
        *self.records.lock().unwrap() = records.to_vec();
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }
}
