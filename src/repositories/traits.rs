use crate::error::AgendaResult;
use crate::models::ContactRecord;

/// Durable storage behind an [`crate::agenda::Agenda`].
///
/// The agenda keeps the authoritative collection in memory and hands the
/// whole of it to [`ContactStore::save`] after every mutation. Implementations
/// must make each save all-or-nothing from a reader's point of view.
pub trait ContactStore: Send + Sync {
    /// Load every stored record. An absent store yields an empty list.
    fn load(&self) -> AgendaResult<Vec<ContactRecord>>;

    /// Replace the stored collection with `records`.
    fn save(&self, records: &[ContactRecord]) -> AgendaResult<()>;
}
