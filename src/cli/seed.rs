//! Sample contacts for a fresh agenda.

use crate::agenda::Agenda;
use crate::models::NewContact;
use tracing::warn;

/// `(name, phone, email, birthday)` of each sample contact.
pub const SAMPLES: [(&str, &str, &str, Option<&str>); 4] = [
    ("Ana Silva", "27 99999-0000", "ana@exemplo.com", Some("1995-03-10")),
    ("Bruno Costa", "(27) 98888-1111", "bruno@exemplo.com", Some("1992-12-05")),
    ("Carla Souza", "27977772222", "carla@exemplo.com", None),
    ("Diego Santos", "27 90000 3333", "diego@exemplo.com", Some("1989-06-21")),
];

/// Add every sample contact, skipping (and logging) any that fails.
///
/// Returns how many were added.
pub fn seed_samples(agenda: &mut Agenda) -> usize {
    let mut added = 0;
    for (name, phone, email, birthday) in SAMPLES {
        let mut new = NewContact::new(name, phone, email);
        if let Some(birthday) = birthday {
            new = new.with_birthday(birthday);
        }
        match agenda.add(new) {
            Ok(_) => added += 1,
            Err(e) => warn!(name = %name, error = %e, "Failed to add sample contact"),
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListOrder;
    use crate::repositories::JsonFileStore;
    use tempfile::TempDir;

    #[test]
    fn test_seed_adds_all_samples() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("contacts.json")).unwrap();
        let mut agenda = Agenda::with_store(Box::new(store)).unwrap();

        assert_eq!(seed_samples(&mut agenda), 4);

        let ana = &agenda.search("Ana Silva")[0];
        assert_eq!(ana.phone(), "27999990000");
        assert_eq!(ana.birthday_iso().as_deref(), Some("1995-03-10"));

        let by_birthday = agenda.list(ListOrder::Birthday);
        assert_eq!(by_birthday.last().map(|c| c.name()), Some("Carla Souza"));
    }
}
