use crate::error::{AgendaError, AgendaResult};
use crate::models::ContactRecord;
use crate::repositories::traits::ContactStore;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Contact store backed by a single pretty-printed JSON file.
///
/// Saves write a sibling temporary file and rename it over the target, so
/// the file is always either the previous or the new collection.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`, creating its parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::Io` if the directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> AgendaResult<Self> {
        let path = path.into();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> AgendaResult<Vec<ContactRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No backing file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        // A file that is not a JSON array (or single object) at all loads as
        // empty. The next save overwrites it, losing whatever it held.
        let items = match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Array(items)) => items,
            Ok(object @ Value::Object(_)) => vec![object],
            Ok(other) => {
                warn!(
                    path = %self.path.display(),
                    kind = json_kind(&other),
                    "Backing file is not a list of contacts, starting empty"
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Backing file is not valid JSON, starting empty"
                );
                return Ok(Vec::new());
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|e| AgendaError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect()
    }

    fn save(&self, records: &[ContactRecord]) -> AgendaResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), count = records.len(), "Backing file written");
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(id: &str) -> ContactRecord {
        ContactRecord {
            id: id.to_string(),
            name: "Ana".to_string(),
            phone: "27999990000".to_string(),
            email: "ana@x.com".to_string(),
            birthday: None,
        }
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("contacts.json");
        let store = JsonFileStore::open(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("contacts.json")).unwrap();
        store.save(&[record("1"), record("2")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![record("1"), record("2")]);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_saved_file_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("contacts.json")).unwrap();
        store.save(&[record("1")]).unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("\n  {"));
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("contacts.json")).unwrap();
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().unwrap().is_empty());

        fs::write(store.path(), "42").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_single_object_is_one_record() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("contacts.json")).unwrap();
        fs::write(
            store.path(),
            r#"{"id":"1","name":"Ana","phone":"27999990000","email":"ana@x.com"}"#,
        )
        .unwrap();
        assert_eq!(store.load().unwrap(), vec![record("1")]);
    }

    #[test]
    fn test_malformed_record_fails_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("contacts.json")).unwrap();
        fs::write(
            store.path(),
            r#"[{"id":"1","name":"Ana","phone":"27999990000","email":"ana@x.com"},{"id":"2"}]"#,
        )
        .unwrap();
        match store.load() {
            Err(AgendaError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected InvalidRecord, got: {:?}", other),
        }
    }
}
