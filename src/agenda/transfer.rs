//! CSV import and export.

use super::Agenda;
use crate::domain::{BirthdayInput, ContactId};
use crate::error::{AgendaError, AgendaResult};
use crate::models::{Contact, ImportError, ImportOptions, ImportReport};
use csv::{ReaderBuilder, StringRecord, Writer};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Column order written by [`Agenda::export_csv`].
pub const CSV_HEADERS: [&str; 5] = ["id", "name", "phone", "email", "birthday"];

/// Columns an import file must have.
const REQUIRED_COLUMNS: [&str; 3] = ["name", "phone", "email"];

type RawRow = BTreeMap<String, String>;

impl Agenda {
    /// Write every contact to `path` as CSV, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::Io` or `AgendaError::Csv` if the file cannot
    /// be written.
    pub fn export_csv(&self, path: impl AsRef<Path>) -> AgendaResult<PathBuf> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let mut writer = Writer::from_path(path)?;
        writer.write_record(CSV_HEADERS)?;
        for contact in &self.contacts {
            let birthday = contact.birthday_iso().unwrap_or_default();
            writer.write_record([
                contact.id().as_str(),
                contact.name(),
                contact.phone(),
                contact.email(),
                birthday.as_str(),
            ])?;
        }
        writer.flush()?;

        info!(path = %path.display(), count = self.contacts.len(), "Contacts exported");
        Ok(path.to_path_buf())
    }

    /// Append the contacts of a CSV file.
    ///
    /// Header names are matched case-insensitively; `name`, `phone` and
    /// `email` are required, `id` and `birthday` optional. With
    /// `skip_invalid`, failing rows are collected in the report. Without it,
    /// the first failing row aborts the import: rows appended so far are
    /// discarded and nothing is persisted. A completed import persists once.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::FileNotFound` if `path` does not exist,
    /// `AgendaError::MissingColumns` for an incomplete header, the first row
    /// error when `skip_invalid` is off, or a store error.
    pub fn import_csv(
        &mut self,
        path: impl AsRef<Path>,
        options: ImportOptions,
    ) -> AgendaResult<ImportReport> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AgendaError::FileNotFound(path.to_path_buf()));
        }

        let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(AgendaError::MissingColumns(missing));
        }

        let rollback_len = self.contacts.len();
        let mut report = ImportReport::default();

        for row in reader.records() {
            let (raw, outcome) = match row {
                Ok(row) => {
                    let raw = row_to_map(&headers, &row);
                    let outcome = self.contact_from_row(&raw, options.generate_ids);
                    (raw, outcome)
                }
                Err(e) => (unreadable_row(&e), Err(e.into())),
            };

            match outcome {
                Ok(contact) => {
                    self.contacts.push(contact);
                    report.imported += 1;
                }
                Err(e) if options.skip_invalid => {
                    report.skipped += 1;
                    report.errors.push(ImportError {
                        record: raw,
                        error: e.to_string(),
                    });
                }
                Err(e) => {
                    self.contacts.truncate(rollback_len);
                    warn!(path = %path.display(), error = %e, "Import aborted, nothing kept");
                    return Err(e);
                }
            }
        }

        if let Err(e) = self.persist() {
            self.contacts.truncate(rollback_len);
            return Err(e);
        }

        info!(
            path = %path.display(),
            imported = report.imported,
            skipped = report.skipped,
            "Contacts imported"
        );
        Ok(report)
    }

    fn contact_from_row(&self, raw: &RawRow, generate_ids: bool) -> AgendaResult<Contact> {
        let cell = |key: &str| raw.get(key).map_or("", String::as_str);

        let raw_id = cell("id").trim();
        let id = if raw_id.is_empty() && generate_ids {
            ContactId::generate()
        } else {
            ContactId::new(raw_id)?
        };
        if self.find(id.as_str()).is_some() {
            return Err(AgendaError::DuplicateId(id.into_inner()));
        }

        let birthday = Some(cell("birthday"))
            .filter(|text| !text.trim().is_empty())
            .map(BirthdayInput::from);

        Ok(Contact::create(
            id,
            cell("name"),
            cell("phone"),
            cell("email"),
            birthday.as_ref(),
        )?)
    }
}

fn row_to_map(headers: &[String], row: &StringRecord) -> RawRow {
    headers
        .iter()
        .zip(row.iter())
        .map(|(header, cell)| (header.clone(), cell.to_string()))
        .collect()
}

/// What is known about a row the reader could not decode: its line.
fn unreadable_row(error: &csv::Error) -> RawRow {
    error
        .position()
        .map(|pos| RawRow::from([("line".to_string(), pos.line().to_string())]))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewContact;
    use crate::repositories::JsonFileStore;
    use tempfile::TempDir;

    fn agenda_in(dir: &TempDir) -> Agenda {
        let store = JsonFileStore::open(dir.path().join("contacts.json")).unwrap();
        Agenda::with_store(Box::new(store)).unwrap()
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let mut agenda = agenda_in(&dir);
        let ana = agenda
            .add(NewContact::new("Ana", "27999990000", "ana@x.com").with_birthday("1995-03-10"))
            .unwrap();
        let carla = agenda
            .add(NewContact::new("Carla", "27977772222", "carla@x.com"))
            .unwrap();

        let path = agenda
            .export_csv(dir.path().join("out").join("contacts.csv"))
            .unwrap();
        let contents = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "id,name,phone,email,birthday");
        assert_eq!(lines[1], format!("{},Ana,27999990000,ana@x.com,1995-03-10", ana.id()));
        assert_eq!(lines[2], format!("{},Carla,27977772222,carla@x.com,", carla.id()));
    }

    #[test]
    fn test_import_header_case_insensitive_and_ragged_rows() {
        let dir = TempDir::new().unwrap();
        let mut agenda = agenda_in(&dir);
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            "Name,PHONE,Email,Birthday\nBruno,27988881111,bruno@x.com\n",
        )
        .unwrap();

        let report = agenda.import_csv(&path, ImportOptions::default()).unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(agenda.contacts()[0].birthday(), None);
    }

    #[test]
    fn test_import_missing_columns() {
        let dir = TempDir::new().unwrap();
        let mut agenda = agenda_in(&dir);
        let path = dir.path().join("in.csv");
        fs::write(&path, "name,email\nBruno,bruno@x.com\n").unwrap();

        match agenda.import_csv(&path, ImportOptions::default()) {
            Err(AgendaError::MissingColumns(columns)) => assert_eq!(columns, vec!["phone"]),
            other => panic!("Expected MissingColumns, got: {:?}", other),
        }
    }

    #[test]
    fn test_import_keeps_supplied_ids_and_rejects_duplicates() {
        let dir = TempDir::new().unwrap();
        let mut agenda = agenda_in(&dir);
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            "id,name,phone,email\nabc,Bruno,27988881111,bruno@x.com\nabc,Other,27988882222,o@x.com\n",
        )
        .unwrap();

        let report = agenda.import_csv(&path, ImportOptions::default()).unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 1);
        assert!(report.errors[0].error.contains("Duplicate contact id: abc"));
        assert!(agenda.find("abc").is_some());
    }

    #[test]
    fn test_import_without_generated_ids_requires_id() {
        let dir = TempDir::new().unwrap();
        let mut agenda = agenda_in(&dir);
        let path = dir.path().join("in.csv");
        fs::write(&path, "name,phone,email\nBruno,27988881111,bruno@x.com\n").unwrap();

        let options = ImportOptions {
            generate_ids: false,
            skip_invalid: true,
        };
        let report = agenda.import_csv(&path, options).unwrap();
        assert_eq!(report.imported, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errors[0].record["name"], "Bruno");
    }

    #[test]
    fn test_import_undecodable_row_reports_line() {
        let dir = TempDir::new().unwrap();
        let mut agenda = agenda_in(&dir);
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            b"name,phone,email\nBruno,2798888\xff1111,bruno@x.com\nCarla,27977772222,carla@x.com\n",
        )
        .unwrap();

        let report = agenda.import_csv(&path, ImportOptions::default()).unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            report.errors[0].record.get("line").map(String::as_str),
            Some("2")
        );
        assert!(report.errors[0].error.starts_with("CSV error"));
        assert_eq!(agenda.search("carla").len(), 1);
    }
}
