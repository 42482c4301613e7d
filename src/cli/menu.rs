//! Interactive text menu over an agenda.
//!
//! The menu reads from any `BufRead` and writes to any `Write`, so it can
//! be driven by stdin/stdout or by tests. Agenda errors are printed and the
//! loop continues; only I/O errors on the menu's own streams end it early.

use crate::agenda::Agenda;
use crate::domain::BirthdayInput;
use crate::models::{Contact, ContactUpdate, FieldUpdate, ImportOptions, ListOrder, NewContact};
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 60;
const MAX_SHOWN_ERRORS: usize = 5;

/// Run the menu until the user picks `0` or input ends.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn run_menu<R: BufRead, W: Write>(
    agenda: &mut Agenda,
    export_dir: &Path,
    input: R,
    output: W,
) -> io::Result<()> {
    Menu {
        agenda,
        export_dir,
        input,
        output,
    }
    .run()
}

struct Menu<'a, R, W> {
    agenda: &'a mut Agenda,
    export_dir: &'a Path,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_options()?;
            let Some(choice) = self.prompt("Choose")? else {
                return Ok(());
            };
            let keep_going = match choice.trim() {
                "1" => self.list(ListOrder::Name),
                "2" => self.search(),
                "3" => self.add(),
                "4" => self.edit(),
                "5" => self.remove(),
                "6" => self.birthdays(),
                "7" => self.export(),
                "8" => self.import(),
                "9" => self.list(ListOrder::Birthday),
                "0" => {
                    writeln!(self.output, "\nGoodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "\nInvalid option.")?;
                    Ok(true)
                }
            }?;
            if !keep_going {
                return Ok(());
            }
        }
    }

    fn print_options(&mut self) -> io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{:^width$}", "CONTACT AGENDA", width = RULE_WIDTH)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "1) List contacts (by name)")?;
        writeln!(self.output, "2) Search contacts")?;
        writeln!(self.output, "3) Add contact")?;
        writeln!(self.output, "4) Edit contact")?;
        writeln!(self.output, "5) Remove contact")?;
        writeln!(self.output, "6) Birthdays of the month")?;
        writeln!(self.output, "7) Export CSV")?;
        writeln!(self.output, "8) Import CSV")?;
        writeln!(self.output, "9) List by birthday (month/day)")?;
        writeln!(self.output, "0) Exit")?;
        writeln!(self.output, "{}", rule)
    }

    /// Print `label: ` and read one line. `None` means input ended.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    // Each action returns Ok(false) when input ended mid-prompt.

    fn list(&mut self, order: ListOrder) -> io::Result<bool> {
        let contacts = self.agenda.list(order);
        match order {
            ListOrder::Name => {
                writeln!(self.output, "\nContacts:")?;
                self.print_contacts(&contacts)?;
            }
            ListOrder::Birthday => {
                writeln!(self.output, "\nContacts (by birthday):")?;
                for (i, c) in contacts.iter().enumerate() {
                    let day = c
                        .birthday()
                        .map_or_else(|| "--/--".to_string(), |d| d.format("%d/%m").to_string());
                    writeln!(
                        self.output,
                        "{}. {} | {} | {} | {} | ID: {}",
                        i + 1,
                        day,
                        c.name(),
                        c.phone(),
                        c.email(),
                        c.id()
                    )?;
                }
            }
        }
        Ok(true)
    }

    fn print_contacts(&mut self, contacts: &[Contact]) -> io::Result<()> {
        for (i, c) in contacts.iter().enumerate() {
            let born = c
                .birthday()
                .map_or_else(|| "-".to_string(), |d| d.format("%d/%m/%Y").to_string());
            writeln!(
                self.output,
                "{}. {} | {} | {} | Born: {} | ID: {}",
                i + 1,
                c.name(),
                c.phone(),
                c.email(),
                born,
                c.id()
            )?;
        }
        Ok(())
    }

    fn search(&mut self) -> io::Result<bool> {
        let Some(query) = self.prompt("Search for (name, phone or email)")? else {
            return Ok(false);
        };
        let results = self.agenda.search(&query);
        writeln!(self.output, "\nResults ({}):", results.len())?;
        self.print_contacts(&results)?;
        Ok(true)
    }

    fn add(&mut self) -> io::Result<bool> {
        let Some(name) = self.prompt("Name")? else {
            return Ok(false);
        };
        let Some(phone) = self.prompt("Phone (digits only)")? else {
            return Ok(false);
        };
        let Some(email) = self.prompt("Email")? else {
            return Ok(false);
        };
        let Some(birthday) = self.prompt("Birthday (YYYY-MM-DD, optional)")? else {
            return Ok(false);
        };

        let mut new = NewContact::new(name, phone, email);
        if !birthday.trim().is_empty() {
            new = new.with_birthday(birthday);
        }
        match self.agenda.add(new) {
            Ok(c) => writeln!(self.output, "\nContact created: {} (ID: {})", c.name(), c.id())?,
            Err(e) => writeln!(self.output, "\nError: {}", e)?,
        }
        Ok(true)
    }

    fn edit(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt("ID of the contact to edit")? else {
            return Ok(false);
        };
        let Some(name) = self.prompt("New name (enter to keep)")? else {
            return Ok(false);
        };
        let Some(phone) = self.prompt("New phone (enter to keep)")? else {
            return Ok(false);
        };
        let Some(email) = self.prompt("New email (enter to keep)")? else {
            return Ok(false);
        };
        let Some(birthday) =
            self.prompt("New birthday YYYY-MM-DD (enter to keep, - to clear)")?
        else {
            return Ok(false);
        };

        let changes = ContactUpdate {
            name: keep_if_blank(name),
            phone: keep_if_blank(phone),
            email: keep_if_blank(email),
            birthday: if birthday.trim() == "-" {
                FieldUpdate::Clear
            } else {
                keep_if_blank(birthday).map(BirthdayInput::Text)
            },
        };
        match self.agenda.update(id.trim(), changes) {
            Ok(c) => writeln!(self.output, "\nUpdated: {}", c.name())?,
            Err(e) => writeln!(self.output, "\nError: {}", e)?,
        }
        Ok(true)
    }

    fn remove(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt("ID of the contact to remove")? else {
            return Ok(false);
        };
        match self.agenda.remove(id.trim()) {
            Ok(true) => writeln!(self.output, "\nContact removed.")?,
            Ok(false) => writeln!(self.output, "\nNothing removed (ID not found).")?,
            Err(e) => writeln!(self.output, "\nError: {}", e)?,
        }
        Ok(true)
    }

    fn birthdays(&mut self) -> io::Result<bool> {
        let Some(month) = self.prompt("Month (1-12)")? else {
            return Ok(false);
        };
        let month = month.trim().parse::<u32>().unwrap_or(0);
        let contacts = self.agenda.birthdays_in_month(month);
        writeln!(self.output, "\nBirthdays in month {}:", month)?;
        for (i, c) in contacts.iter().enumerate() {
            let day = c
                .birthday()
                .map(|d| d.format("%d/%m").to_string())
                .unwrap_or_default();
            writeln!(self.output, "{}. {} - {}", i + 1, c.name(), day)?;
        }
        Ok(true)
    }

    fn export(&mut self) -> io::Result<bool> {
        let path = export_path(self.export_dir);
        match self.agenda.export_csv(&path) {
            Ok(path) => writeln!(self.output, "\nExported to: {}", path.display())?,
            Err(e) => writeln!(self.output, "\nError: {}", e)?,
        }
        Ok(true)
    }

    fn import(&mut self) -> io::Result<bool> {
        let Some(path) = self.prompt("Path of the CSV to import")? else {
            return Ok(false);
        };
        let report = match self.agenda.import_csv(path.trim(), ImportOptions::default()) {
            Ok(report) => report,
            Err(e) => {
                writeln!(self.output, "\nError: {}", e)?;
                return Ok(true);
            }
        };

        writeln!(
            self.output,
            "\nImport finished: {} imported, {} skipped.",
            report.imported, report.skipped
        )?;
        if !report.errors.is_empty() {
            writeln!(self.output, "Errors:")?;
            for err in report.errors.iter().take(MAX_SHOWN_ERRORS) {
                writeln!(self.output, "- {} (row: {:?})", err.error, err.record)?;
            }
            if report.errors.len() > MAX_SHOWN_ERRORS {
                writeln!(self.output, "... ({} errors in total)", report.errors.len())?;
            }
        }
        Ok(true)
    }
}

fn keep_if_blank(value: String) -> FieldUpdate<String> {
    if value.trim().is_empty() {
        FieldUpdate::Keep
    } else {
        FieldUpdate::Set(value)
    }
}

/// Timestamped export file inside `dir`.
fn export_path(dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    dir.join(format!("contacts-{}.csv", timestamp))
}
