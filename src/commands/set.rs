use anyhow::Result;
use chrono::NaiveDate;
use gistsched_core::{Session, UpsertOutcome};
use owo_colors::OwoColorize;

use super::{Connection, FieldArgs};
use crate::render::render_event_line;

/// Apply `fields` over the stored event for `date`, and save.
///
/// With `new_file` the gist is not read first: the saved file holds a fresh
/// `{"events": [...]}` document with just this event.
pub async fn run(
    conn: &Connection,
    date: NaiveDate,
    fields: &FieldArgs,
    clear: bool,
    dry_run: bool,
    new_file: bool,
) -> Result<()> {
    let mut editor = conn.editor(date, false)?;
    if !new_file {
        editor.load().await?;
    }

    if clear {
        editor.clear();
    }
    fields.apply(editor.form_mut());

    if dry_run {
        let (outcome, raw) = editor.stage()?;
        eprintln!("{} {}", describe(outcome), "(dry run, not saved)".dimmed());
        println!("{}", raw);
        return Ok(());
    }

    let outcome = editor.save().await?;
    match saved_line(editor.session(), outcome) {
        Some(line) => println!("{} {}", describe(outcome), line),
        None => println!("{}", describe(outcome)),
    }
    Ok(())
}

fn describe(outcome: UpsertOutcome) -> String {
    match outcome {
        UpsertOutcome::Updated(i) => format!("Updated event #{}:", i + 1),
        UpsertOutcome::Inserted(i) => format!("Added event #{}:", i + 1),
    }
}

/// The record as stored after the merge, extra fields included.
fn saved_line(session: &Session, outcome: UpsertOutcome) -> Option<String> {
    let events = session.events()?;
    events.get(outcome.index()).map(render_event_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gistsched_core::EventRecord;

    fn record(label: &str) -> EventRecord {
        EventRecord {
            date: "2024-06-01".into(),
            event_type: "game".into(),
            label: label.into(),
            time: String::new(),
            time24: String::new(),
            location: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn confirmation_renders_merged_record() {
        let mut session = Session::new();
        session
            .load(r#"{"events":[{"date":"2024-06-01T18:00:00Z","vs":"Tigers"},{"date":"2024-06-08","label":"Bears"}]}"#)
            .unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 2, 9, 30, 0).unwrap();

        // A blank label still shows the opponent kept from the stored record.
        let (outcome, _) = session.apply(&record(""), now).unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated(0));
        let line = saved_line(&session, outcome).unwrap();
        assert!(line.contains("Tigers"));
        assert!(line.contains("2024-06-01"));
        assert!(!line.contains("Bears"));
    }

    #[test]
    fn describes_one_based_positions() {
        assert_eq!(describe(UpsertOutcome::Updated(0)), "Updated event #1:");
        assert_eq!(describe(UpsertOutcome::Inserted(2)), "Added event #3:");
    }
}
