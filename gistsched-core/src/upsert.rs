//! Merge one event record into a document.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::error::CoreResult;
use crate::event::EventRecord;
use crate::locator::EventsPath;
use crate::matcher;

/// Top-level field stamped on object documents after every upsert.
pub const UPDATED_AT_KEY: &str = "updatedAt";

/// What an upsert did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// Merged over the record at this index.
    Updated(usize),
    /// Appended at this index.
    Inserted(usize),
}

impl UpsertOutcome {
    /// Position of the written record in the collection.
    pub fn index(&self) -> usize {
        match self {
            UpsertOutcome::Updated(i) | UpsertOutcome::Inserted(i) => *i,
        }
    }
}

/// Update the first record matching `record.date`, or append `record`.
///
/// Updates are a shallow merge: every field of `record` overwrites the
/// stored value and fields only the stored record has are kept. Object
/// documents get `updatedAt` set to `now`.
pub fn upsert(
    doc: &mut Value,
    path: EventsPath,
    record: &EventRecord,
    now: DateTime<Utc>,
) -> CoreResult<UpsertOutcome> {
    let events = path.get_or_create(doc)?;
    let fields = record.to_json();

    let outcome = match matcher::find_index(events, &record.date) {
        Some(i) => {
            match &mut events[i] {
                Value::Object(existing) => existing.extend(fields),
                other => *other = Value::Object(fields),
            }
            UpsertOutcome::Updated(i)
        }
        None => {
            events.push(Value::Object(fields));
            UpsertOutcome::Inserted(events.len() - 1)
        }
    };

    if let Value::Object(root) = doc {
        root.insert(UPDATED_AT_KEY.into(), timestamp(now).into());
    }

    tracing::debug!(date = %record.date, ?outcome, path = path.display_path(), "upserted event");
    Ok(outcome)
}

/// `2024-06-01T18:00:00.000Z`
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
