//! The document being edited and where its events live.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::error::{CoreError, CoreResult, kind_of};
use crate::event::EventRecord;
use crate::locator::EventsPath;
use crate::matcher;
use crate::upsert::{self, UpsertOutcome};

/// Working copy of one remote schedule file.
#[derive(Debug, Default)]
pub struct Session {
    document: Option<Value>,
    path: EventsPath,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the working copy with freshly fetched text.
    ///
    /// On error the previous document stays loaded.
    pub fn load(&mut self, raw: &str) -> CoreResult<EventsPath> {
        let document: Value = serde_json::from_str(raw)?;
        if !(document.is_object() || document.is_array()) {
            return Err(CoreError::UnsupportedDocument(kind_of(&document)));
        }

        let path = EventsPath::detect(&document);
        self.document = Some(document);
        self.path = path;
        Ok(path)
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn path(&self) -> EventsPath {
        self.path
    }

    /// Stored record for `date`. Creates the collection if it is missing so
    /// later saves have somewhere to go.
    pub fn record_for(&mut self, date: &str) -> CoreResult<Option<Value>> {
        let document = self.document.as_mut().ok_or(CoreError::NotLoaded)?;
        let events = self.path.get_or_create(document)?;
        Ok(matcher::find(events, date).cloned())
    }

    /// Read-only view of the collection.
    pub fn events(&self) -> Option<&[Value]> {
        let document = self.document.as_ref()?;
        self.path.get(document).map(Vec::as_slice)
    }

    /// Merge `record` into the working copy and return the text to save.
    ///
    /// Without a loaded document this starts a new `{"events": []}`. The
    /// working copy keeps the change even if the caller's write fails.
    pub fn apply(&mut self, record: &EventRecord, now: DateTime<Utc>) -> CoreResult<(UpsertOutcome, String)> {
        if self.document.is_none() {
            self.document = Some(json!({ "events": [] }));
            self.path = EventsPath::DirectField;
        }
        let document = self.document.as_mut().ok_or(CoreError::NotLoaded)?;

        let outcome = upsert::upsert(document, self.path, record, now)?;
        let raw = serde_json::to_string_pretty(&*document)?;
        Ok((outcome, raw))
    }
}
