//! Editable form state.
//!
//! `FormFields` holds the raw values a user has typed or selected. It turns
//! into an [`EventRecord`] on save and is repopulated from the stored record
//! whenever a different date is selected.

use chrono::NaiveDate;
use serde_json::Value;

use crate::event::{EventRecord, PRACTICE_TYPE, PracticeLocation, to_12_hour};

const PREVIEW_NOTE: &str = "This shows how the single selected event will look before saving";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub date: NaiveDate,
    pub event_type: String,
    pub label: String,
    /// `HH:MM` as entered
    pub time: String,
    pub location_text: String,
    pub location_choice: Option<PracticeLocation>,
    pub notes: String,
}

impl FormFields {
    /// Empty form for `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            event_type: String::new(),
            label: String::new(),
            time: String::new(),
            location_text: String::new(),
            location_choice: None,
            notes: String::new(),
        }
    }

    /// `YYYY-MM-DD` for the selected date.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_practice(&self) -> bool {
        self.event_type.trim() == PRACTICE_TYPE
    }

    /// Reset every editable field. The selected date is kept.
    pub fn clear(&mut self) {
        *self = Self::new(self.date);
    }

    /// Fill the form from a stored record, or clear it when there is none.
    pub fn populate(&mut self, stored: Option<&Value>) {
        self.clear();
        let Some(stored) = stored else {
            return;
        };

        let text = |key: &str| stored.get(key).and_then(Value::as_str).filter(|s| !s.is_empty());

        self.event_type = text("type").unwrap_or_default().to_string();
        self.label = text("label").or_else(|| text("vs")).unwrap_or_default().to_string();
        self.time = text("time24")
            .or_else(|| text("time"))
            .unwrap_or_default()
            .chars()
            .take(5)
            .collect();
        self.notes = text("notes").unwrap_or_default().to_string();

        let location = text("location").unwrap_or_default();
        match PracticeLocation::from_stored(location) {
            Some(choice) if self.event_type == PRACTICE_TYPE => self.location_choice = Some(choice),
            _ => self.location_text = location.to_string(),
        }
    }

    /// The record this form would save.
    pub fn build(&self) -> EventRecord {
        let event_type = self.event_type.trim().to_string();
        let time24 = self.time.trim().to_string();
        let time = to_12_hour(&time24).unwrap_or_else(|| time24.clone());

        let location = match self.location_choice {
            Some(choice) if event_type == PRACTICE_TYPE => choice.as_str().to_string(),
            _ => self.location_text.trim().to_string(),
        };

        EventRecord {
            date: self.date_key(),
            event_type,
            label: self.label.trim().to_string(),
            time,
            time24,
            location,
            notes: self.notes.trim().to_string(),
        }
    }

    /// The built record plus a `_note` explaining it has not been saved.
    pub fn preview(&self) -> Value {
        let mut fields = self.build().to_json();
        fields.insert("_note".into(), PREVIEW_NOTE.into());
        Value::Object(fields)
    }
}
