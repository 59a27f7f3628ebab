//! Where the events collection lives inside a document.
//!
//! Schedule files come in a few layouts:
//!
//! ```text
//! [ {...}, {...} ]                      RootIsCollection
//! { "events": [...] }                   DirectField
//! { "schedule": { "events": [...] } }   NestedField
//! { ... anything else ... }             DefaultCreate (adds "events")
//! ```
//!
//! The layout is classified once per load and cached by the session.

use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult, kind_of};

pub const EVENTS_KEY: &str = "events";
pub const SCHEDULE_KEY: &str = "schedule";

/// Resolved location of the events collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventsPath {
    /// The document itself is the array of events.
    RootIsCollection,
    /// `events` is an array directly on the root object.
    DirectField,
    /// `schedule.events` is an array.
    NestedField,
    /// No collection found; a root `events` array is created on first write.
    #[default]
    DefaultCreate,
}

impl EventsPath {
    /// Classify a document. First matching layout wins.
    pub fn detect(doc: &Value) -> Self {
        if doc.is_array() {
            return EventsPath::RootIsCollection;
        }
        if doc.get(EVENTS_KEY).is_some_and(Value::is_array) {
            return EventsPath::DirectField;
        }
        if doc
            .get(SCHEDULE_KEY)
            .and_then(|s| s.get(EVENTS_KEY))
            .is_some_and(Value::is_array)
        {
            return EventsPath::NestedField;
        }

        tracing::warn!("no events collection found; a root \"events\" array will be created");
        EventsPath::DefaultCreate
    }

    /// Dotted path for display, `@root` for array documents.
    pub fn display_path(&self) -> &'static str {
        match self {
            EventsPath::RootIsCollection => "@root",
            EventsPath::DirectField | EventsPath::DefaultCreate => "events",
            EventsPath::NestedField => "schedule.events",
        }
    }

    /// Read-only access. `None` if any step of the path is missing.
    pub fn get<'a>(&self, doc: &'a Value) -> Option<&'a Vec<Value>> {
        match self {
            EventsPath::RootIsCollection => doc.as_array(),
            EventsPath::DirectField | EventsPath::DefaultCreate => doc.get(EVENTS_KEY)?.as_array(),
            EventsPath::NestedField => doc.get(SCHEDULE_KEY)?.get(EVENTS_KEY)?.as_array(),
        }
    }

    /// Mutable access, creating missing (or `null`) containers along the way.
    ///
    /// Existing values of the wrong kind are never replaced.
    pub fn get_or_create<'a>(&self, doc: &'a mut Value) -> CoreResult<&'a mut Vec<Value>> {
        let parent = match self {
            EventsPath::RootIsCollection => {
                let found = kind_of(doc);
                return doc.as_array_mut().ok_or(CoreError::ShapeConflict {
                    path: self.display_path().to_string(),
                    expected: "an array",
                    found,
                });
            }
            EventsPath::DirectField | EventsPath::DefaultCreate => as_object(doc, "@root")?,
            EventsPath::NestedField => {
                let root = as_object(doc, "@root")?;
                let schedule = slot(root, SCHEDULE_KEY, || Value::Object(Map::new()));
                as_object(schedule, SCHEDULE_KEY)?
            }
        };

        let events = slot(parent, EVENTS_KEY, || Value::Array(Vec::new()));
        let found = kind_of(events);
        events.as_array_mut().ok_or(CoreError::ShapeConflict {
            path: self.display_path().to_string(),
            expected: "an array",
            found,
        })
    }
}

/// Field `key`, filled with `empty()` when missing or null.
fn slot<'a>(obj: &'a mut Map<String, Value>, key: &str, empty: impl FnOnce() -> Value) -> &'a mut Value {
    let value = obj.entry(key).or_insert(Value::Null);
    if value.is_null() {
        *value = empty();
    }
    value
}

fn as_object<'a>(value: &'a mut Value, path: &str) -> CoreResult<&'a mut Map<String, Value>> {
    let found = kind_of(value);
    value.as_object_mut().ok_or_else(|| CoreError::ShapeConflict {
        path: path.to_string(),
        expected: "an object",
        found,
    })
}
