//! Schedule event records.
//!
//! An `EventRecord` is the complete set of fields the form writes for one
//! date. Stored records may carry more fields than this; those survive a
//! save because the upsert merges over the stored object instead of
//! replacing it.

use serde::{Deserialize, Serialize};

/// Event type whose location comes from a fixed list of venues.
pub const PRACTICE_TYPE: &str = "practice";

/// A schedule entry as written by the form.
///
/// Field order here is the order keys appear in the saved JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub label: String,
    /// 12-hour display form, e.g. `6:30 PM`
    pub time: String,
    /// Canonical `HH:MM`
    pub time24: String,
    pub location: String,
    pub notes: String,
}

impl EventRecord {
    /// The record as a JSON object, ready to merge into a collection.
    pub fn to_json(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("date".into(), self.date.clone().into());
        map.insert("type".into(), self.event_type.clone().into());
        map.insert("label".into(), self.label.clone().into());
        map.insert("time".into(), self.time.clone().into());
        map.insert("time24".into(), self.time24.clone().into());
        map.insert("location".into(), self.location.clone().into());
        map.insert("notes".into(), self.notes.clone().into());
        map
    }
}

/// Venues offered for practices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeLocation {
    HighSchool,
    JrHigh,
}

impl PracticeLocation {
    pub const ALL: [PracticeLocation; 2] = [PracticeLocation::HighSchool, PracticeLocation::JrHigh];

    pub fn as_str(&self) -> &'static str {
        match self {
            PracticeLocation::HighSchool => "High School",
            PracticeLocation::JrHigh => "Jr. High",
        }
    }

    /// Exact match against the stored venue name.
    pub fn from_stored(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|loc| loc.as_str() == s)
    }
}

impl std::fmt::Display for PracticeLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert `HH:MM` to `H:MM AM|PM`.
///
/// Returns `None` unless the input is exactly two digits, a colon and two
/// digits. Out-of-range values still convert: hours wrap modulo 12 and
/// minutes are kept as written, so `25:30` is `1:30 PM`.
pub fn to_12_hour(time24: &str) -> Option<String> {
    let (hours, minutes) = time24.split_once(':')?;
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return None;
    }

    let hour: u32 = hours.parse().ok()?;
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    Some(format!("{}:{} {}", hour, minutes, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_is_twelve_am() {
        assert_eq!(to_12_hour("00:00").as_deref(), Some("12:00 AM"));
    }

    #[test]
    fn noon_stays_twelve_pm() {
        assert_eq!(to_12_hour("12:00").as_deref(), Some("12:00 PM"));
        assert_eq!(to_12_hour("12:45").as_deref(), Some("12:45 PM"));
    }

    #[test]
    fn afternoon_hours_wrap() {
        assert_eq!(to_12_hour("13:05").as_deref(), Some("1:05 PM"));
        assert_eq!(to_12_hour("23:59").as_deref(), Some("11:59 PM"));
    }

    #[test]
    fn morning_hours_drop_leading_zero() {
        assert_eq!(to_12_hour("09:30").as_deref(), Some("9:30 AM"));
        assert_eq!(to_12_hour("11:59").as_deref(), Some("11:59 AM"));
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(to_12_hour(""), None);
        assert_eq!(to_12_hour("9:30"), None);
        assert_eq!(to_12_hour("09:30:00"), None);
        assert_eq!(to_12_hour("ab:cd"), None);
        assert_eq!(to_12_hour("1:230"), None);
    }

    #[test]
    fn out_of_range_values_wrap() {
        assert_eq!(to_12_hour("24:00").as_deref(), Some("12:00 PM"));
        assert_eq!(to_12_hour("25:30").as_deref(), Some("1:30 PM"));
        assert_eq!(to_12_hour("12:75").as_deref(), Some("12:75 PM"));
    }

    #[test]
    fn record_serializes_in_field_order() {
        let record = EventRecord {
            date: "2024-06-01".into(),
            event_type: "game".into(),
            label: "Wolves".into(),
            time: "6:00 PM".into(),
            time24: "18:00".into(),
            location: "Home".into(),
            notes: String::new(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2024-06-01","type":"game","label":"Wolves","time":"6:00 PM","time24":"18:00","location":"Home","notes":""}"#
        );
        assert_eq!(serde_json::Value::Object(record.to_json()), serde_json::to_value(&record).unwrap());
    }

    #[test]
    fn practice_locations_match_stored_names() {
        assert_eq!(PracticeLocation::from_stored("Jr. High"), Some(PracticeLocation::JrHigh));
        assert_eq!(PracticeLocation::from_stored("High School"), Some(PracticeLocation::HighSchool));
        assert_eq!(PracticeLocation::from_stored("high school"), None);
    }
}
