//! Date matching for stored records.

use serde_json::Value;

/// True if `record.date` is `date`, or is `date` followed by a time-of-day
/// suffix (`2024-05-01T18:00:00Z` matches `2024-05-01`).
///
/// The prefix must end on a date boundary, so `2024-05-01` does not match a
/// partial query like `2024-05`.
pub fn matches_date(record: &Value, date: &str) -> bool {
    let Some(stored) = record.get("date").and_then(Value::as_str) else {
        return false;
    };
    match stored.strip_prefix(date) {
        Some(rest) => !rest.starts_with(|c: char| c.is_ascii_digit() || c == '-'),
        None => false,
    }
}

/// Index of the first record matching `date`.
pub fn find_index(events: &[Value], date: &str) -> Option<usize> {
    events.iter().position(|e| matches_date(e, date))
}

/// First record matching `date`.
pub fn find<'a>(events: &'a [Value], date: &str) -> Option<&'a Value> {
    find_index(events, date).map(|i| &events[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exact_date_matches() {
        assert!(matches_date(&json!({ "date": "2024-05-01" }), "2024-05-01"));
    }

    #[test]
    fn datetime_prefix_matches() {
        assert!(matches_date(&json!({ "date": "2024-05-01T18:00:00Z" }), "2024-05-01"));
    }

    #[test]
    fn partial_query_does_not_match() {
        assert!(!matches_date(&json!({ "date": "2024-05-01" }), "2024-05"));
        assert!(!matches_date(&json!({ "date": "2024-05-01" }), "2024-05-0"));
        assert!(!matches_date(&json!({ "date": "2024-05-01" }), "2024-05-02"));
    }

    #[test]
    fn space_separated_time_matches() {
        assert!(matches_date(&json!({ "date": "2024-05-01 18:00" }), "2024-05-01"));
    }

    #[test]
    fn non_string_or_missing_dates_never_match() {
        assert!(!matches_date(&json!({ "date": 20240501 }), "2024-05-01"));
        assert!(!matches_date(&json!({ "label": "x" }), "2024-05-01"));
        assert!(!matches_date(&json!(null), "2024-05-01"));
        assert!(!matches_date(&json!("2024-05-01"), "2024-05-01"));
    }

    #[test]
    fn first_match_wins() {
        let events = vec![
            json!({ "date": "2024-04-30" }),
            json!({ "date": "2024-05-01T09:00", "label": "early" }),
            json!({ "date": "2024-05-01", "label": "exact" }),
        ];
        assert_eq!(find_index(&events, "2024-05-01"), Some(1));
        assert_eq!(find(&events, "2024-05-01").unwrap()["label"], "early");
        assert_eq!(find_index(&events, "2024-06-01"), None);
    }
}
