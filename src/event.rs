// src/event.rs
//! Candidate event records as served by the Meetzy catalog backend.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single candidate event. Read-only input for scoring.
///
/// `date` and `start_time` arrive as plain strings from the catalog API;
/// parsing is deferred to [`Event::start_timestamp`] so malformed values
/// degrade to "no timestamp" instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub place: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    /// Local time of day, `HH:MM` or `HH:MM:SS`. Midnight when absent.
    #[serde(default, rename = "startTime", alias = "start_time")]
    pub start_time: Option<String>,
}

impl Event {
    /// Combined name/description/place, the haystack for keyword matching.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.place)
    }

    /// Combine `date` and `start_time` into a naive local timestamp.
    ///
    /// A missing or empty time means midnight. A missing or malformed date,
    /// or a malformed non-empty time, yields `None` ("unknown, rank last").
    pub fn start_timestamp(&self) -> Option<NaiveDateTime> {
        let raw_date = self.date.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").ok()?;

        let time = match self.start_time.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => NaiveTime::MIN,
            Some(raw) => NaiveTime::parse_from_str(raw, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
                .ok()?,
        };

        Some(date.and_time(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(date: Option<&str>, time: Option<&str>) -> Event {
        Event {
            name: "x".into(),
            description: String::new(),
            place: String::new(),
            date: date.map(str::to_string),
            start_time: time.map(str::to_string),
        }
    }

    #[test]
    fn date_and_time_combine() {
        let ts = ev(Some("2025-06-15"), Some("18:30")).start_timestamp().unwrap();
        assert_eq!(ts.to_string(), "2025-06-15 18:30:00");

        let ts = ev(Some("2025-06-15"), Some("18:30:45")).start_timestamp().unwrap();
        assert_eq!(ts.to_string(), "2025-06-15 18:30:45");
    }

    #[test]
    fn missing_time_defaults_to_midnight() {
        let ts = ev(Some("2025-06-15"), None).start_timestamp().unwrap();
        assert_eq!(ts.to_string(), "2025-06-15 00:00:00");

        let ts = ev(Some("2025-06-15"), Some("  ")).start_timestamp().unwrap();
        assert_eq!(ts.to_string(), "2025-06-15 00:00:00");
    }

    #[test]
    fn malformed_values_yield_none() {
        assert_eq!(ev(None, None).start_timestamp(), None);
        assert_eq!(ev(Some("someday"), None).start_timestamp(), None);
        assert_eq!(ev(Some("2025-13-40"), None).start_timestamp(), None);
        assert_eq!(ev(Some("2025-06-15"), Some("evening")).start_timestamp(), None);
    }

    #[test]
    fn wire_field_names_match_backend() {
        let raw = r#"{"name":"Quiz","description":"Pub quiz","place":"Bar U Sudu","date":"2025-06-15","startTime":"19:00"}"#;
        let ev: Event = serde_json::from_str(raw).unwrap();
        assert_eq!(ev.start_time.as_deref(), Some("19:00"));
        // snake_case alias also accepted
        let raw2 = r#"{"name":"Quiz","start_time":"19:00"}"#;
        let ev2: Event = serde_json::from_str(raw2).unwrap();
        assert_eq!(ev2.start_time.as_deref(), Some("19:00"));
    }
}
