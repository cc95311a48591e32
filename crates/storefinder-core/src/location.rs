//! Store location records and the page envelope they arrive in.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One store as shown on the map and in the list.
///
/// Constructed once when a page is decoded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Server-assigned key; unique within a store's list.
    pub id: String,
    pub name: String,
    pub address: String,
    pub short_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub img_url: String,
    /// Free-form status string from the server. Not interpreted.
    pub status: Option<String>,
    pub is_enabled: bool,
    /// ISO-8601 timestamp until which the store is disabled, as sent.
    pub disable_until: Option<String>,
}

impl Location {
    /// Parses [`Self::disable_until`] into a UTC timestamp.
    ///
    /// Accepts RFC 3339 (with offset) and offset-less ISO-8601 date-times,
    /// the latter read as UTC. Returns `None` when the field is absent or
    /// does not parse.
    #[must_use]
    pub fn disabled_until(&self) -> Option<DateTime<Utc>> {
        let raw = self.disable_until.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// One page of locations plus whether the server has more after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResult {
    pub locations: Vec<Location>,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    fn location(disable_until: Option<&str>) -> Location {
        Location {
            id: "loc-1".to_owned(),
            name: "Blank Street A".to_owned(),
            address: "1 Main St, Springfield".to_owned(),
            short_address: "1 Main St".to_owned(),
            latitude: 40.0,
            longitude: -73.0,
            img_url: "https://img.example.com/a.png".to_owned(),
            status: None,
            is_enabled: false,
            disable_until: disable_until.map(str::to_owned),
        }
    }

    #[test]
    fn disabled_until_none_when_absent() {
        assert!(location(None).disabled_until().is_none());
    }

    #[test]
    fn disabled_until_parses_rfc3339_with_offset() {
        let ts = location(Some("2024-05-01T12:30:00+02:00"))
            .disabled_until()
            .unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn disabled_until_reads_offsetless_timestamp_as_utc() {
        let ts = location(Some("2024-05-01T08:00:00.000"))
            .disabled_until()
            .unwrap();
        assert_eq!(ts.day(), 1);
        assert_eq!(ts.hour(), 8);
    }

    #[test]
    fn disabled_until_none_on_garbage() {
        assert!(location(Some("next tuesday")).disabled_until().is_none());
    }

    #[test]
    fn equality_compares_every_field() {
        let a = location(None);
        let mut b = a.clone();
        assert_eq!(a, b);
        b.latitude = 40.000_001;
        assert_ne!(a, b);
    }
}
