// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Commuting trip records returned by the Toecan API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Summary trip from the `commute_trips` list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Unique trip identifier
    pub trip_uuid: String,
    /// Start time (epoch seconds)
    pub ts_start: f64,
    /// End time (epoch seconds)
    pub ts_end: f64,
    /// Distance in meters
    pub trip_distance: f64,
    /// Duration in seconds
    pub duration: f64,
}

/// Detailed trip from the `detailed_commute_trips` endpoint.
///
/// The API does not document this shape, so the object is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripDetail {
    pub fields: Map<String, Value>,
}

impl TripDetail {
    /// Trip identifier, when the record carries one.
    pub fn trip_uuid(&self) -> Option<&str> {
        self.fields.get("trip_uuid").and_then(Value::as_str)
    }

    /// Raw value of one field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_parsing() {
        let json = r#"[{
            "trip_uuid": "abc",
            "ts_start": 1700000000,
            "ts_end": 1700001800.5,
            "trip_distance": 4250.7,
            "duration": 1800
        }]"#;

        let trips: Vec<TripSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].trip_uuid, "abc");
        assert_eq!(trips[0].ts_start, 1_700_000_000.0);
        assert_eq!(trips[0].ts_end, 1_700_001_800.5);
        assert_eq!(trips[0].duration, 1800.0);
    }

    #[test]
    fn test_summary_missing_field_rejected() {
        let json = r#"{"trip_uuid": "abc", "ts_start": 0}"#;
        assert!(serde_json::from_str::<TripSummary>(json).is_err());
    }

    #[test]
    fn test_detail_passes_fields_through() {
        let json = r#"{
            "trip_uuid": "abc",
            "points": [[2.35, 48.85], [2.36, 48.86]],
            "weather": {"temp": 12}
        }"#;

        let detail: TripDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.trip_uuid(), Some("abc"));
        assert_eq!(detail.get("weather").unwrap()["temp"], 12);
        assert!(detail.get("missing").is_none());

        let back = serde_json::to_value(&detail).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(json).unwrap());
    }
}
