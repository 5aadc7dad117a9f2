//! Wire DTOs: month matrix and ingestion acknowledgements
//!
//! Field names are camelCase on the wire (`firstIn`, `graceMinutes`) to
//! stay compatible with the agents and dashboards already speaking this
//! protocol.

use crate::models::clock::ClockTime;
use crate::models::day::{DayCell, DayRecord};
use crate::models::event::NormalizedEvent;
use crate::models::month::YearMonth;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One member row of the month matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberReport {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub group: Option<String>,
    /// Set for identifiers seen on the wire but absent from the roster
    #[serde(skip_serializing_if = "is_false", default)]
    pub unknown: bool,
    /// Every calendar day of the month; `null` means no record that day
    pub days: BTreeMap<NaiveDate, Option<DayCell>>,
}

fn is_false(v: &bool) -> bool {
    !v
}

/// The month-by-day attendance matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthMatrix {
    /// Echo of the group filter; `null` when the report spans all groups
    pub group: Option<String>,
    pub month: YearMonth,
    pub start_time: ClockTime,
    pub grace_minutes: u32,
    pub members: Vec<MemberReport>,
}

/// Acknowledgement for an event that folded into attendance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAck {
    pub identifier: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub late: bool,
    pub first_in: ClockTime,
    pub last_in: ClockTime,
    pub count: u32,
}

impl EventAck {
    pub fn new(event: &NormalizedEvent, record: &DayRecord) -> Self {
        Self {
            identifier: event.person_id.clone(),
            date: event.date,
            time: event.time,
            late: record.late,
            first_in: record.first_in,
            last_in: record.last_in,
            count: record.count,
        }
    }
}

/// Acknowledgement for a non-granted event; nothing was folded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedAck {
    pub skipped: bool,
    pub reason: String,
}

impl SkippedAck {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            skipped: true,
            reason: reason.into(),
        }
    }
}

/// Ingestion response body, one of the two acknowledgement shapes
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum IngestAck {
    Recorded(EventAck),
    Skipped(SkippedAck),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clock::LatePolicy;
    use serde_json::json;

    fn ct(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_member_report_known_member_shape() {
        let mut days = BTreeMap::new();
        days.insert(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(), None);

        let member = MemberReport {
            id: "105".into(),
            name: "Smirnov I.".into(),
            group: Some("A".into()),
            unknown: false,
            days,
        };

        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["group"], "A");
        // flag omitted for roster members
        assert!(json.get("unknown").is_none());
        // absent day serializes as an explicit null
        assert!(json["days"]["2026-02-01"].is_null());
    }

    #[test]
    fn test_member_report_unknown_member_shape() {
        let member = MemberReport {
            id: "X1".into(),
            name: "X1".into(),
            group: None,
            unknown: true,
            days: BTreeMap::new(),
        };

        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["unknown"], true);
        assert!(json.get("group").is_none());
    }

    #[test]
    fn test_matrix_wire_field_names() {
        let matrix = MonthMatrix {
            group: None,
            month: YearMonth::new(2026, 2).unwrap(),
            start_time: ct(9, 0),
            grace_minutes: 5,
            members: vec![],
        };

        let json = serde_json::to_value(&matrix).unwrap();
        assert!(json["group"].is_null());
        assert_eq!(json["month"], "2026-02");
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["graceMinutes"], 5);
        assert!(json["members"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_event_ack_shape() {
        let event = NormalizedEvent::from_payload(
            &json!({"identifier": "105", "timestamp": "2026-02-03T08:55:00"}),
            NaiveDate::from_ymd_opt(2026, 2, 3)
                .unwrap()
                .and_hms_opt(8, 55, 0)
                .unwrap(),
        )
        .unwrap();

        let policy = LatePolicy::new(ct(9, 0), 5);
        let mut record = DayRecord::seed(ct(9, 10));
        record.fold(ct(9, 10), &json!({}), &policy);
        record.fold(ct(8, 55), &json!({}), &policy);

        let ack = EventAck::new(&event, &record);
        let json = serde_json::to_value(&ack).unwrap();
        assert_eq!(json["identifier"], "105");
        assert_eq!(json["date"], "2026-02-03");
        assert_eq!(json["time"], "08:55");
        assert_eq!(json["late"], false);
        assert_eq!(json["firstIn"], "08:55");
        assert_eq!(json["lastIn"], "09:10");
        assert_eq!(json["count"], 2);
    }

    #[test]
    fn test_skipped_ack_shape() {
        let ack = SkippedAck::new("denied");
        let json = serde_json::to_string(&ack).unwrap();
        assert_eq!(json, r#"{"skipped":true,"reason":"denied"}"#);
    }

    #[test]
    fn test_ingest_ack_is_untagged() {
        let ack = IngestAck::Skipped(SkippedAck::new("denied"));
        let json = serde_json::to_value(&ack).unwrap();
        // no enum wrapper on the wire
        assert_eq!(json, json!({"skipped": true, "reason": "denied"}));
    }
}
