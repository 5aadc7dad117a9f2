//! Access event payload normalization
//!
//! Terminal vendors disagree on field names and types, so ingestion accepts
//! a handful of documented shapes and reduces them to one typed event at
//! the boundary. Everything after this module works on [`NormalizedEvent`].

use crate::error::{AppError, AppResult};
use crate::models::clock::{ClockTime, parse_timestamp};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::fmt;

/// Accepted payload field names, in precedence order
const IDENTIFIER_FIELDS: [&str; 4] = ["identifier", "employeeNo", "personId", "id"];
const TIMESTAMP_FIELDS: [&str; 3] = ["timestamp", "time", "eventTime"];
const OUTCOME_FIELDS: [&str; 3] = ["outcome", "result", "status"];

/// Access decision reported by the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Access granted; the event folds into attendance
    Granted,
    /// Anything else (denied, timeout, ...); acknowledged but never folded
    Other(String),
}

impl EventOutcome {
    /// The granted set is `granted` and `success`, case-insensitive
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "granted" | "success" => Self::Granted,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    #[inline]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Granted => "granted",
            Self::Other(reason) => reason,
        }
    }
}

impl fmt::Display for EventOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully normalized access event, ready for aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub person_id: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub outcome: EventOutcome,
    /// Payload as received, retained verbatim for diagnostics
    pub raw: Value,
}

impl NormalizedEvent {
    /// Normalize a raw ingestion payload
    ///
    /// - identifier: first of `identifier`/`employeeNo`/`personId`/`id`;
    ///   numbers are coerced to strings; missing or empty is an error
    /// - timestamp: first of `timestamp`/`time`/`eventTime`; absent means
    ///   the moment of receipt (`received_at`); unparseable is an error
    /// - outcome: first of `outcome`/`result`/`status`; absent means granted
    ///
    /// `null` values count as absent, like every other missing field.
    pub fn from_payload(payload: &Value, received_at: NaiveDateTime) -> AppResult<Self> {
        let person_id = first_field(payload, &IDENTIFIER_FIELDS)
            .and_then(coerce_identifier)
            .ok_or_else(|| AppError::required_field("identifier"))?;

        let (date, time) = match first_field(payload, &TIMESTAMP_FIELDS) {
            None => (received_at.date(), ClockTime::from(received_at.time())),
            Some(value) => {
                let text = value
                    .as_str()
                    .ok_or_else(|| AppError::invalid_time(value.to_string()))?;
                let dt = parse_timestamp(text).ok_or_else(|| AppError::invalid_time(text))?;
                (dt.date(), ClockTime::from(dt.time()))
            }
        };

        let outcome = match first_field(payload, &OUTCOME_FIELDS) {
            None => EventOutcome::Granted,
            Some(Value::String(raw)) => EventOutcome::from_raw(raw),
            Some(other) => EventOutcome::Other(other.to_string()),
        };

        Ok(Self {
            person_id,
            date,
            time,
            outcome,
            raw: payload.clone(),
        })
    }
}

/// First present, non-null field among `names`
fn first_field<'a>(payload: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .find_map(|name| payload.get(name).filter(|v| !v.is_null()))
}

fn coerce_identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
