//! Per-person, per-day attendance record

use crate::models::clock::{ClockTime, LatePolicy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything known about one person's attendance on one day
///
/// Invariants:
/// - `first_in <= last_in`
/// - `late` is derived from the current `first_in` on every fold and is
///   never written independently, so an out-of-order earlier event can
///   flip it back to false
/// - `count` is the number of granted events folded in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub present: bool,
    pub late: bool,
    pub first_in: ClockTime,
    pub last_in: ClockTime,
    pub count: u32,
    /// Raw payload of the most recently folded event
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_event: Option<Value>,
}

impl DayRecord {
    /// Empty record anchored at `time`; `fold` turns it into a real one
    pub fn seed(time: ClockTime) -> Self {
        Self {
            present: false,
            late: false,
            first_in: time,
            last_in: time,
            count: 0,
            last_event: None,
        }
    }

    /// Fold one granted event into the day
    pub fn fold(&mut self, time: ClockTime, raw: &Value, policy: &LatePolicy) {
        self.first_in = self.first_in.min(time);
        self.last_in = self.last_in.max(time);
        self.late = policy.is_late(self.first_in);
        self.count += 1;
        self.present = true;
        self.last_event = Some(raw.clone());
    }
}

/// The report cell for a day with at least one granted event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub present: bool,
    pub late: bool,
    pub first_in: ClockTime,
}

impl From<&DayRecord> for DayCell {
    fn from(record: &DayRecord) -> Self {
        Self {
            present: record.present,
            late: record.late,
            first_in: record.first_in,
        }
    }
}
