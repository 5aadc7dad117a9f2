//! Wall-clock time types and timestamp parsing
//!
//! Attendance is minute-granular: seconds are truncated when a timestamp
//! enters the system, so every comparison and every wire value works on
//! whole minutes (`"HH:MM"`).

use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A wall-clock time of day with minute precision
///
/// Ordered chronologically; serializes as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

/// Error when parsing a `"HH:MM"` string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid clock time: {0:?} (expected HH:MM)")]
pub struct ParseClockTimeError(pub String);

impl ClockTime {
    /// 00:00, the smallest clock time
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Create a clock time, validating the hour and minute ranges
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight
    #[inline]
    pub const fn to_minutes(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl From<NaiveTime> for ClockTime {
    /// Seconds are truncated, not rounded
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseClockTimeError(s.to_string());
        let (h, m) = trimmed.split_once(':').ok_or_else(err)?;
        let hour: u8 = h.parse().map_err(|_| err())?;
        let minute: u8 = m.parse().map_err(|_| err())?;
        Self::new(hour, minute).ok_or_else(err)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Lateness classification policy: workday start time plus a grace period
///
/// The exact threshold minute is on time; only strictly later first
/// arrivals are late. With start 09:00 and 5 grace minutes, 09:05 is on
/// time and 09:06 is late.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatePolicy {
    pub start: ClockTime,
    pub grace_minutes: u32,
}

impl LatePolicy {
    pub fn new(start: ClockTime, grace_minutes: u32) -> Self {
        Self {
            start,
            grace_minutes,
        }
    }

    /// Whether a first arrival at `first_in` counts as late
    ///
    /// The threshold saturates, so an oversized grace period means no
    /// arrival is ever late rather than an overflow.
    pub fn is_late(&self, first_in: ClockTime) -> bool {
        first_in.to_minutes() > self.start.to_minutes().saturating_add(self.grace_minutes)
    }
}

/// Timestamp shapes accepted from terminals, tried in order after RFC 3339
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an event timestamp into local wall-clock date and time
///
/// Offset-aware RFC 3339 input is converted to the local timezone first;
/// naive input is taken as already-local wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
