//! Wall-clock access
//!
//! The only place the server reads the system clock. Everything downstream
//! takes the resulting values as parameters, which keeps the aggregation
//! and normalization logic clock-free and testable.

use chrono::{Local, NaiveDateTime};
use shared::models::YearMonth;

/// The current local wall-clock date and time
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// The current local calendar month
pub fn current_month() -> YearMonth {
    YearMonth::from_date(Local::now().date_naive())
}
