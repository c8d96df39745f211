//! Time model: weekday tokens and minute-of-day intervals.
//!
//! Offering documents describe a meeting as up to two weekday tokens plus up to
//! two interval strings. This module turns those strings into [`DaySet`]s and
//! [`TimeInterval`]s that can be compared cheaply.

mod interval;
mod weekday;

pub use interval::{format_clock, parse_clock, parse_interval, Minutes, TimeInterval, TimeParseError};
pub use weekday::{DaySet, UnknownWeekday, Weekday};
