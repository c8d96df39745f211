//! Minute-of-day intervals parsed from offering-document time strings.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::LazyLock;

use qtty::{Minute, Quantity};
use regex::{Captures, Regex};
use thiserror::Error;

/// Minutes since midnight.
pub type Minutes = Quantity<Minute>;

/// `H:MM[:]AM - H:MM[:]PM`, with optional colon and optional spaces before the
/// meridiem on either side. Either marker may be missing.
static INTERVAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+):(\d+)\s*:?\s*([AP]M)?\s*-\s*(\d+):(\d+)\s*:?\s*([AP]M)?")
        .expect("interval pattern is valid")
});

static CLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+):(\d+)\s*:?\s*([AP]M)?\s*$").expect("clock pattern is valid")
});

/// Errors produced while reading time strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Unrecognised time interval: {0:?}")]
    MalformedInterval(String),

    #[error("Unrecognised clock time: {0:?}")]
    MalformedClock(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn from_capture(caps: &Captures<'_>, group: usize) -> Option<Self> {
        caps.get(group)
            .map(|m| if m.as_str().eq_ignore_ascii_case("pm") { Meridiem::Pm } else { Meridiem::Am })
    }
}

/// 12-hour to minutes since midnight: 12 AM is 0, 12 PM is noon, other PM hours add 12.
/// Without a marker the hour is taken as written.
fn to_minutes(hour: u32, minute: u32, meridiem: Option<Meridiem>) -> u32 {
    let hour = match meridiem {
        Some(Meridiem::Pm) if hour != 12 => hour.saturating_add(12),
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    };
    hour.saturating_mul(60).saturating_add(minute)
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// Half-open time range `[start, end)` within a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInterval {
    start: Minutes,
    end: Minutes,
}

impl TimeInterval {
    /// Creates an interval from raw minute values.
    pub fn from_minutes(start: u32, end: u32) -> Self {
        Self {
            start: Quantity::new(f64::from(start)),
            end: Quantity::new(f64::from(end)),
        }
    }

    /// Parses strings such as `"9:00 AM - 10:30 AM"` or `"11:11:AM-12:30:PM"`.
    ///
    /// A side without an AM/PM marker borrows the marker of the other side.
    pub fn parse(text: &str) -> Result<Self, TimeParseError> {
        let malformed = || TimeParseError::MalformedInterval(text.to_string());
        let caps = INTERVAL_PATTERN.captures(text).ok_or_else(malformed)?;

        let start_marker = Meridiem::from_capture(&caps, 3);
        let end_marker = Meridiem::from_capture(&caps, 6);

        let (start_h, start_m) = (number(&caps, 1), number(&caps, 2));
        let (end_h, end_m) = (number(&caps, 4), number(&caps, 5));
        match (start_h, start_m, end_h, end_m) {
            (Some(sh), Some(sm), Some(eh), Some(em)) => {
                let start = to_minutes(sh, sm, start_marker.or(end_marker));
                let end = to_minutes(eh, em, end_marker.or(start_marker));
                Ok(Self::from_minutes(start, end))
            }
            _ => Err(malformed()),
        }
    }

    pub const fn start(&self) -> Minutes {
        self.start
    }

    pub const fn end(&self) -> Minutes {
        self.end
    }

    pub fn start_minute(&self) -> u32 {
        self.start.value() as u32
    }

    pub fn end_minute(&self) -> u32 {
        self.end.value() as u32
    }

    /// True iff `self.start < other.end && other.start < self.end`.
    /// Intervals that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start.value() < other.end.value() && other.start.value() < self.end.value()
    }

    /// True if the interval starts no earlier than `earliest` and ends no later than `latest`.
    pub fn within(&self, earliest: Option<Minutes>, latest: Option<Minutes>) -> bool {
        let starts_ok = earliest.map_or(true, |e| self.start.value() >= e.value());
        let ends_ok = latest.map_or(true, |l| self.end.value() <= l.value());
        starts_ok && ends_ok
    }
}

impl FromStr for TimeInterval {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            format_clock(self.start_minute()),
            format_clock(self.end_minute())
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("TimeInterval", 2)?;
        s.serialize_field("start", &self.start_minute())?;
        s.serialize_field("end", &self.end_minute())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: u32,
            end: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::from_minutes(raw.start, raw.end))
    }
}

/// Parses an interval string; see [`TimeInterval::parse`].
pub fn parse_interval(text: &str) -> Result<TimeInterval, TimeParseError> {
    TimeInterval::parse(text)
}

/// Parses a single clock time such as `"8:00 AM"` or `"4:30PM"` into minutes since midnight.
pub fn parse_clock(text: &str) -> Result<Minutes, TimeParseError> {
    let malformed = || TimeParseError::MalformedClock(text.to_string());
    let caps = CLOCK_PATTERN.captures(text).ok_or_else(malformed)?;
    let hour = number(&caps, 1).ok_or_else(malformed)?;
    let minute = number(&caps, 2).ok_or_else(malformed)?;
    let minutes = to_minutes(hour, minute, Meridiem::from_capture(&caps, 3));
    Ok(Quantity::new(f64::from(minutes)))
}

/// Formats minutes since midnight as `H:MM AM`.
pub fn format_clock(minutes: u32) -> String {
    let hour24 = (minutes / 60) % 24;
    let minute = minutes % 60;
    let (hour, marker) = match hour24 {
        0 => (12, "AM"),
        1..=11 => (hour24, "AM"),
        12 => (12, "PM"),
        _ => (hour24 - 12, "PM"),
    };
    format!("{hour}:{minute:02} {marker}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(iv: &TimeInterval) -> (u32, u32) {
        (iv.start_minute(), iv.end_minute())
    }

    #[test]
    fn parses_compact_form_without_spaces() {
        let iv = parse_interval("11:11AM-12:30PM").unwrap();
        assert_eq!(minutes(&iv), (671, 750));
    }

    #[test]
    fn parses_spaced_form() {
        let iv = parse_interval("9:00 AM - 10:30 AM").unwrap();
        assert_eq!(minutes(&iv), (540, 630));
    }

    #[test]
    fn parses_colon_before_meridiem() {
        let iv = parse_interval("11:11:AM - 12:30:PM").unwrap();
        assert_eq!(minutes(&iv), (671, 750));
    }

    #[test]
    fn start_inherits_end_marker() {
        let iv = parse_interval("1:00 - 2:30 PM").unwrap();
        assert_eq!(minutes(&iv), (13 * 60, 14 * 60 + 30));
    }

    #[test]
    fn end_inherits_start_marker() {
        let iv = parse_interval("8:00 AM - 9:20").unwrap();
        assert_eq!(minutes(&iv), (480, 560));
    }

    #[test]
    fn midnight_and_noon_conversion() {
        let iv = parse_interval("12:00 AM - 12:45 PM").unwrap();
        assert_eq!(minutes(&iv), (0, 765));
    }

    #[test]
    fn lowercase_markers_are_accepted() {
        let iv = parse_interval("2:00pm - 3:15pm").unwrap();
        assert_eq!(minutes(&iv), (840, 915));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            parse_interval("TBA"),
            Err(TimeParseError::MalformedInterval("TBA".to_string()))
        );
        assert!(parse_interval("").is_err());
        assert!(parse_interval("9 AM - 10 AM").is_err());
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let iv: TimeInterval = "9:00 AM - 10:00 AM".parse().unwrap();
        assert_eq!(iv, TimeInterval::from_minutes(540, 600));
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let a = TimeInterval::from_minutes(540, 600);
        let b = TimeInterval::from_minutes(600, 660);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn overlapping_intervals_are_detected() {
        let a = TimeInterval::from_minutes(540, 630);
        let b = TimeInterval::from_minutes(600, 660);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let outer = TimeInterval::from_minutes(480, 720);
        let inner = TimeInterval::from_minutes(540, 600);
        assert!(outer.overlaps(&inner));
    }

    #[test]
    fn within_checks_both_limits() {
        let iv = TimeInterval::from_minutes(540, 630);
        let q = |m: f64| Some(Quantity::<Minute>::new(m));
        assert!(iv.within(None, None));
        assert!(iv.within(q(540.0), q(630.0)));
        assert!(!iv.within(q(541.0), None));
        assert!(!iv.within(None, q(629.0)));
    }

    #[test]
    fn parses_clock_limits() {
        assert_eq!(parse_clock("8:00 AM").unwrap().value(), 480.0);
        assert_eq!(parse_clock("4:30PM").unwrap().value(), 990.0);
        assert_eq!(parse_clock("12:10 AM").unwrap().value(), 10.0);
        assert!(parse_clock("Any").is_err());
        assert!(parse_clock("8:00 AM - 9:00 AM").is_err());
    }

    #[test]
    fn display_uses_twelve_hour_clock() {
        let iv = TimeInterval::from_minutes(671, 750);
        assert_eq!(iv.to_string(), "11:11 AM - 12:30 PM");
        assert_eq!(format_clock(0), "12:00 AM");
        assert_eq!(format_clock(13 * 60 + 5), "1:05 PM");
    }
}
