//! Weekday tokens and compact sets of weekdays.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Day of the week as printed in course-offering documents (`Sun..Sat`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// All days, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Position in the week, `Sun = 0`.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token does not name a weekday.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown weekday token: {0:?}")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    /// Accepts the three-letter abbreviation or the full name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let prefix = token.get(..3).unwrap_or("");
        let day = match prefix {
            "sun" => Weekday::Sun,
            "mon" => Weekday::Mon,
            "tue" => Weekday::Tue,
            "wed" => Weekday::Wed,
            "thu" => Weekday::Thu,
            "fri" => Weekday::Fri,
            "sat" => Weekday::Sat,
            _ => return Err(UnknownWeekday(s.to_string())),
        };
        Ok(day)
    }
}

/// Set of weekdays packed into a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DaySet(u8);

impl DaySet {
    pub const EMPTY: DaySet = DaySet(0);

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= day.bit();
    }

    pub const fn contains(self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    pub const fn union(self, other: DaySet) -> DaySet {
        DaySet(self.0 | other.0)
    }

    /// True if at least one day is present in both sets.
    pub const fn intersects(self, other: DaySet) -> bool {
        self.0 & other.0 != 0
    }

    /// Number of distinct days.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Days in week order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = DaySet::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Weekday::as_str).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_abbreviations_and_full_names() {
        assert_eq!("Mon".parse::<Weekday>(), Ok(Weekday::Mon));
        assert_eq!(" thursday ".parse::<Weekday>(), Ok(Weekday::Thu));
        assert_eq!("SAT".parse::<Weekday>(), Ok(Weekday::Sat));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!("Th".parse::<Weekday>().is_err());
        assert!("".parse::<Weekday>().is_err());
        assert_eq!(
            "Xyz".parse::<Weekday>(),
            Err(UnknownWeekday("Xyz".to_string()))
        );
    }

    #[test]
    fn day_set_counts_distinct_days() {
        let set: DaySet = [Weekday::Mon, Weekday::Wed, Weekday::Mon].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Weekday::Wed));
        assert!(!set.contains(Weekday::Tue));
    }

    #[test]
    fn day_set_intersection_and_union() {
        let a: DaySet = [Weekday::Sun, Weekday::Tue].into_iter().collect();
        let b: DaySet = [Weekday::Tue, Weekday::Thu].into_iter().collect();
        let c: DaySet = [Weekday::Fri].into_iter().collect();

        assert!(a.intersects(b));
        assert!(!a.intersects(c));
        assert_eq!(a.union(b).len(), 3);
        assert!(DaySet::EMPTY.is_empty());
    }

    #[test]
    fn day_set_iterates_in_week_order() {
        let set: DaySet = [Weekday::Sat, Weekday::Sun, Weekday::Wed].into_iter().collect();
        let days: Vec<Weekday> = set.iter().collect();
        assert_eq!(days, vec![Weekday::Sun, Weekday::Wed, Weekday::Sat]);
        assert_eq!(set.to_string(), "{Sun, Wed, Sat}");
    }
}
