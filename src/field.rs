//! Cron field table
//!
//! Static domain knowledge shared by the parser, the explainer, and the
//! scanner:
//! ```text
//! ┌───────────── second (0-59, 6-field form only)
//! │ ┌───────────── minute (0-59)
//! │ │ ┌───────────── hour (0-23)
//! │ │ │ ┌───────────── day of month (1-31)
//! │ │ │ │ ┌───────────── month (1-12 or jan-dec)
//! │ │ │ │ │ ┌───────────── day of week (0-6 or sun-sat, 7=Sunday)
//! │ │ │ │ │ │
//! * * * * * *
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One positional slot of a cron expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "second")]
    Second,
    #[serde(rename = "minute")]
    Minute,
    #[serde(rename = "hour")]
    Hour,
    #[serde(rename = "day of month")]
    DayOfMonth,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "day of week")]
    DayOfWeek,
}

/// Positional field order of the standard 5-field form
pub const STANDARD_FIELDS: [Field; 5] = [
    Field::Minute,
    Field::Hour,
    Field::DayOfMonth,
    Field::Month,
    Field::DayOfWeek,
];

/// Positional field order of the extended 6-field form
pub const EXTENDED_FIELDS: [Field; 6] = [
    Field::Second,
    Field::Minute,
    Field::Hour,
    Field::DayOfMonth,
    Field::Month,
    Field::DayOfWeek,
];

/// Legal numeric domain of a field, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub min: u32,
    pub max: u32,
}

/// Full English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English day names, Sunday first
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const DAY_ABBREVIATIONS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

impl Field {
    /// Numeric domain of this field
    pub const fn spec(self) -> FieldSpec {
        match self {
            Field::Second | Field::Minute => FieldSpec { min: 0, max: 59 },
            Field::Hour => FieldSpec { min: 0, max: 23 },
            Field::DayOfMonth => FieldSpec { min: 1, max: 31 },
            Field::Month => FieldSpec { min: 1, max: 12 },
            Field::DayOfWeek => FieldSpec { min: 0, max: 6 },
        }
    }

    /// Human-readable field name, as used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Field::Second => "second",
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day of month",
            Field::Month => "month",
            Field::DayOfWeek => "day of week",
        }
    }

    /// Whether 3-letter name abbreviations are accepted in this field
    pub const fn accepts_names(self) -> bool {
        matches!(self, Field::Month | Field::DayOfWeek)
    }

    /// Resolve a case-insensitive 3-letter abbreviation (`jan`, `mon`, ...)
    ///
    /// Returns `None` for fields without names or unknown abbreviations.
    pub fn resolve_name(self, name: &str) -> Option<u32> {
        let table: &[&str] = match self {
            Field::Month => &MONTH_ABBREVIATIONS,
            Field::DayOfWeek => &DAY_ABBREVIATIONS,
            _ => return None,
        };
        let index = table
            .iter()
            .position(|abbr| abbr.eq_ignore_ascii_case(name))?;
        let offset = if self == Field::Month { 1 } else { 0 };
        Some(index as u32 + offset)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full month name for 1-12
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
}

/// Full day name for 0-7 (both 0 and 7 are Sunday)
pub fn day_name(weekday: u32) -> Option<&'static str> {
    match weekday {
        0..=6 => Some(DAY_NAMES[weekday as usize]),
        7 => Some(DAY_NAMES[0]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_specs() {
        assert_eq!(Field::Second.spec(), FieldSpec { min: 0, max: 59 });
        assert_eq!(Field::Minute.spec(), FieldSpec { min: 0, max: 59 });
        assert_eq!(Field::Hour.spec(), FieldSpec { min: 0, max: 23 });
        assert_eq!(Field::DayOfMonth.spec(), FieldSpec { min: 1, max: 31 });
        assert_eq!(Field::Month.spec(), FieldSpec { min: 1, max: 12 });
        assert_eq!(Field::DayOfWeek.spec(), FieldSpec { min: 0, max: 6 });
    }

    #[test]
    fn test_field_order() {
        assert_eq!(&EXTENDED_FIELDS[1..], &STANDARD_FIELDS[..]);
        assert!(Field::Second < Field::DayOfWeek);
    }

    #[test]
    fn test_resolve_names_case_insensitive() {
        assert_eq!(Field::Month.resolve_name("jan"), Some(1));
        assert_eq!(Field::Month.resolve_name("DEC"), Some(12));
        assert_eq!(Field::DayOfWeek.resolve_name("Sun"), Some(0));
        assert_eq!(Field::DayOfWeek.resolve_name("sat"), Some(6));
    }

    #[test]
    fn test_resolve_names_rejects_unknown() {
        assert_eq!(Field::Month.resolve_name("january"), None);
        assert_eq!(Field::DayOfWeek.resolve_name("xyz"), None);
        assert_eq!(Field::Hour.resolve_name("mon"), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
        assert_eq!(day_name(0), Some("Sunday"));
        assert_eq!(day_name(7), Some("Sunday"));
        assert_eq!(day_name(8), None);
        assert_eq!(Field::DayOfMonth.to_string(), "day of month");
    }
}
