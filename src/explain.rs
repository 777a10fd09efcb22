//! Plain-English schedule explanations
//!
//! A sentence is built from up to three clauses, always in this order:
//! time of day, day of month / month, day of week.
//!
//! ```text
//! 0 9 * * 1-5     → At 09:00, on weekdays
//! */15 * * * *    → Every 15 minutes
//! 0 0 1 1 *       → At 00:00, on day 1 in January
//! ```

use crate::error::Result;
use crate::field::{day_name, month_name};
use crate::parser::{ParsedExpression, ParsedField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Most distinct times listed individually before summarizing as a count
const MAX_LISTED_TIMES: usize = 5;
/// Most days of the month listed individually
const MAX_LISTED_DAYS: usize = 5;
/// Most months or weekdays listed individually
const MAX_LISTED_NAMES: usize = 4;

/// Clock used when rendering times of day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `09:00`, `17:30:15`
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// `9:00 AM`, `5:30:15 PM`
    #[serde(rename = "12h")]
    TwelveHour,
}

/// Knobs for [`explain`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplainOptions {
    pub time_format: TimeFormat,
}

impl ExplainOptions {
    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }
}

/// Parse an expression and describe when it fires
///
/// # Examples
///
/// ```
/// use a3s_cronexpr::{explain, ExplainOptions};
///
/// let text = explain("0 9 * * 1-5", &ExplainOptions::default()).unwrap();
/// assert_eq!(text, "At 09:00, on weekdays");
/// ```
pub fn explain(expression: &str, options: &ExplainOptions) -> Result<String> {
    let parsed = ParsedExpression::parse(expression)?;
    Ok(parsed.describe(options))
}

impl ParsedExpression {
    /// Get a human-readable description of the schedule
    pub fn describe(&self, options: &ExplainOptions) -> String {
        let clauses = [
            Some(time_clause(self, options)),
            date_clause(self),
            weekday_clause(self),
        ];
        let sentence = clauses
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
        capitalize(&sentence)
    }
}

fn time_clause(expr: &ParsedExpression, options: &ExplainOptions) -> String {
    if expr.minute.is_wildcard() && expr.hour.is_wildcard() {
        let every_second = expr.second.as_ref().is_some_and(ParsedField::is_wildcard);
        return if every_second {
            "every second".to_string()
        } else {
            "every minute".to_string()
        };
    }

    // Only the literal `*/n` spelling gets the interval phrasing; `0-59/15`
    // falls through to the time list even though it expands the same.
    if let Some(step) = expr.minute.wildcard_step() {
        if expr.hour.is_wildcard() {
            return format!("every {} minutes", step);
        }
    }
    if let Some(step) = expr.hour.wildcard_step() {
        if expr.minute.single_value() == Some(0) {
            return format!("every {} hours", step);
        }
    }

    let seconds: Vec<Option<u32>> = match &expr.second {
        Some(second) => second.values.iter().copied().map(Some).collect(),
        None => vec![None],
    };
    let total = expr.hour.values.len() * expr.minute.values.len() * seconds.len();
    if total > MAX_LISTED_TIMES {
        return format!("at {} different times", total);
    }

    let mut times = Vec::with_capacity(total);
    for &hour in &expr.hour.values {
        for &minute in &expr.minute.values {
            for &second in &seconds {
                times.push(format_time(hour, minute, second, options.time_format));
            }
        }
    }
    format!("at {}", join_list(&times))
}

fn date_clause(expr: &ParsedExpression) -> Option<String> {
    let mut parts = Vec::new();

    if !expr.day_of_month.is_wildcard() {
        let days: Vec<String> = expr
            .day_of_month
            .values
            .iter()
            .map(u32::to_string)
            .collect();
        parts.push(match days.as_slice() {
            [day] => format!("on day {}", day),
            list if list.len() <= MAX_LISTED_DAYS => format!("on days {}", join_list(list)),
            list => format!("on {} days of the month", list.len()),
        });
    }

    if !expr.month.is_wildcard() {
        let months: Vec<String> = expr
            .month
            .values
            .iter()
            .map(|&m| month_name(m).map_or_else(|| m.to_string(), str::to_string))
            .collect();
        parts.push(match months.as_slice() {
            [month] => format!("in {}", month),
            list if list.len() <= MAX_LISTED_NAMES => format!("in {}", join_list(list)),
            list => format!("in {} months", list.len()),
        });
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn weekday_clause(expr: &ParsedExpression) -> Option<String> {
    if expr.day_of_week.is_wildcard() {
        return None;
    }

    let days: BTreeSet<u32> = expr
        .day_of_week
        .values
        .iter()
        .map(|&d| if d == 7 { 0 } else { d })
        .collect();
    if days.iter().eq([1, 2, 3, 4, 5].iter()) {
        return Some("on weekdays".to_string());
    }
    if days.iter().eq([0, 6].iter()) {
        return Some("on weekends".to_string());
    }

    let names: Vec<String> = days
        .iter()
        .map(|&d| day_name(d).map_or_else(|| d.to_string(), str::to_string))
        .collect();
    Some(match names.as_slice() {
        [day] => format!("on {}", day),
        list if list.len() <= MAX_LISTED_NAMES => format!("on {}", join_list(list)),
        list => format!("on {} days of the week", list.len()),
    })
}

fn format_time(hour: u32, minute: u32, second: Option<u32>, format: TimeFormat) -> String {
    let seconds = second.map(|s| format!(":{:02}", s)).unwrap_or_default();
    let twelve_hour = match (format, hour) {
        (TimeFormat::TwelveHour, 0) => Some((12, "AM")),
        (TimeFormat::TwelveHour, 1..=11) => Some((hour, "AM")),
        (TimeFormat::TwelveHour, 12) => Some((12, "PM")),
        (TimeFormat::TwelveHour, 13..=23) => Some((hour - 12, "PM")),
        _ => None,
    };
    match twelve_hour {
        Some((h, suffix)) => format!("{}:{:02}{} {}", h, minute, seconds, suffix),
        None => format!("{:02}:{:02}{}", hour, minute, seconds),
    }
}

/// `A`, `A and B`, `A, B, and C`
fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
