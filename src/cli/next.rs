use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::{CronError, Result};
use crate::schedule::{next_occurrences, SEARCH_HORIZON_DAYS};

const START_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Serialize)]
struct NextOutput<'a> {
    expression: &'a str,
    occurrences: Vec<NaiveDateTime>,
}

/// Parse a `--from` value as local civil time. A bare date means midnight.
pub fn parse_start(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    START_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| CronError::InvalidTimestamp(text.to_string()))
}

/// Render the `next` output starting after `start`.
pub fn render(expression: &str, count: usize, start: NaiveDateTime, json: bool) -> Result<String> {
    let occurrences = next_occurrences(expression, count, start)?;

    if json {
        return Ok(serde_json::to_string_pretty(&NextOutput {
            expression,
            occurrences,
        })?);
    }

    if occurrences.is_empty() {
        return Ok(format!(
            "No occurrences within the next {} days.",
            SEARCH_HORIZON_DAYS
        ));
    }
    Ok(occurrences
        .iter()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S  %a").to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Execute the `next` command: print upcoming run times, one per line.
pub fn execute(expression: &str, count: usize, from: Option<&str>, json: bool) -> Result<()> {
    let start = match from {
        Some(text) => parse_start(text)?,
        None => chrono::Local::now().naive_local(),
    };
    println!("{}", render(expression, count, start, json)?);
    Ok(())
}
