//! # a3s-cronexpr
//!
//! Cron expression parsing, plain-English explanation, and next-run
//! calculation for the A3S ecosystem.
//!
//! ## Overview
//!
//! Both the standard 5-field form and the 6-field form with a leading
//! seconds field are supported, along with `jan`-`dec` / `sun`-`sat` names
//! and `@daily`-style presets. Everything here is pure and synchronous:
//! no state survives a call.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cronexpr::{explain, expand_preset, next_occurrences, validate, ExplainOptions};
//! use chrono::NaiveDate;
//!
//! # fn example() -> a3s_cronexpr::Result<()> {
//! let expression = expand_preset("@daily"); // "0 0 * * *"
//!
//! assert!(validate(&expression).valid);
//! assert_eq!(explain("0 9 * * 1-5", &ExplainOptions::default())?, "At 09:00, on weekdays");
//!
//! let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! for run in next_occurrences(&expression, 3, start)? {
//!     println!("{run}");
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **field** — per-field numeric ranges and name tables
//! - **parser** — field tokens → value sets, expression → [`ParsedExpression`]
//! - **explain** — [`ParsedExpression`] → English sentence
//! - **schedule** — [`ParsedExpression`] + start instant → matching instants
//! - **preset** — `@name` shorthands
//! - **cli** / **config** — the `cronexpr` command-line shell

pub mod cli;
pub mod config;
pub mod error;
pub mod explain;
pub mod field;
pub mod parser;
pub mod preset;
pub mod schedule;
pub mod types;

// Re-export core types
pub use error::{CronError, Result};
pub use explain::{explain, ExplainOptions, TimeFormat};
pub use field::{Field, FieldSpec};
pub use parser::{parse_field, FieldKind, ParsedExpression, ParsedField};
pub use preset::{expand_preset, presets, PRESETS};
pub use schedule::{next_occurrences, upcoming, Occurrences, DEFAULT_COUNT};
pub use types::Validation;

/// Parse a cron expression
///
/// ```
/// let expr = a3s_cronexpr::parse("0 0 * * 7").unwrap();
/// assert!(expr.day_of_week.values.contains(&7));
/// ```
pub fn parse(expression: &str) -> Result<ParsedExpression> {
    ParsedExpression::parse(expression)
}

/// Check an expression without failing
///
/// Parse errors are folded into [`Validation::error`].
///
/// ```
/// use a3s_cronexpr::validate;
///
/// assert!(validate("0 9 * * *").valid);
/// let report = validate("not a cron");
/// assert!(!report.valid);
/// assert!(report.error.is_some());
/// ```
pub fn validate(expression: &str) -> Validation {
    Validation::from_parse(expression, &ParsedExpression::parse(expression))
}
