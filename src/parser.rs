//! Cron expression parser
//!
//! Supports the standard 5-field form and the extended 6-field form with a
//! leading seconds field.
//!
//! Special characters:
//! - `*` - any value
//! - `,` - value list separator (e.g., `1,3,5` or `1-3,7`)
//! - `-` - range (e.g., `1-5`)
//! - `/` - step (e.g., `*/5`, `0-30/5`, or `5/10` which runs up to the field maximum)
//! - `jan`-`dec`, `sun`-`sat` - names in the month and day-of-week fields
//!
//! Values are not checked against the field range. A day-of-month of 31 in a
//! February-only schedule parses fine and simply never matches when scanning.

use crate::error::{CronError, Result};
use crate::field::{Field, EXTENDED_FIELDS, STANDARD_FIELDS};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Largest integer accepted in any field.
///
/// Keeps range expansion bounded for inputs like `0-4000000000`.
pub const MAX_FIELD_VALUE: u32 = 9999;

/// How a field token was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Wildcard,
    Step,
    List,
    Range,
    Single,
}

/// One parsed field token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedField {
    /// Original token text
    pub raw: String,
    /// How the token was written
    pub kind: FieldKind,
    /// Matching values, ascending and never empty
    pub values: BTreeSet<u32>,
}

impl ParsedField {
    pub fn is_wildcard(&self) -> bool {
        self.kind == FieldKind::Wildcard
    }

    pub fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }

    /// The step of a token written literally as `*/n`
    pub fn wildcard_step(&self) -> Option<u32> {
        match self.kind {
            FieldKind::Step => self.raw.strip_prefix("*/")?.parse().ok(),
            _ => None,
        }
    }

    /// The value of a token written as a single integer
    pub fn single_value(&self) -> Option<u32> {
        match self.kind {
            FieldKind::Single => self.values.first().copied(),
            _ => None,
        }
    }
}

/// Parse one field token into the set of values it matches
///
/// # Examples
///
/// ```
/// use a3s_cronexpr::{parse_field, Field, FieldKind};
///
/// let minutes = parse_field("*/15", Field::Minute).unwrap();
/// assert_eq!(minutes.kind, FieldKind::Step);
/// assert_eq!(minutes.values.into_iter().collect::<Vec<_>>(), vec![0, 15, 30, 45]);
///
/// let days = parse_field("mon-fri", Field::DayOfWeek).unwrap();
/// assert_eq!(days.kind, FieldKind::Range);
/// assert_eq!(days.values.len(), 5);
/// ```
pub fn parse_field(token: &str, field: Field) -> Result<ParsedField> {
    let resolved = substitute_names(token, field)?;
    let resolved: &str = &resolved;
    let spec = field.spec();
    let int = |text: &str| parse_value(text, field, token);

    let (kind, values): (FieldKind, BTreeSet<u32>) = if resolved == "*" {
        (FieldKind::Wildcard, (spec.min..=spec.max).collect())
    } else if let Some((range_part, step_part)) = resolved.split_once('/') {
        let step = step_part
            .parse::<u32>()
            .ok()
            .filter(|step| *step >= 1)
            .ok_or_else(|| CronError::invalid_field(field, token, "invalid step value"))?;
        let (start, end) = if range_part == "*" {
            (spec.min, spec.max)
        } else if let Some((a, b)) = range_part.split_once('-') {
            (int(a)?, int(b)?)
        } else {
            (int(range_part)?, spec.max)
        };
        (
            FieldKind::Step,
            (start..=end).step_by(step as usize).collect(),
        )
    } else if resolved.contains(',') {
        let mut values = BTreeSet::new();
        for item in resolved.split(',') {
            match item.split_once('-') {
                Some((a, b)) => values.extend(int(a)?..=int(b)?),
                None => {
                    values.insert(int(item)?);
                }
            }
        }
        (FieldKind::List, values)
    } else if let Some((a, b)) = resolved.split_once('-') {
        (FieldKind::Range, (int(a)?..=int(b)?).collect())
    } else {
        (FieldKind::Single, BTreeSet::from([int(resolved)?]))
    };

    if values.is_empty() {
        return Err(CronError::invalid_field(
            field,
            token,
            "expands to no values",
        ));
    }

    Ok(ParsedField {
        raw: token.to_string(),
        kind,
        values,
    })
}

fn parse_value(text: &str, field: Field, token: &str) -> Result<u32> {
    let value: u32 = text.parse().map_err(|_| {
        CronError::invalid_field(field, token, format!("'{}' is not a valid integer", text))
    })?;
    if value > MAX_FIELD_VALUE {
        return Err(CronError::invalid_field(
            field,
            token,
            format!("value {} exceeds {}", value, MAX_FIELD_VALUE),
        ));
    }
    Ok(value)
}

/// Replace `jan`..`dec` / `sun`..`sat` sub-tokens with their numbers
///
/// The token is split on `,`, `-` and `/`, every alphabetic piece is looked up
/// whole in the field's name table, and the pieces are joined back with their
/// original delimiters.
fn substitute_names(token: &str, field: Field) -> Result<Cow<'_, str>> {
    if !field.accepts_names() || !token.chars().any(|c| c.is_ascii_alphabetic()) {
        return Ok(Cow::Borrowed(token));
    }

    let mut out = String::with_capacity(token.len());
    let mut rest = token;
    loop {
        let end = rest
            .find(|c: char| matches!(c, ',' | '-' | '/'))
            .unwrap_or(rest.len());
        let word = &rest[..end];
        if word.chars().any(|c| c.is_ascii_alphabetic()) {
            let value = field.resolve_name(word).ok_or_else(|| {
                CronError::invalid_field(field, token, format!("unknown name '{}'", word))
            })?;
            out.push_str(&value.to_string());
        } else {
            out.push_str(word);
        }
        if end == rest.len() {
            break;
        }
        // delimiters are single ASCII bytes
        out.push_str(&rest[end..=end]);
        rest = &rest[end + 1..];
    }
    Ok(Cow::Owned(out))
}

/// A fully parsed cron expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExpression {
    /// Original expression string
    pub expression: String,
    /// True for the 6-field form with a leading seconds field
    pub is_extended: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<ParsedField>,
    pub minute: ParsedField,
    pub hour: ParsedField,
    pub day_of_month: ParsedField,
    pub month: ParsedField,
    pub day_of_week: ParsedField,
}

impl ParsedExpression {
    /// Parse a cron expression string
    ///
    /// # Examples
    ///
    /// ```
    /// use a3s_cronexpr::ParsedExpression;
    ///
    /// // Every 5 minutes
    /// let expr = ParsedExpression::parse("*/5 * * * *").unwrap();
    /// assert!(!expr.is_extended);
    ///
    /// // Every 30 seconds
    /// let expr = ParsedExpression::parse("*/30 * * * * *").unwrap();
    /// assert!(expr.is_extended);
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(CronError::Malformed("expression is empty".to_string()));
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if let [single] = tokens.as_slice() {
            if single.starts_with('@') {
                let reason = if crate::preset::expand_preset(single) != *single {
                    format!("preset '{}' must be expanded with expand_preset first", single)
                } else {
                    format!("unknown preset '{}'", single)
                };
                return Err(CronError::Malformed(reason));
            }
        }

        let is_extended = match tokens.len() {
            5 => false,
            6 => true,
            found => return Err(CronError::FieldCount { found }),
        };
        let names: &[Field] = if is_extended {
            &EXTENDED_FIELDS
        } else {
            &STANDARD_FIELDS
        };

        let mut parsed = names
            .iter()
            .zip(&tokens)
            .map(|(field, token)| parse_field(token, *field))
            .collect::<Result<Vec<_>>>()?;
        let second = if is_extended {
            Some(parsed.remove(0))
        } else {
            None
        };
        let [minute, hour, day_of_month, month, day_of_week]: [ParsedField; 5] = parsed
            .try_into()
            .map_err(|_| CronError::FieldCount {
                found: tokens.len(),
            })?;

        tracing::debug!(expression, is_extended, "Parsed cron expression");

        Ok(Self {
            expression: expression.to_string(),
            is_extended,
            second,
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
        })
    }

    /// Look up a field by name; `Field::Second` is `None` in the 5-field form
    pub fn field(&self, field: Field) -> Option<&ParsedField> {
        match field {
            Field::Second => self.second.as_ref(),
            Field::Minute => Some(&self.minute),
            Field::Hour => Some(&self.hour),
            Field::DayOfMonth => Some(&self.day_of_month),
            Field::Month => Some(&self.month),
            Field::DayOfWeek => Some(&self.day_of_week),
        }
    }

    /// Present fields in positional order
    pub fn fields(&self) -> impl Iterator<Item = (Field, &ParsedField)> + '_ {
        EXTENDED_FIELDS
            .into_iter()
            .filter_map(move |field| self.field(field).map(|parsed| (field, parsed)))
    }

    /// Number of fields: 5 or 6
    pub fn field_count(&self) -> usize {
        if self.is_extended {
            6
        } else {
            5
        }
    }
}

impl FromStr for ParsedExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
