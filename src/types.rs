//! Serializable result records

use crate::error::Result;
use crate::parser::ParsedExpression;
use serde::{Deserialize, Serialize};

/// Outcome of [`crate::validate`]
///
/// `fields` and `is_extended` are only set for valid expressions; `error`
/// only for invalid ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_extended: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Validation {
    /// Build a record from a parse attempt
    pub fn from_parse(expression: &str, parsed: &Result<ParsedExpression>) -> Self {
        match parsed {
            Ok(parsed) => Self {
                valid: true,
                expression: expression.to_string(),
                fields: Some(parsed.field_count()),
                is_extended: Some(parsed.is_extended),
                error: None,
            },
            Err(e) => Self {
                valid: false,
                expression: expression.to_string(),
                fields: None,
                is_extended: None,
                error: Some(e.to_string()),
            },
        }
    }
}
