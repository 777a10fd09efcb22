use serde::Serialize;

use crate::config::CliConfig;
use crate::error::Result;
use crate::explain::{explain, ExplainOptions, TimeFormat};

#[derive(Debug, Serialize)]
struct ExplainOutput<'a> {
    expression: &'a str,
    description: String,
}

/// Render the `explain` output for an already preset-expanded expression.
pub fn render(expression: &str, twelve_hour: bool, config: &CliConfig, json: bool) -> Result<String> {
    let time_format = if twelve_hour {
        TimeFormat::TwelveHour
    } else {
        config.time_format
    };
    let options = ExplainOptions::default().with_time_format(time_format);
    let description = explain(expression, &options)?;

    if json {
        Ok(serde_json::to_string_pretty(&ExplainOutput {
            expression,
            description,
        })?)
    } else {
        Ok(description)
    }
}

/// Execute the `explain` command: print a plain-English description.
pub fn execute(expression: &str, twelve_hour: bool, config: &CliConfig, json: bool) -> Result<()> {
    println!("{}", render(expression, twelve_hour, config, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let out = render("0 9 * * 1-5", false, &CliConfig::default(), false).unwrap();
        assert_eq!(out, "At 09:00, on weekdays");
    }

    #[test]
    fn test_render_twelve_hour_from_flag_or_config() {
        let out = render("0 21 * * *", true, &CliConfig::default(), false).unwrap();
        assert_eq!(out, "At 9:00 PM");

        let config = CliConfig {
            time_format: TimeFormat::TwelveHour,
            ..CliConfig::default()
        };
        let out = render("0 21 * * *", false, &config, false).unwrap();
        assert_eq!(out, "At 9:00 PM");
    }

    #[test]
    fn test_render_json() {
        let out = render("*/15 * * * *", false, &CliConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["expression"], "*/15 * * * *");
        assert_eq!(value["description"], "Every 15 minutes");
    }

    #[test]
    fn test_render_error() {
        assert!(render("* *", false, &CliConfig::default(), false).is_err());
    }
}
