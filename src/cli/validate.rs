use crate::error::Result;
use crate::types::Validation;

/// Render the `validate` output. The flag is false for an invalid expression.
pub fn render(expression: &str, json: bool) -> Result<(String, bool)> {
    let report = crate::validate(expression);
    let text = if json {
        serde_json::to_string_pretty(&report)?
    } else {
        summary(&report)
    };
    Ok((text, report.valid))
}

fn summary(report: &Validation) -> String {
    match (&report.error, report.fields) {
        (Some(error), _) => format!("invalid: {}", error),
        (None, Some(fields)) => format!("valid: {}-field expression", fields),
        (None, None) => "valid".to_string(),
    }
}

/// Execute the `validate` command. Invalid input is reported, not raised.
pub fn execute(expression: &str, json: bool) -> Result<bool> {
    let (text, valid) = render(expression, json)?;
    if valid || json {
        println!("{}", text);
    } else {
        eprintln!("{}", text);
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_valid() {
        let (text, valid) = render("0 9 * * *", false).unwrap();
        assert!(valid);
        assert_eq!(text, "valid: 5-field expression");

        let (text, _) = render("0 0 9 * * *", false).unwrap();
        assert_eq!(text, "valid: 6-field expression");
    }

    #[test]
    fn test_render_invalid() {
        let (text, valid) = render("not a cron", false).unwrap();
        assert!(!valid);
        assert!(text.starts_with("invalid: "));
        assert!(text.contains("got 3"));
    }

    #[test]
    fn test_render_json() {
        let (text, valid) = render("61-70/0 * * * *", true).unwrap();
        assert!(!valid);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["valid"], false);
        assert!(value["error"].as_str().unwrap().contains("minute"));
    }
}
