pub mod explain;
pub mod next;
pub mod presets;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CliConfig;
use crate::error::Result;
use crate::preset::expand_preset;

/// cronexpr - explain, validate, and preview cron schedules
#[derive(Debug, Parser)]
#[command(name = "cronexpr", version, about)]
pub struct Cli {
    /// Path to a TOML config file (default: $CRONEXPR_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Describe a schedule in plain English
    Explain {
        /// Cron expression or @preset (quote it, or pass the fields as separate words)
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,

        /// Use a 12-hour clock (9:00 AM) instead of 24-hour (09:00)
        #[arg(long)]
        twelve_hour: bool,
    },

    /// Check whether an expression parses; exits non-zero when it does not
    Validate {
        /// Cron expression or @preset
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
    },

    /// List upcoming run times
    Next {
        /// Cron expression or @preset
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,

        /// Number of run times to list (default from config, else 5)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Start after this local time instead of now ("YYYY-MM-DD HH:MM[:SS]")
        #[arg(long)]
        from: Option<String>,
    },

    /// List the supported @presets
    Presets,
}

/// Join expression words with single spaces and expand `@presets`.
pub fn resolve_expression(words: &[String]) -> String {
    let joined = words.join(" ");
    let resolved = expand_preset(&joined);
    if resolved != joined {
        tracing::debug!(preset = %joined, expression = %resolved, "Expanded preset");
    }
    resolved
}

/// Run a parsed command line. Returns false when the command ran but
/// reported a failure (currently only `validate` on an invalid expression).
pub fn run(cli: &Cli, config: &CliConfig) -> Result<bool> {
    let json = cli.json || config.json;

    match &cli.command {
        Commands::Explain {
            expression,
            twelve_hour,
        } => {
            explain::execute(&resolve_expression(expression), *twelve_hour, config, json)?;
            Ok(true)
        }
        Commands::Validate { expression } => {
            validate::execute(&resolve_expression(expression), json)
        }
        Commands::Next {
            expression,
            count,
            from,
        } => {
            next::execute(
                &resolve_expression(expression),
                count.unwrap_or(config.default_count),
                from.as_deref(),
                json,
            )?;
            Ok(true)
        }
        Commands::Presets => {
            presets::execute(json)?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_expression_joins_words() {
        let words: Vec<String> = ["0", "9", "*", "*", "1-5"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(resolve_expression(&words), "0 9 * * 1-5");
    }

    #[test]
    fn test_resolve_expression_expands_presets() {
        assert_eq!(resolve_expression(&["@Hourly".to_string()]), "0 * * * *");
    }

    #[test]
    fn test_cli_parses_next() {
        let cli = Cli::try_parse_from([
            "cronexpr", "--json", "next", "*/5", "*", "*", "*", "*", "-n", "3",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Next {
                expression, count, ..
            } => {
                assert_eq!(expression.len(), 5);
                assert_eq!(count, Some(3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_requires_expression() {
        assert!(Cli::try_parse_from(["cronexpr", "explain"]).is_err());
    }
}
