// rulebench/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use rulebench_core::domain::rule::ConditionType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rulebench")]
#[command(about = "Author, manage and dry-run business rules against a rules service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding rulebench.yaml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    /// Rules service base URL, including the /api prefix (overrides config and env)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📚 Lists the rules known to the service
    List {
        /// Only show active rules
        #[arg(long)]
        active_only: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// ✏️ Creates a rule
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Create the rule switched off
        #[arg(long)]
        inactive: bool,

        /// expression | json
        #[arg(long, default_value = "expression")]
        condition_type: ConditionType,

        #[arg(long)]
        condition: String,
    },

    /// 🛠️ Updates fields of an existing rule (unset flags keep their value)
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        active: Option<bool>,

        /// expression | json
        #[arg(long)]
        condition_type: Option<ConditionType>,

        #[arg(long)]
        condition: Option<String>,
    },

    /// 🗑️ Deletes a rule
    Delete { id: String },

    /// 🚀 Runs active rules against a JSON payload
    Execute {
        /// Inline JSON payload
        #[arg(long, conflicts_with = "payload_file", required_unless_present = "payload_file")]
        payload: Option<String>,

        /// Read the payload from a file ('-' for stdin)
        #[arg(long)]
        payload_file: Option<PathBuf>,

        /// Restrict execution to these rule ids (repeatable). Defaults to every active rule.
        #[arg(long = "rule")]
        rules: Vec<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Exit with error if any rule failed
        #[arg(long)]
        check: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_list_defaults() -> Result<()> {
        let args = Cli::parse_from(["rulebench", "list"]);
        assert_eq!(args.config_dir.to_string_lossy(), ".");
        assert_eq!(args.base_url, None);
        match args.command {
            Commands::List {
                active_only,
                format,
            } => {
                assert!(!active_only);
                assert_eq!(format, OutputFormat::Table);
                Ok(())
            }
            _ => bail!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() -> Result<()> {
        let args = Cli::parse_from([
            "rulebench",
            "list",
            "--base-url",
            "http://rules.local/api",
            "--format",
            "json",
        ]);
        assert_eq!(args.base_url.as_deref(), Some("http://rules.local/api"));
        match args.command {
            Commands::List { format, .. } => {
                assert_eq!(format, OutputFormat::Json);
                Ok(())
            }
            _ => bail!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parse_create() -> Result<()> {
        let args = Cli::parse_from([
            "rulebench",
            "create",
            "--name",
            "R1",
            "--condition",
            "x > 0",
            "--condition-type",
            "json",
            "--inactive",
        ]);
        match args.command {
            Commands::Create {
                name,
                description,
                inactive,
                condition_type,
                condition,
            } => {
                assert_eq!(name, "R1");
                assert_eq!(description, None);
                assert!(inactive);
                assert_eq!(condition_type, ConditionType::Json);
                assert_eq!(condition, "x > 0");
                Ok(())
            }
            _ => bail!("Expected Create command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_condition_type() {
        let result = Cli::try_parse_from([
            "rulebench",
            "create",
            "--name",
            "R1",
            "--condition",
            "x",
            "--condition-type",
            "sql",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_update_partial() -> Result<()> {
        let args = Cli::parse_from(["rulebench", "update", "r-1", "--active", "false"]);
        match args.command {
            Commands::Update {
                id, name, active, ..
            } => {
                assert_eq!(id, "r-1");
                assert_eq!(name, None);
                assert_eq!(active, Some(false));
                Ok(())
            }
            _ => bail!("Expected Update command"),
        }
    }

    #[test]
    fn test_cli_parse_execute() -> Result<()> {
        let args = Cli::parse_from([
            "rulebench",
            "execute",
            "--payload",
            "{}",
            "--rule",
            "a",
            "--rule",
            "b",
            "--check",
        ]);
        match args.command {
            Commands::Execute {
                payload,
                payload_file,
                rules,
                check,
                ..
            } => {
                assert_eq!(payload.as_deref(), Some("{}"));
                assert_eq!(payload_file, None);
                assert_eq!(rules, vec!["a", "b"]);
                assert!(check);
                Ok(())
            }
            _ => bail!("Expected Execute command"),
        }
    }

    #[test]
    fn test_cli_execute_requires_exactly_one_payload_source() {
        assert!(Cli::try_parse_from(["rulebench", "execute"]).is_err());
        assert!(
            Cli::try_parse_from([
                "rulebench",
                "execute",
                "--payload",
                "{}",
                "--payload-file",
                "p.json"
            ])
            .is_err()
        );
    }
}
