//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// SA Requests - X-13 / TRAMO-SEATS batch request exporter
#[derive(Parser, Debug)]
#[command(name = "sa-requests")]
#[command(version, about, long_about = None)]
#[command(author = "SA Requests Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "sa-requests.toml", env = "SAREQ_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SAREQ_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the items of a workspace file as XML batch requests
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::export::FamilyArg;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["sa-requests", "export", "--input", "ws.json"]);
        assert_eq!(cli.config, "sa-requests.toml");
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.input.to_str(), Some("ws.json"));
                assert_eq!(args.family, FamilyArg::All);
                assert!(args.output_dir.is_none());
                assert!(!args.verify);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_export_options() {
        let cli = Cli::parse_from([
            "sa-requests",
            "export",
            "-i",
            "ws.json",
            "--output-dir",
            "out",
            "--family",
            "tramoseats",
            "--verify",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.output_dir.as_deref(), Some("out"));
                assert_eq!(args.family, FamilyArg::Tramoseats);
                assert!(args.verify);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_export_requires_input() {
        assert!(Cli::try_parse_from(["sa-requests", "export"]).is_err());
    }

    #[test]
    fn test_cli_parse_with_config_and_level() {
        let cli = Cli::parse_from([
            "sa-requests",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "validate-config",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["sa-requests", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
