use sa_requests::cli::{Cli, Commands};
use sa_requests::config::{load_config, RequestsConfig};
use sa_requests::logging::init_logging;
use clap::Parser;
use std::path::Path;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the config file when it loads; errors in it
    // are reported by the command itself
    let config = if Path::new(&cli.config).exists() {
        load_config(&cli.config).unwrap_or_default()
    } else {
        RequestsConfig::default()
    };
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);

    let guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "SA Requests - X-13 / TRAMO-SEATS batch request exporter"
    );

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    // flush the file writer, process::exit skips destructors
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(&cli.config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
