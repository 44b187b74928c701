//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "sa-requests.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing SA requests configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your output filter", self.output);
                println!("  2. Validate configuration: sa-requests validate-config");
                println!("  3. Export a workspace: sa-requests export --input workspace.json");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Sample configuration written by `init`
    pub fn sample_config() -> &'static str {
        r#"# SA Requests Configuration File
# X-13 / TRAMO-SEATS batch request exporter

[application]
# trace, debug, info, warn, error
log_level = "info"

[output]
# Folder receiving x13_requests.xml and tramoseats_requests.xml
folder = "output"

# Diagnostics returned for every request (optional)
matrix = ["span.start", "span.end", "likelihood.aic", "arima"]

# Series returned for every request (optional)
ts_matrix = ["y", "sa", "t", "s", "i"]

[logging]
local_enabled = false
local_path = "logs"
# daily or hourly
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sa-requests.toml");
        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().unwrap(), 0);

        let config = load_config(&path).unwrap();
        assert_eq!(config.output.folder, "output");
        assert_eq!(config.output.ts_matrix.as_ref().map(Vec::len), Some(5));
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sa-requests.toml");
        fs::write(&path, "keep").unwrap();

        let mut args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep");

        args.force = true;
        assert_eq!(args.execute().unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[output]"));
    }
}
