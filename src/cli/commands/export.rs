//! Export command implementation
//!
//! Reads a JSON workspace (context + SA items), builds one request document
//! per specification family and writes it to the output folder.

use crate::config::{load_config, RequestsConfig};
use crate::core::requests::{
    build_requests, read_requests, write_requests, RequestFamily, TramoSeatsFamily, X13Family,
};
use crate::domain::{SpecFamily, Workspace};
use anyhow::Context;
use clap::{Args, ValueEnum};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Families selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    All,
    X13,
    Tramoseats,
}

impl FamilyArg {
    fn includes(self, family: SpecFamily) -> bool {
        match self {
            Self::All => true,
            Self::X13 => family == SpecFamily::X13,
            Self::Tramoseats => family == SpecFamily::TramoSeats,
        }
    }
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Workspace file (JSON) holding the context and the SA items
    #[arg(short, long)]
    pub input: PathBuf,

    /// Override the output folder from the configuration
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Family to export
    #[arg(long, value_enum, default_value_t = FamilyArg::All)]
    pub family: FamilyArg,

    /// Read every written file back and check it
    #[arg(long)]
    pub verify: bool,
}

/// What happened to one family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyOutcome {
    /// No item of the family in the workspace
    Skipped,
    Written { path: PathBuf, items: usize },
    Failed { path: PathBuf },
}

impl ExportArgs {
    /// Execute the export command
    ///
    /// A missing configuration file is not an error here: the defaults
    /// (no output filter) are used.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Starting export command");

        let config = if Path::new(config_path).exists() {
            match load_config(config_path) {
                Ok(config) => config,
                Err(e) => {
                    println!("❌ Failed to load configuration file");
                    println!("   Error: {e}");
                    return Ok(2);
                }
            }
        } else {
            tracing::info!(config_path = %config_path, "No configuration file, using defaults");
            RequestsConfig::default()
        };

        let json = fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read workspace {}", self.input.display()))?;
        let workspace = Workspace::from_json(&json)
            .with_context(|| format!("Invalid workspace {}", self.input.display()))?;

        let folder = PathBuf::from(
            self.output_dir
                .clone()
                .unwrap_or_else(|| config.output.folder.clone()),
        );
        fs::create_dir_all(&folder)
            .with_context(|| format!("Failed to create output folder {}", folder.display()))?;

        tracing::info!(
            items = workspace.items.len(),
            folder = %folder.display(),
            "Workspace loaded"
        );

        let mut outcomes = Vec::new();
        if self.family.includes(SpecFamily::X13) {
            outcomes.push((
                SpecFamily::X13,
                export_family::<X13Family>(&config, &workspace, &folder, self.verify)?,
            ));
        }
        if self.family.includes(SpecFamily::TramoSeats) {
            outcomes.push((
                SpecFamily::TramoSeats,
                export_family::<TramoSeatsFamily>(&config, &workspace, &folder, self.verify)?,
            ));
        }

        println!("📦 Export summary");
        let mut failed = false;
        for (family, outcome) in &outcomes {
            match outcome {
                FamilyOutcome::Skipped => println!("  {family}: no item"),
                FamilyOutcome::Written { path, items } => {
                    println!("  ✅ {family}: {items} item(s) -> {}", path.display())
                }
                FamilyOutcome::Failed { path } => {
                    failed = true;
                    println!("  ❌ {family}: failed to write {}", path.display())
                }
            }
        }

        Ok(if failed { 1 } else { 0 })
    }
}

/// File name of a family's request document
pub fn requests_file_name(family: SpecFamily) -> String {
    format!("{family}_requests.xml")
}

/// Builds, writes and optionally verifies the document of family `F`
///
/// # Errors
///
/// Rendering errors are returned; write and verification failures become
/// [`FamilyOutcome::Failed`].
pub fn export_family<F>(
    config: &RequestsConfig,
    workspace: &Workspace,
    folder: &Path,
    verify: bool,
) -> anyhow::Result<FamilyOutcome>
where
    F: RequestFamily,
    F::XmlSpec: DeserializeOwned,
{
    let Some(requests) = build_requests::<F>(&config.output, &workspace.items, &workspace.context)
        .with_context(|| format!("Failed to build {} requests", F::FAMILY))?
    else {
        return Ok(FamilyOutcome::Skipped);
    };

    let path = folder.join(requests_file_name(F::FAMILY));
    if !write_requests(&path, &requests) {
        return Ok(FamilyOutcome::Failed { path });
    }

    if verify {
        match read_requests::<F::XmlSpec>(&path) {
            Ok(back) if back.len() == requests.len() && back.filters() == requests.filters() => {
                tracing::debug!(path = %path.display(), "Verified written requests");
            }
            Ok(back) => {
                tracing::error!(
                    path = %path.display(),
                    expected = requests.len(),
                    found = back.len(),
                    "Written requests do not match"
                );
                return Ok(FamilyOutcome::Failed { path });
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Cannot read back requests");
                return Ok(FamilyOutcome::Failed { path });
            }
        }
    }

    Ok(FamilyOutcome::Written {
        path,
        items: requests.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SaItem, TramoSeatsSpecification, Ts, X13Specification};
    use tempfile::TempDir;

    fn workspace() -> Workspace {
        Workspace {
            items: vec![
                SaItem::new(X13Specification::rsa4c(), Ts::new("a")),
                SaItem::new(X13Specification::rsa5c(), Ts::new("b")),
            ]
            .into(),
            ..Workspace::default()
        }
    }

    #[test]
    fn test_requests_file_name() {
        assert_eq!(requests_file_name(SpecFamily::X13), "x13_requests.xml");
        assert_eq!(
            requests_file_name(SpecFamily::TramoSeats),
            "tramoseats_requests.xml"
        );
    }

    #[test]
    fn test_family_arg_includes() {
        assert!(FamilyArg::All.includes(SpecFamily::TramoSeats));
        assert!(FamilyArg::X13.includes(SpecFamily::X13));
        assert!(!FamilyArg::X13.includes(SpecFamily::TramoSeats));
        assert!(!FamilyArg::Tramoseats.includes(SpecFamily::X13));
    }

    #[test]
    fn test_export_family_written_and_skipped() {
        let dir = TempDir::new().unwrap();
        let config = RequestsConfig::default();
        let workspace = workspace();

        let x13 = export_family::<X13Family>(&config, &workspace, dir.path(), true).unwrap();
        assert_eq!(
            x13,
            FamilyOutcome::Written {
                path: dir.path().join("x13_requests.xml"),
                items: 2
            }
        );

        let ts =
            export_family::<TramoSeatsFamily>(&config, &workspace, dir.path(), true).unwrap();
        assert_eq!(ts, FamilyOutcome::Skipped);
        assert!(!dir.path().join("tramoseats_requests.xml").exists());
    }

    #[test]
    fn test_export_family_write_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let config = RequestsConfig::default();

        let outcome = export_family::<X13Family>(&config, &workspace(), &missing, false).unwrap();
        assert!(matches!(outcome, FamilyOutcome::Failed { .. }));
    }

    #[test]
    fn test_execute_writes_both_families() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace();
        ws.items
            .add(SaItem::new(TramoSeatsSpecification::rsafull(), Ts::new("c")));
        let input = dir.path().join("ws.json");
        fs::write(&input, serde_json::to_string(&ws).unwrap()).unwrap();

        let out = dir.path().join("out");
        let args = ExportArgs {
            input,
            output_dir: Some(out.to_string_lossy().to_string()),
            family: FamilyArg::All,
            verify: true,
        };
        let code = args
            .execute(&dir.path().join("none.toml").to_string_lossy())
            .unwrap();
        assert_eq!(code, 0);
        assert!(out.join("x13_requests.xml").exists());
        assert!(out.join("tramoseats_requests.xml").exists());
    }

    #[test]
    fn test_execute_invalid_workspace_is_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("ws.json");
        fs::write(&input, "{ broken").unwrap();

        let args = ExportArgs {
            input,
            output_dir: Some(dir.path().to_string_lossy().to_string()),
            family: FamilyArg::X13,
            verify: false,
        };
        assert!(args
            .execute(&dir.path().join("none.toml").to_string_lossy())
            .is_err());
    }
}
