//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::RequestsConfig;
use crate::domain::errors::RequestsError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RequestsConfig
/// 4. Applies environment variable overrides (SAREQ_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use sa_requests::config::loader::load_config;
///
/// let config = load_config("sa-requests.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RequestsConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RequestsError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RequestsError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: RequestsConfig = toml::from_str(&contents)
        .map_err(|e| RequestsError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        RequestsError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| RequestsError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(RequestsError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Splits a comma separated override into trimmed, non-empty names
fn parse_list(val: &str) -> Vec<String> {
    val.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Applies environment variable overrides using SAREQ_* prefix
///
/// Environment variables follow the pattern: SAREQ_<SECTION>_<KEY>
/// For example: SAREQ_OUTPUT_FOLDER, SAREQ_OUTPUT_MATRIX
fn apply_env_overrides(config: &mut RequestsConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("SAREQ_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Output overrides
    if let Ok(val) = std::env::var("SAREQ_OUTPUT_FOLDER") {
        config.output.folder = val;
    }
    if let Ok(val) = std::env::var("SAREQ_OUTPUT_MATRIX") {
        config.output.matrix = Some(parse_list(&val));
    }
    if let Ok(val) = std::env::var("SAREQ_OUTPUT_TS_MATRIX") {
        config.output.ts_matrix = Some(parse_list(&val));
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SAREQ_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SAREQ_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
