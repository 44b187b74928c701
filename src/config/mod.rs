//! Configuration management for SA Requests.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SAREQ_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [output]
//! folder = "${SAREQ_HOME}/requests"
//! matrix = ["span.start", "span.end", "likelihood.aic"]
//! ts_matrix = ["sa", "s", "t"]
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sa_requests::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("sa-requests.toml")?;
//! println!("Output folder: {}", config.output.folder);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, LoggingConfig, OutputConfig, RequestsConfig};
