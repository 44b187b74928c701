//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Human-readable console output
//! - Optional JSON log file with daily or hourly rotation
//!
//! # Example
//!
//! ```no_run
//! use sa_requests::logging::init_logging;
//! use sa_requests::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(family = "x13", items = 12, "Requests built");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
