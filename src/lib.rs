//! # SA Requests - X-13 / TRAMO-SEATS batch request exporter
//!
//! Turns a seasonal adjustment processing (an ordered list of items, each
//! pairing a time series with an estimation specification) into XML batch
//! request documents for an external seasonal adjustment engine.
//!
//! ## Overview
//!
//! - Items are split by specification family: X-13 items go to one
//!   document, TRAMO-SEATS items to another. Items of any other method are
//!   ignored.
//! - Each document carries the processing context (calendars and user
//!   variables) and an output filter naming the diagnostics and series the
//!   engine should return.
//! - A family without items produces no document at all.
//!
//! ## Architecture
//!
//! - [`domain`] - Series, specifications, context and processing types
//! - [`xml`] - Serializable XML model and the rendering of domain values
//! - [`core`] - Building and writing request documents
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface and argument parsing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sa_requests::config::OutputConfig;
//! use sa_requests::core::requests::{create_x13_requests, write_requests};
//! use sa_requests::domain::{ProcessingContext, SaItem, SaProcessing, Ts, X13Specification};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut processing = SaProcessing::new();
//! processing.add(SaItem::new(X13Specification::rsa4c(), Ts::new("exports")));
//!
//! let config = OutputConfig {
//!     matrix: Some(vec!["likelihood.aic".to_string()]),
//!     ..OutputConfig::default()
//! };
//!
//! if let Some(doc) = create_x13_requests(&config, &processing, &ProcessingContext::default())? {
//!     if !write_requests("x13_requests.xml", &doc) {
//!         eprintln!("write failed");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], whose error is
//! [`domain::RequestsError`]. The writer is the exception: [`core::requests::write_requests`]
//! reports success as a boolean and logs the cause of a failure.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod xml;
