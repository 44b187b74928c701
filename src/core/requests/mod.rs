//! Batch request export
//!
//! Turns a processing into one XML request document per specification
//! family and writes it to disk.
//!
//! - [`build_requests`] selects the items of a family and renders them,
//!   returning `None` when the family has no item
//! - [`write_requests`] writes a document and reports success as a boolean
//!
//! ```rust,no_run
//! use sa_requests::config::OutputConfig;
//! use sa_requests::core::requests::{create_x13_requests, write_requests};
//! use sa_requests::domain::{ProcessingContext, SaProcessing};
//!
//! # fn example(processing: &SaProcessing) -> Result<(), Box<dyn std::error::Error>> {
//! let config = OutputConfig::default();
//! if let Some(doc) = create_x13_requests(&config, processing, &ProcessingContext::default())? {
//!     if !write_requests("output/x13_requests.xml", &doc) {
//!         eprintln!("X-13 requests not written");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod family;
pub mod writer;

pub use builder::{build_requests, create_tramoseats_requests, create_x13_requests, fill_filter};
pub use family::{RequestFamily, TramoSeatsFamily, X13Family};
pub use writer::{
    from_xml_str, read_requests, to_xml_string, try_write_requests, write_requests,
};
