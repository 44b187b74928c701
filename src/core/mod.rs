//! Core business logic for SA Requests.
//!
//! # Modules
//!
//! - [`requests`] - Building and writing X-13 / TRAMO-SEATS batch requests
//!
//! # Export Workflow
//!
//! 1. **Select**: keep the items of one specification family, in order
//! 2. **Render**: convert specifications, series and context to their XML form
//! 3. **Filter**: attach the configured output filter (`matrix` then `ts_matrix`)
//! 4. **Write**: serialize the document as indented UTF-8 XML
//!
//! Families without items produce no document and no file.

pub mod requests;
