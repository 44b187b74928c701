//! Domain models and types for SA Requests.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Time series** ([`Ts`], [`TsData`], [`TsPeriod`], [`TsFrequency`])
//! - **Estimation specifications** ([`X13Specification`], [`TramoSeatsSpecification`]),
//!   tagged by [`EstimationSpec`] / [`SpecFamily`]
//! - **Processing** ([`SaItem`], [`SaProcessing`], [`ProcessingContext`], [`Workspace`])
//! - **Error types** ([`RequestsError`]) and the [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use sa_requests::domain::{SaItem, SaProcessing, SpecFamily, Ts, X13Specification};
//!
//! let mut processing = SaProcessing::new();
//! processing.add(SaItem::new(X13Specification::rsa4c(), Ts::new("exports")));
//! assert_eq!(processing.count(SpecFamily::X13), 1);
//! ```

pub mod context;
pub mod errors;
pub mod processing;
pub mod result;
pub mod series;
pub mod specification;

// Re-export commonly used types for convenience
pub use context::{CalendarDefinition, Holiday, ProcessingContext};
pub use errors::RequestsError;
pub use processing::{SaItem, SaProcessing, Workspace};
pub use result::Result;
pub use series::{Ts, TsData, TsFrequency, TsPeriod};
pub use specification::{
    ApproximationMode, ArimaSpec, DecompositionMode, EstimationSpec, OutlierSpec, OutlierType,
    RegressionSpec, SeasonalFilter, SeatsMethod, SeatsSpec, SpanSelector, SpecFamily,
    TradingDaysType, TramoSeatsSpecification, TransformFunction, X11Spec, X13Specification,
};
