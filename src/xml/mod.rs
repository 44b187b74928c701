//! XML-bindable request model
//!
//! Mirrors the native domain model in a form that serializes through
//! `serde` + `quick-xml`. Elements use camelCase names, scalar settings are
//! written as attributes.
//!
//! Native objects are converted with [`XmlRender`]; a conversion fails with
//! [`RequestsError::Rendering`](crate::domain::RequestsError::Rendering)
//! when the native object holds values the schema cannot express.

pub mod context;
pub mod preprocessing;
pub mod requests;
pub mod series;
pub mod tramoseats;
pub mod x13;

use crate::domain::Result;

pub use context::XmlProcessingContext;
pub use requests::{
    RequestSchema, XmlAtomicRequest, XmlOutputFilter, XmlRequests, XmlTramoSeatsRequests,
    XmlX13Requests,
};
pub use series::{XmlTs, XmlTsData};
pub use tramoseats::XmlTramoSeatsSpecification;
pub use x13::XmlX13Specification;

/// Deep copy of a native object into its XML form
pub trait XmlRender<T>: Sized {
    fn render(source: &T) -> Result<Self>;
}
