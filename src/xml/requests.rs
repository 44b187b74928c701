//! Batch request documents
//!
//! One document type per specification family, sharing the generic shape
//! [`XmlRequests`]: a context, an output filter and the atomic requests.

use super::context::XmlProcessingContext;
use super::series::XmlTs;
use super::tramoseats::XmlTramoSeatsSpecification;
use super::x13::XmlX13Specification;
use serde::{Deserialize, Serialize};

/// Root element binding of a request document, per specification type
pub trait RequestSchema {
    /// Name of the document root element
    const ROOT: &'static str;
    /// Default namespace declared on the root element
    const NAMESPACE: &'static str;
}

/// A rendered (specification, series) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlAtomicRequest<S> {
    pub specification: S,
    pub series: XmlTs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct XmlOutputFilter {
    #[serde(rename = "filter", default)]
    pub filters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlItems<S> {
    #[serde(rename = "item", default = "Vec::new")]
    pub items: Vec<XmlAtomicRequest<S>>,
}

impl<S> Default for XmlItems<S> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Request document for one specification family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlRequests<S> {
    #[serde(rename = "@xmlns", default)]
    pub namespace: String,

    #[serde(default)]
    pub context: XmlProcessingContext,

    #[serde(rename = "outputFilter", default)]
    pub output_filter: XmlOutputFilter,

    #[serde(default = "XmlItems::default")]
    pub items: XmlItems<S>,
}

pub type XmlX13Requests = XmlRequests<XmlX13Specification>;
pub type XmlTramoSeatsRequests = XmlRequests<XmlTramoSeatsSpecification>;

impl<S: RequestSchema> XmlRequests<S> {
    /// Empty document carrying the family namespace
    pub fn new() -> Self {
        Self {
            namespace: S::NAMESPACE.to_string(),
            context: XmlProcessingContext::default(),
            output_filter: XmlOutputFilter::default(),
            items: XmlItems::default(),
        }
    }
}

impl<S: RequestSchema> Default for XmlRequests<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> XmlRequests<S> {
    /// Appends an atomic request
    pub fn push(&mut self, request: XmlAtomicRequest<S>) {
        self.items.items.push(request);
    }

    /// Atomic requests in insertion order
    pub fn requests(&self) -> &[XmlAtomicRequest<S>] {
        &self.items.items
    }

    /// Number of atomic requests
    pub fn len(&self) -> usize {
        self.items.items.len()
    }

    /// True when the document holds no request
    pub fn is_empty(&self) -> bool {
        self.items.items.is_empty()
    }

    /// Output filter entries, `matrix` names first
    pub fn filters(&self) -> &[String] {
        &self.output_filter.filters
    }

    /// Mutable access to the output filter
    pub fn filters_mut(&mut self) -> &mut Vec<String> {
        &mut self.output_filter.filters
    }
}
