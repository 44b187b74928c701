//! Specification families exported as batch requests

use crate::domain::{EstimationSpec, SpecFamily, TramoSeatsSpecification, X13Specification};
use crate::xml::{RequestSchema, XmlRender, XmlTramoSeatsSpecification, XmlX13Specification};
use serde::Serialize;

/// Binds a specification family to its native and XML specification types
///
/// [`build_requests`](super::build_requests) is written once against this
/// trait; each family only says how to recognise its specification and
/// which XML type renders it.
pub trait RequestFamily {
    /// Runtime tag matched against each item
    const FAMILY: SpecFamily;

    /// Native specification type
    type Spec;

    /// Rendered specification; also fixes the document root element
    type XmlSpec: XmlRender<Self::Spec> + RequestSchema + Serialize;

    /// Returns the item's specification if it belongs to this family
    fn select(spec: &EstimationSpec) -> Option<&Self::Spec>;
}

/// X-13 requests
#[derive(Debug, Clone, Copy)]
pub struct X13Family;

impl RequestFamily for X13Family {
    const FAMILY: SpecFamily = SpecFamily::X13;
    type Spec = X13Specification;
    type XmlSpec = XmlX13Specification;

    fn select(spec: &EstimationSpec) -> Option<&X13Specification> {
        match spec {
            EstimationSpec::X13(spec) => Some(spec),
            _ => None,
        }
    }
}

/// TRAMO-SEATS requests
#[derive(Debug, Clone, Copy)]
pub struct TramoSeatsFamily;

impl RequestFamily for TramoSeatsFamily {
    const FAMILY: SpecFamily = SpecFamily::TramoSeats;
    type Spec = TramoSeatsSpecification;
    type XmlSpec = XmlTramoSeatsSpecification;

    fn select(spec: &EstimationSpec) -> Option<&TramoSeatsSpecification> {
        match spec {
            EstimationSpec::TramoSeats(spec) => Some(spec),
            _ => None,
        }
    }
}
