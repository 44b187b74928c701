//! SA items and processings

use super::context::ProcessingContext;
use super::series::Ts;
use super::specification::{EstimationSpec, SpecFamily};
use serde::{Deserialize, Serialize};

/// One unit of seasonal adjustment work: a series and its specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaItem {
    pub name: String,
    pub spec: EstimationSpec,
    pub ts: Ts,
}

impl SaItem {
    /// Creates an item named after its series
    pub fn new(spec: impl Into<EstimationSpec>, ts: Ts) -> Self {
        Self {
            name: ts.name.clone(),
            spec: spec.into(),
            ts,
        }
    }

    pub fn family(&self) -> SpecFamily {
        self.spec.family()
    }
}

/// Ordered collection of SA items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SaProcessing {
    items: Vec<SaItem>,
}

impl SaProcessing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: SaItem) {
        self.items.push(item);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SaItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items of the given family
    pub fn count(&self, family: SpecFamily) -> usize {
        self.items.iter().filter(|i| i.family() == family).count()
    }
}

impl From<Vec<SaItem>> for SaProcessing {
    fn from(items: Vec<SaItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<SaItem> for SaProcessing {
    fn from_iter<I: IntoIterator<Item = SaItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SaProcessing {
    type Item = &'a SaItem;
    type IntoIter = std::slice::Iter<'a, SaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A processing with its context, as read from a JSON workspace file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Workspace {
    #[serde(default)]
    pub context: ProcessingContext,
    #[serde(default)]
    pub items: SaProcessing,
}

impl Workspace {
    pub fn from_json(json: &str) -> crate::domain::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::specification::{TramoSeatsSpecification, X13Specification};

    #[test]
    fn test_processing_counts_by_family() {
        let processing: SaProcessing = vec![
            SaItem::new(X13Specification::rsa4c(), Ts::new("a")),
            SaItem::new(TramoSeatsSpecification::rsafull(), Ts::new("b")),
            SaItem::new(X13Specification::rsa5c(), Ts::new("c")),
        ]
        .into_iter()
        .collect();

        assert_eq!(processing.len(), 3);
        assert_eq!(processing.count(SpecFamily::X13), 2);
        assert_eq!(processing.count(SpecFamily::TramoSeats), 1);
        assert_eq!(processing.count(SpecFamily::Other), 0);
    }

    #[test]
    fn test_workspace_from_json() {
        let json = r#"{
            "items": [
                { "name": "a", "spec": { "method": "x13" }, "ts": { "name": "a" } },
                { "name": "b", "spec": { "method": "other", "name": "stl" }, "ts": { "name": "b" } }
            ]
        }"#;
        let workspace = Workspace::from_json(json).unwrap();
        assert!(workspace.context.is_empty());
        assert_eq!(workspace.items.len(), 2);
        assert_eq!(workspace.items.count(SpecFamily::Other), 1);
    }

    #[test]
    fn test_workspace_invalid_json() {
        assert!(Workspace::from_json("{ not json").is_err());
    }
}
