//! XML form of time series

use super::XmlRender;
use crate::domain::{RequestsError, Result, Ts, TsData, TsFrequency, TsPeriod};
use serde::{Deserialize, Serialize};

/// `<series name="..">` with optional moniker, metadata and observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlTs {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moniker: Option<String>,

    #[serde(rename = "metaData", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<XmlMetaData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<XmlTsData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct XmlMetaData {
    #[serde(rename = "property", default)]
    pub properties: Vec<XmlProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlProperty {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

/// Observations as a whitespace separated list; `NaN` marks a missing value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlTsData {
    #[serde(rename = "@freq")]
    pub frequency: u32,
    #[serde(rename = "@firstYear")]
    pub first_year: i32,
    /// One-based
    #[serde(rename = "@firstPeriod")]
    pub first_period: u32,
    pub values: String,
}

impl XmlTsData {
    /// Parses the observation list back into numbers
    pub fn parse_values(&self) -> Result<Vec<f64>> {
        self.values
            .split_whitespace()
            .map(|v| {
                v.parse::<f64>().map_err(|e| {
                    RequestsError::Serialization(format!("Invalid observation '{v}': {e}"))
                })
            })
            .collect()
    }
}

impl XmlRender<Ts> for XmlTs {
    fn render(ts: &Ts) -> Result<Self> {
        let metadata = (!ts.metadata.is_empty()).then(|| XmlMetaData {
            properties: ts
                .metadata
                .iter()
                .map(|(name, value)| XmlProperty {
                    name: name.clone(),
                    value: value.clone(),
                })
                .collect(),
        });

        let data = match &ts.data {
            Some(data) => Some(render_data(data).map_err(|e| {
                RequestsError::rendering(format!("series '{}'", ts.name), e)
            })?),
            None => None,
        };

        Ok(Self {
            name: ts.name.clone(),
            moniker: ts.moniker.clone(),
            metadata,
            data,
        })
    }
}

fn render_data(data: &TsData) -> Result<XmlTsData> {
    data.start.check()?;
    let values = data
        .values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(XmlTsData {
        frequency: data.start.frequency.periods_per_year(),
        first_year: data.start.year,
        first_period: data.start.position + 1,
        values,
    })
}

impl XmlTs {
    /// Converts back to the native series
    pub fn to_ts(&self) -> Result<Ts> {
        let mut ts = Ts::new(self.name.clone());
        ts.moniker = self.moniker.clone();
        if let Some(metadata) = &self.metadata {
            for p in &metadata.properties {
                ts.metadata.insert(p.name.clone(), p.value.clone());
            }
        }
        if let Some(data) = &self.data {
            let frequency = TsFrequency::from_periods_per_year(data.frequency).ok_or_else(|| {
                RequestsError::Serialization(format!("Invalid frequency: {}", data.frequency))
            })?;
            let position = data.first_period.checked_sub(1).ok_or_else(|| {
                RequestsError::Serialization("firstPeriod must be one-based".to_string())
            })?;
            let start = TsPeriod::new(frequency, data.first_year, position)?;
            ts.data = Some(TsData::new(start, data.parse_values()?));
        }
        Ok(ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ts {
        Ts::new("b1")
            .with_moniker("demetra://b1")
            .with_metadata("source", "nbb")
            .with_data(TsData::new(
                TsPeriod::month(2019, 11).unwrap(),
                vec![100.5, f64::NAN, 98.0],
            ))
    }

    #[test]
    fn test_render_series() {
        let xts = XmlTs::render(&sample()).unwrap();
        assert_eq!(xts.name, "b1");
        assert_eq!(xts.moniker.as_deref(), Some("demetra://b1"));
        assert_eq!(xts.metadata.as_ref().unwrap().properties.len(), 1);

        let data = xts.data.as_ref().unwrap();
        assert_eq!(data.frequency, 12);
        assert_eq!(data.first_year, 2019);
        assert_eq!(data.first_period, 11);
        assert_eq!(data.values, "100.5 NaN 98");
    }

    #[test]
    fn test_render_without_data_or_metadata() {
        let xts = XmlTs::render(&Ts::new("empty")).unwrap();
        assert!(xts.data.is_none());
        assert!(xts.metadata.is_none());
    }

    #[test]
    fn test_render_rejects_invalid_period() {
        let mut ts = sample();
        if let Some(data) = ts.data.as_mut() {
            data.start.position = 12;
        }
        let err = XmlTs::render(&ts).unwrap_err();
        assert!(matches!(err, RequestsError::Rendering(_)));
        assert!(err.to_string().contains("b1"));
    }

    #[test]
    fn test_to_ts_restores_missing_values() {
        let ts = XmlTs::render(&sample()).unwrap().to_ts().unwrap();
        let values = &ts.data.as_ref().unwrap().values;
        assert_eq!(values.len(), 3);
        assert!(values[1].is_nan());
        assert_eq!(ts.metadata.get("source").map(String::as_str), Some("nbb"));
    }
}
