//! Time series domain model
//!
//! A [`Ts`] is a named, optionally monikered series with free-form metadata
//! and regularly spaced observations ([`TsData`]).

use super::errors::RequestsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Periodicity of a regular time series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TsFrequency {
    Yearly,
    HalfYearly,
    QuadriMonthly,
    Quarterly,
    BiMonthly,
    Monthly,
}

impl TsFrequency {
    /// Number of periods in one year
    pub fn periods_per_year(self) -> u32 {
        match self {
            Self::Yearly => 1,
            Self::HalfYearly => 2,
            Self::QuadriMonthly => 3,
            Self::Quarterly => 4,
            Self::BiMonthly => 6,
            Self::Monthly => 12,
        }
    }

    /// Looks up a frequency by its number of periods per year
    pub fn from_periods_per_year(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::Yearly),
            2 => Some(Self::HalfYearly),
            3 => Some(Self::QuadriMonthly),
            4 => Some(Self::Quarterly),
            6 => Some(Self::BiMonthly),
            12 => Some(Self::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for TsFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yearly => "yearly",
            Self::HalfYearly => "half_yearly",
            Self::QuadriMonthly => "quadri_monthly",
            Self::Quarterly => "quarterly",
            Self::BiMonthly => "bi_monthly",
            Self::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

impl FromStr for TsFrequency {
    type Err = RequestsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yearly" | "annual" => Ok(Self::Yearly),
            "half_yearly" | "halfyearly" => Ok(Self::HalfYearly),
            "quadri_monthly" | "quadrimonthly" => Ok(Self::QuadriMonthly),
            "quarterly" => Ok(Self::Quarterly),
            "bi_monthly" | "bimonthly" => Ok(Self::BiMonthly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(RequestsError::Validation(format!(
                "Invalid frequency: {s}"
            ))),
        }
    }
}

/// A period of a regular series: `position` is zero-based within `year`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TsPeriod {
    pub frequency: TsFrequency,
    pub year: i32,
    pub position: u32,
}

impl TsPeriod {
    /// Creates a period, rejecting positions outside the year
    pub fn new(frequency: TsFrequency, year: i32, position: u32) -> Result<Self, RequestsError> {
        let period = Self {
            frequency,
            year,
            position,
        };
        period.check()?;
        Ok(period)
    }

    /// Creates a monthly period from a one-based month
    pub fn month(year: i32, month: u32) -> Result<Self, RequestsError> {
        Self::new(TsFrequency::Monthly, year, month.wrapping_sub(1))
    }

    /// Creates a quarterly period from a one-based quarter
    pub fn quarter(year: i32, quarter: u32) -> Result<Self, RequestsError> {
        Self::new(TsFrequency::Quarterly, year, quarter.wrapping_sub(1))
    }

    /// Verifies that the position fits the frequency
    ///
    /// Periods can be deserialized without going through [`TsPeriod::new`],
    /// so renderers call this before trusting one.
    pub fn check(&self) -> Result<(), RequestsError> {
        if self.position >= self.frequency.periods_per_year() {
            return Err(RequestsError::Validation(format!(
                "period position {} out of range for {} frequency",
                self.position, self.frequency
            )));
        }
        Ok(())
    }

    /// Returns the period `n` steps after this one
    pub fn plus(&self, n: usize) -> Self {
        let freq = self.frequency.periods_per_year() as i64;
        let idx = self.year as i64 * freq + self.position as i64 + n as i64;
        Self {
            frequency: self.frequency,
            year: idx.div_euclid(freq) as i32,
            position: idx.rem_euclid(freq) as u32,
        }
    }
}

impl fmt::Display for TsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frequency {
            TsFrequency::Yearly => write!(f, "{}", self.year),
            TsFrequency::Monthly => write!(f, "{}-{:02}", self.year, self.position + 1),
            TsFrequency::Quarterly => write!(f, "{}-Q{}", self.year, self.position + 1),
            _ => write!(
                f,
                "{}-{}/{}",
                self.year,
                self.position + 1,
                self.frequency.periods_per_year()
            ),
        }
    }
}

/// Regular observations starting at `start`; `NaN` marks a missing value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsData {
    pub start: TsPeriod,
    pub values: Vec<f64>,
}

impl TsData {
    pub fn new(start: TsPeriod, values: Vec<f64>) -> Self {
        Self { start, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Last period covered, `None` for an empty series
    pub fn end(&self) -> Option<TsPeriod> {
        self.values.len().checked_sub(1).map(|n| self.start.plus(n))
    }
}

/// A named time series
///
/// # Examples
///
/// ```
/// use sa_requests::domain::{Ts, TsData, TsPeriod};
///
/// let start = TsPeriod::month(2020, 1).unwrap();
/// let ts = Ts::new("imports")
///     .with_moniker("demetra://imports")
///     .with_metadata("source", "customs")
///     .with_data(TsData::new(start, vec![1.0, 2.0, f64::NAN]));
/// assert_eq!(ts.data.as_ref().map(|d| d.len()), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ts {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moniker: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<TsData>,
}

impl Ts {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            moniker: None,
            metadata: BTreeMap::new(),
            data: None,
        }
    }

    pub fn with_moniker(mut self, moniker: impl Into<String>) -> Self {
        self.moniker = Some(moniker.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_data(mut self, data: TsData) -> Self {
        self.data = Some(data);
        self
    }
}
