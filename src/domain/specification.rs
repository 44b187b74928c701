//! Estimation specifications
//!
//! The native, method-specific settings attached to each SA item. Two
//! families are exported as requests: X-13 ([`X13Specification`]) and
//! TRAMO-SEATS ([`TramoSeatsSpecification`]). Items configured with any other
//! method carry [`EstimationSpec::Other`] and are never exported.

use super::series::TsPeriod;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime family of an estimation specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecFamily {
    X13,
    TramoSeats,
    Other,
}

impl fmt::Display for SpecFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X13 => f.write_str("x13"),
            Self::TramoSeats => f.write_str("tramoseats"),
            Self::Other => f.write_str("other"),
        }
    }
}

/// Estimation specification of an SA item, tagged by method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum EstimationSpec {
    X13(X13Specification),
    TramoSeats(TramoSeatsSpecification),
    /// A method without a request schema (e.g. a plug-in)
    Other { name: String },
}

impl EstimationSpec {
    pub fn family(&self) -> SpecFamily {
        match self {
            Self::X13(_) => SpecFamily::X13,
            Self::TramoSeats(_) => SpecFamily::TramoSeats,
            Self::Other { .. } => SpecFamily::Other,
        }
    }
}

impl From<X13Specification> for EstimationSpec {
    fn from(spec: X13Specification) -> Self {
        Self::X13(spec)
    }
}

impl From<TramoSeatsSpecification> for EstimationSpec {
    fn from(spec: TramoSeatsSpecification) -> Self {
        Self::TramoSeats(spec)
    }
}

/// Part of the series used for estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpanSelector {
    #[default]
    All,
    From { start: TsPeriod },
    To { end: TsPeriod },
    Between { start: TsPeriod, end: TsPeriod },
    First { n: u32 },
    Last { n: u32 },
    Excluding { first: u32, last: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransformFunction {
    None,
    Log,
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TradingDaysType {
    #[default]
    None,
    TradingDays,
    WorkingDays,
}

/// Calendar effects and user-defined regressors
///
/// `holidays` names a calendar of the processing context; `user_variables`
/// hold `group.variable` references into its variable groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegressionSpec {
    #[serde(default)]
    pub trading_days: TradingDaysType,
    #[serde(default)]
    pub holidays: Option<String>,
    #[serde(default)]
    pub easter: bool,
    #[serde(default)]
    pub user_variables: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutlierType {
    AO,
    LS,
    TC,
    SO,
}

impl OutlierType {
    pub fn code(self) -> &'static str {
        match self {
            Self::AO => "AO",
            Self::LS => "LS",
            Self::TC => "TC",
            Self::SO => "SO",
        }
    }
}

/// Automatic outlier detection; a critical value of 0 lets the method choose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierSpec {
    pub types: Vec<OutlierType>,
    #[serde(default)]
    pub critical_value: f64,
}

impl Default for OutlierSpec {
    fn default() -> Self {
        Self {
            types: vec![OutlierType::AO, OutlierType::LS, OutlierType::TC],
            critical_value: 0.0,
        }
    }
}

/// Seasonal ARIMA model; orders are ignored when `automatic` is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArimaSpec {
    pub automatic: bool,
    pub p: u32,
    pub d: u32,
    pub q: u32,
    pub bp: u32,
    pub bd: u32,
    pub bq: u32,
    #[serde(default)]
    pub mean: bool,
}

impl ArimaSpec {
    /// The airline model (0,1,1)(0,1,1)
    pub fn airline() -> Self {
        Self {
            automatic: false,
            p: 0,
            d: 1,
            q: 1,
            bp: 0,
            bd: 1,
            bq: 1,
            mean: false,
        }
    }

    pub fn automatic() -> Self {
        Self {
            automatic: true,
            ..Self::airline()
        }
    }
}

impl Default for ArimaSpec {
    fn default() -> Self {
        Self::automatic()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecompositionMode {
    #[default]
    Undefined,
    Additive,
    Multiplicative,
    LogAdditive,
    PseudoAdditive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SeasonalFilter {
    #[default]
    Msr,
    S3X1,
    S3X3,
    S3X5,
    S3X9,
    S3X15,
    Stable,
    X11Default,
}

/// X-11 decomposition settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct X11Spec {
    pub mode: DecompositionMode,
    pub seasonal_filter: SeasonalFilter,
    /// Henderson filter length, 0 for automatic selection
    pub henderson: u32,
    pub lsigma: f64,
    pub usigma: f64,
    /// Forecasts horizon; negative values count years
    pub forecast_horizon: i32,
}

impl Default for X11Spec {
    fn default() -> Self {
        Self {
            mode: DecompositionMode::Undefined,
            seasonal_filter: SeasonalFilter::Msr,
            henderson: 0,
            lsigma: 1.5,
            usigma: 2.5,
            forecast_horizon: -1,
        }
    }
}

/// X-13 specification (RegARIMA pre-processing + X-11)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct X13Specification {
    #[serde(default)]
    pub span: SpanSelector,
    #[serde(default)]
    pub transform: TransformFunction,
    #[serde(default)]
    pub regression: RegressionSpec,
    #[serde(default)]
    pub outliers: Option<OutlierSpec>,
    #[serde(default)]
    pub arima: ArimaSpec,
    #[serde(default)]
    pub x11: X11Spec,
}

impl X13Specification {
    /// Log/level test, working days, Easter, outliers, automatic model
    pub fn rsa4c() -> Self {
        Self {
            regression: RegressionSpec {
                trading_days: TradingDaysType::WorkingDays,
                easter: true,
                ..RegressionSpec::default()
            },
            outliers: Some(OutlierSpec::default()),
            ..Self::default()
        }
    }

    /// As [`X13Specification::rsa4c`] with trading days instead of working days
    pub fn rsa5c() -> Self {
        let mut spec = Self::rsa4c();
        spec.regression.trading_days = TradingDaysType::TradingDays;
        spec
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApproximationMode {
    None,
    #[default]
    Legacy,
    Noisy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeatsMethod {
    #[default]
    Burman,
    KalmanSmoother,
}

/// SEATS decomposition settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatsSpec {
    pub approximation: ApproximationMode,
    pub xl_boundary: f64,
    pub seasonal_boundary: f64,
    pub trend_boundary: f64,
    pub method: SeatsMethod,
}

impl Default for SeatsSpec {
    fn default() -> Self {
        Self {
            approximation: ApproximationMode::Legacy,
            xl_boundary: 0.95,
            seasonal_boundary: 0.8,
            trend_boundary: 0.5,
            method: SeatsMethod::Burman,
        }
    }
}

/// TRAMO-SEATS specification (TRAMO pre-processing + SEATS)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TramoSeatsSpecification {
    #[serde(default)]
    pub span: SpanSelector,
    #[serde(default)]
    pub transform: TransformFunction,
    #[serde(default)]
    pub regression: RegressionSpec,
    #[serde(default)]
    pub outliers: Option<OutlierSpec>,
    #[serde(default)]
    pub arima: ArimaSpec,
    #[serde(default)]
    pub seats: SeatsSpec,
}

impl TramoSeatsSpecification {
    /// Full automatic pre-processing with trading days and Easter
    pub fn rsafull() -> Self {
        Self {
            regression: RegressionSpec {
                trading_days: TradingDaysType::TradingDays,
                easter: true,
                ..RegressionSpec::default()
            },
            outliers: Some(OutlierSpec::default()),
            ..Self::default()
        }
    }

    /// Working days, Easter and outliers with an automatic model
    pub fn rsa5() -> Self {
        let mut spec = Self::rsafull();
        spec.regression.trading_days = TradingDaysType::WorkingDays;
        spec
    }
}
