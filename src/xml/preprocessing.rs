//! XML elements shared by the X-13 and TRAMO-SEATS specifications

use crate::domain::{
    ArimaSpec, OutlierSpec, RegressionSpec, RequestsError, Result, SpanSelector,
    TradingDaysType, TransformFunction,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlSpan {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@start", default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(rename = "@end", default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(rename = "@n0", default, skip_serializing_if = "Option::is_none")]
    pub n0: Option<u32>,
    #[serde(rename = "@n1", default, skip_serializing_if = "Option::is_none")]
    pub n1: Option<u32>,
}

impl XmlSpan {
    fn of(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            start: None,
            end: None,
            n0: None,
            n1: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlRegression {
    #[serde(rename = "tradingDays")]
    pub trading_days: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<String>,
    pub easter: bool,
    #[serde(rename = "userVariable", default)]
    pub user_variables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlOutliers {
    #[serde(rename = "@criticalValue")]
    pub critical_value: f64,
    #[serde(rename = "type", default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlArima {
    #[serde(rename = "@automatic")]
    pub automatic: bool,
    #[serde(rename = "@mean")]
    pub mean: bool,
    #[serde(rename = "@p")]
    pub p: u32,
    #[serde(rename = "@d")]
    pub d: u32,
    #[serde(rename = "@q")]
    pub q: u32,
    #[serde(rename = "@bp")]
    pub bp: u32,
    #[serde(rename = "@bd")]
    pub bd: u32,
    #[serde(rename = "@bq")]
    pub bq: u32,
}

pub(crate) fn render_span(span: &SpanSelector) -> Result<XmlSpan> {
    let xspan = match span {
        SpanSelector::All => XmlSpan::of("All"),
        SpanSelector::From { start } => {
            start.check()?;
            XmlSpan {
                start: Some(start.to_string()),
                ..XmlSpan::of("From")
            }
        }
        SpanSelector::To { end } => {
            end.check()?;
            XmlSpan {
                end: Some(end.to_string()),
                ..XmlSpan::of("To")
            }
        }
        SpanSelector::Between { start, end } => {
            start.check()?;
            end.check()?;
            if start.frequency != end.frequency {
                return Err(RequestsError::Validation(
                    "span bounds must share a frequency".to_string(),
                ));
            }
            if (end.year, end.position) < (start.year, start.position) {
                return Err(RequestsError::Validation(format!(
                    "span end {end} precedes start {start}"
                )));
            }
            XmlSpan {
                start: Some(start.to_string()),
                end: Some(end.to_string()),
                ..XmlSpan::of("Between")
            }
        }
        SpanSelector::First { n } => XmlSpan {
            n0: Some(*n),
            ..XmlSpan::of("First")
        },
        SpanSelector::Last { n } => XmlSpan {
            n1: Some(*n),
            ..XmlSpan::of("Last")
        },
        SpanSelector::Excluding { first, last } => XmlSpan {
            n0: Some(*first),
            n1: Some(*last),
            ..XmlSpan::of("Excluding")
        },
    };
    Ok(xspan)
}

pub(crate) fn render_transform(transform: TransformFunction) -> String {
    match transform {
        TransformFunction::None => "None",
        TransformFunction::Log => "Log",
        TransformFunction::Auto => "Auto",
    }
    .to_string()
}

pub(crate) fn render_regression(regression: &RegressionSpec) -> Result<XmlRegression> {
    for var in &regression.user_variables {
        if var.split_once('.').is_none() {
            return Err(RequestsError::Validation(format!(
                "user variable '{var}' must be written group.name"
            )));
        }
    }
    let trading_days = match regression.trading_days {
        TradingDaysType::None => "None",
        TradingDaysType::TradingDays => "TradingDays",
        TradingDaysType::WorkingDays => "WorkingDays",
    };
    Ok(XmlRegression {
        trading_days: trading_days.to_string(),
        holidays: regression.holidays.clone(),
        easter: regression.easter,
        user_variables: regression.user_variables.clone(),
    })
}

pub(crate) fn render_outliers(outliers: &OutlierSpec) -> Result<XmlOutliers> {
    if outliers.critical_value < 0.0 || !outliers.critical_value.is_finite() {
        return Err(RequestsError::Validation(format!(
            "invalid outlier critical value {}",
            outliers.critical_value
        )));
    }
    Ok(XmlOutliers {
        critical_value: outliers.critical_value,
        types: outliers.types.iter().map(|t| t.code().to_string()).collect(),
    })
}

pub(crate) fn render_arima(arima: &ArimaSpec) -> Result<XmlArima> {
    if !arima.automatic {
        if arima.p > 3 || arima.q > 3 || arima.d > 2 {
            return Err(RequestsError::Validation(format!(
                "regular orders ({},{},{}) out of range",
                arima.p, arima.d, arima.q
            )));
        }
        if arima.bp > 1 || arima.bd > 1 || arima.bq > 1 {
            return Err(RequestsError::Validation(format!(
                "seasonal orders ({},{},{}) out of range",
                arima.bp, arima.bd, arima.bq
            )));
        }
    }
    Ok(XmlArima {
        automatic: arima.automatic,
        mean: arima.mean,
        p: arima.p,
        d: arima.d,
        q: arima.q,
        bp: arima.bp,
        bd: arima.bd,
        bq: arima.bq,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OutlierType, TsPeriod};
    use test_case::test_case;

    #[test]
    fn test_render_span_kinds() {
        let start = TsPeriod::month(2010, 1).unwrap();
        let end = TsPeriod::month(2019, 12).unwrap();

        let between = render_span(&SpanSelector::Between { start, end }).unwrap();
        assert_eq!(between.kind, "Between");
        assert_eq!(between.start.as_deref(), Some("2010-01"));
        assert_eq!(between.end.as_deref(), Some("2019-12"));

        let excluding = render_span(&SpanSelector::Excluding { first: 2, last: 3 }).unwrap();
        assert_eq!((excluding.n0, excluding.n1), (Some(2), Some(3)));

        assert!(render_span(&SpanSelector::Between { start: end, end: start }).is_err());
    }

    #[test_case(ArimaSpec::airline(), true ; "airline")]
    #[test_case(ArimaSpec { p: 4, ..ArimaSpec::airline() }, false ; "regular ar too high")]
    #[test_case(ArimaSpec { bd: 2, ..ArimaSpec::airline() }, false ; "seasonal diff too high")]
    #[test_case(ArimaSpec { p: 9, ..ArimaSpec::automatic() }, true ; "orders ignored when automatic")]
    fn test_render_arima(arima: ArimaSpec, ok: bool) {
        assert_eq!(render_arima(&arima).is_ok(), ok);
    }

    #[test]
    fn test_render_outliers() {
        let spec = OutlierSpec {
            types: vec![OutlierType::AO, OutlierType::SO],
            critical_value: 3.5,
        };
        let xout = render_outliers(&spec).unwrap();
        assert_eq!(xout.types, vec!["AO", "SO"]);

        let bad = OutlierSpec {
            critical_value: -1.0,
            ..spec
        };
        assert!(render_outliers(&bad).is_err());
    }

    #[test]
    fn test_render_regression_requires_qualified_variables() {
        let mut regression = RegressionSpec {
            user_variables: vec!["reg.strike".to_string()],
            ..RegressionSpec::default()
        };
        assert!(render_regression(&regression).is_ok());

        regression.user_variables.push("strike".to_string());
        assert!(render_regression(&regression).is_err());
    }
}
