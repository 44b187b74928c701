//! XML form of TRAMO-SEATS specifications

use super::preprocessing::{
    render_arima, render_outliers, render_regression, render_span, render_transform, XmlArima,
    XmlOutliers, XmlRegression, XmlSpan,
};
use super::requests::RequestSchema;
use super::XmlRender;
use crate::domain::{
    ApproximationMode, RequestsError, Result, SeatsMethod, SeatsSpec, TramoSeatsSpecification,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlTramoSeatsSpecification {
    pub span: XmlSpan,
    pub transform: String,
    pub regression: XmlRegression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outliers: Option<XmlOutliers>,
    pub arima: XmlArima,
    pub seats: XmlSeats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlSeats {
    #[serde(rename = "@approximation")]
    pub approximation: String,
    #[serde(rename = "@xlBoundary")]
    pub xl_boundary: f64,
    #[serde(rename = "@seasonalBoundary")]
    pub seasonal_boundary: f64,
    #[serde(rename = "@trendBoundary")]
    pub trend_boundary: f64,
    #[serde(rename = "@method")]
    pub method: String,
}

impl RequestSchema for XmlTramoSeatsSpecification {
    const ROOT: &'static str = "tramoSeatsRequests";
    const NAMESPACE: &'static str = "ec/eurostat/jdemetra/sa/tramoseats";
}

impl XmlRender<TramoSeatsSpecification> for XmlTramoSeatsSpecification {
    fn render(spec: &TramoSeatsSpecification) -> Result<Self> {
        let wrap = |e: RequestsError| RequestsError::rendering("TRAMO-SEATS specification", e);
        Ok(Self {
            span: render_span(&spec.span).map_err(wrap)?,
            transform: render_transform(spec.transform),
            regression: render_regression(&spec.regression).map_err(wrap)?,
            outliers: spec
                .outliers
                .as_ref()
                .map(render_outliers)
                .transpose()
                .map_err(wrap)?,
            arima: render_arima(&spec.arima).map_err(wrap)?,
            seats: render_seats(&spec.seats).map_err(wrap)?,
        })
    }
}

fn render_seats(seats: &SeatsSpec) -> Result<XmlSeats> {
    if !(0.9..=1.0).contains(&seats.xl_boundary) {
        return Err(RequestsError::Validation(format!(
            "xl boundary {} outside [0.9, 1]",
            seats.xl_boundary
        )));
    }
    for (name, value) in [
        ("seasonal", seats.seasonal_boundary),
        ("trend", seats.trend_boundary),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(RequestsError::Validation(format!(
                "{name} boundary {value} outside [0, 1]"
            )));
        }
    }
    let approximation = match seats.approximation {
        ApproximationMode::None => "None",
        ApproximationMode::Legacy => "Legacy",
        ApproximationMode::Noisy => "Noisy",
    };
    let method = match seats.method {
        SeatsMethod::Burman => "Burman",
        SeatsMethod::KalmanSmoother => "KalmanSmoother",
    };
    Ok(XmlSeats {
        approximation: approximation.to_string(),
        xl_boundary: seats.xl_boundary,
        seasonal_boundary: seats.seasonal_boundary,
        trend_boundary: seats.trend_boundary,
        method: method.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rsafull() {
        let xspec = XmlTramoSeatsSpecification::render(&TramoSeatsSpecification::rsafull()).unwrap();
        assert_eq!(xspec.regression.trading_days, "TradingDays");
        assert_eq!(xspec.seats.approximation, "Legacy");
        assert_eq!(xspec.seats.method, "Burman");
        assert_eq!(xspec.seats.xl_boundary, 0.95);
    }

    #[test]
    fn test_render_rejects_xl_boundary() {
        let mut spec = TramoSeatsSpecification::rsa5();
        spec.seats.xl_boundary = 0.5;
        let err = XmlTramoSeatsSpecification::render(&spec).unwrap_err();
        assert!(err.to_string().contains("TRAMO-SEATS"));
    }

    #[test]
    fn test_render_rejects_fixed_model_out_of_range() {
        let mut spec = TramoSeatsSpecification::default();
        spec.arima = crate::domain::ArimaSpec {
            d: 3,
            ..crate::domain::ArimaSpec::airline()
        };
        assert!(XmlTramoSeatsSpecification::render(&spec).is_err());
    }
}
