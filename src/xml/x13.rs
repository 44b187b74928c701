//! XML form of X-13 specifications

use super::preprocessing::{
    render_arima, render_outliers, render_regression, render_span, render_transform, XmlArima,
    XmlOutliers, XmlRegression, XmlSpan,
};
use super::requests::RequestSchema;
use super::XmlRender;
use crate::domain::{
    DecompositionMode, RequestsError, Result, SeasonalFilter, X11Spec, X13Specification,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlX13Specification {
    pub span: XmlSpan,
    pub transform: String,
    pub regression: XmlRegression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outliers: Option<XmlOutliers>,
    pub arima: XmlArima,
    pub x11: XmlX11,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlX11 {
    #[serde(rename = "@mode")]
    pub mode: String,
    #[serde(rename = "@seasonalFilter")]
    pub seasonal_filter: String,
    #[serde(rename = "@henderson")]
    pub henderson: u32,
    #[serde(rename = "@lsigma")]
    pub lsigma: f64,
    #[serde(rename = "@usigma")]
    pub usigma: f64,
    #[serde(rename = "@forecastHorizon")]
    pub forecast_horizon: i32,
}

impl RequestSchema for XmlX13Specification {
    const ROOT: &'static str = "x13Requests";
    const NAMESPACE: &'static str = "ec/eurostat/jdemetra/sa/x13";
}

impl XmlRender<X13Specification> for XmlX13Specification {
    fn render(spec: &X13Specification) -> Result<Self> {
        let wrap = |e: RequestsError| RequestsError::rendering("X-13 specification", e);
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
            x11: render_x11(&spec.x11).map_err(wrap)?,
        })
    }
}

fn render_x11(x11: &X11Spec) -> Result<XmlX11> {
    if x11.henderson != 0 && (x11.henderson % 2 == 0 || !(3..=101).contains(&x11.henderson)) {
        return Err(RequestsError::Validation(format!(
            "Henderson length {} must be odd and within [3, 101]",
            x11.henderson
        )));
    }
    if !x11.lsigma.is_finite()
        || !x11.usigma.is_finite()
        || x11.lsigma <= 0.5
        || x11.lsigma >= x11.usigma
    {
        return Err(RequestsError::Validation(format!(
            "sigma limits ({}, {}) are inconsistent",
            x11.lsigma, x11.usigma
        )));
    }
    let mode = match x11.mode {
        DecompositionMode::Undefined => "Undefined",
        DecompositionMode::Additive => "Additive",
        DecompositionMode::Multiplicative => "Multiplicative",
        DecompositionMode::LogAdditive => "LogAdditive",
        DecompositionMode::PseudoAdditive => "PseudoAdditive",
    };
    let seasonal_filter = match x11.seasonal_filter {
        SeasonalFilter::Msr => "Msr",
        SeasonalFilter::S3X1 => "S3X1",
        SeasonalFilter::S3X3 => "S3X3",
        SeasonalFilter::S3X5 => "S3X5",
        SeasonalFilter::S3X9 => "S3X9",
        SeasonalFilter::S3X15 => "S3X15",
        SeasonalFilter::Stable => "Stable",
        SeasonalFilter::X11Default => "X11Default",
    };
    Ok(XmlX11 {
        mode: mode.to_string(),
        seasonal_filter: seasonal_filter.to_string(),
        henderson: x11.henderson,
        lsigma: x11.lsigma,
        usigma: x11.usigma,
        forecast_horizon: x11.forecast_horizon,
    })
}
