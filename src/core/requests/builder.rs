//! Building request documents from a processing

use super::family::{RequestFamily, TramoSeatsFamily, X13Family};
use crate::config::OutputConfig;
use crate::domain::{ProcessingContext, RequestsError, Result, SaProcessing};
use crate::xml::{
    XmlAtomicRequest, XmlProcessingContext, XmlRender, XmlRequests, XmlTramoSeatsRequests, XmlTs,
    XmlX13Requests,
};

/// Builds the request document of family `F`
///
/// Items are visited in processing order; each item whose specification
/// belongs to `F` is rendered (specification and series) into one atomic
/// request. When no item matches, no document is built and `Ok(None)` is
/// returned, so callers never write an empty request file. Otherwise the
/// context is rendered once and the output filter is filled from `config`.
///
/// # Errors
///
/// Returns [`RequestsError::Rendering`] when a specification, a series or
/// the context cannot be rendered. Nothing is returned partially.
///
/// # Examples
///
/// ```
/// use sa_requests::config::OutputConfig;
/// use sa_requests::core::requests::{build_requests, X13Family};
/// use sa_requests::domain::{ProcessingContext, SaItem, SaProcessing, Ts, X13Specification};
///
/// let mut processing = SaProcessing::new();
/// processing.add(SaItem::new(X13Specification::rsa4c(), Ts::new("exports")));
///
/// let config = OutputConfig::default();
/// let doc = build_requests::<X13Family>(&config, &processing, &ProcessingContext::default())
///     .unwrap()
///     .expect("one X-13 item");
/// assert_eq!(doc.len(), 1);
/// ```
pub fn build_requests<F: RequestFamily>(
    config: &OutputConfig,
    processing: &SaProcessing,
    context: &ProcessingContext,
) -> Result<Option<XmlRequests<F::XmlSpec>>> {
    let mut requests = XmlRequests::<F::XmlSpec>::new();

    for item in processing {
        let Some(spec) = F::select(&item.spec) else {
            continue;
        };
        let specification = <F::XmlSpec as XmlRender<F::Spec>>::render(spec)
            .map_err(|e| item_error(&item.name, e))?;
        let series = XmlTs::render(&item.ts).map_err(|e| item_error(&item.name, e))?;
        requests.push(XmlAtomicRequest {
            specification,
            series,
        });
    }

    if requests.is_empty() {
        tracing::debug!(family = %F::FAMILY, "No item to export");
        return Ok(None);
    }

    requests.context = XmlProcessingContext::render(context)?;
    fill_filter(config, requests.filters_mut());

    tracing::debug!(
        family = %F::FAMILY,
        items = requests.len(),
        filters = requests.filters().len(),
        "Built request document"
    );
    Ok(Some(requests))
}

/// X-13 requests of `processing`, `None` if it holds no X-13 item
pub fn create_x13_requests(
    config: &OutputConfig,
    processing: &SaProcessing,
    context: &ProcessingContext,
) -> Result<Option<XmlX13Requests>> {
    build_requests::<X13Family>(config, processing, context)
}

/// TRAMO-SEATS requests of `processing`, `None` if it holds no TRAMO-SEATS item
pub fn create_tramoseats_requests(
    config: &OutputConfig,
    processing: &SaProcessing,
    context: &ProcessingContext,
) -> Result<Option<XmlTramoSeatsRequests>> {
    build_requests::<TramoSeatsFamily>(config, processing, context)
}

/// Appends `matrix` then `ts_matrix` to `filter`
///
/// Absent lists are skipped. Order is kept and duplicates are not removed.
pub fn fill_filter(config: &OutputConfig, filter: &mut Vec<String>) {
    if let Some(matrix) = &config.matrix {
        filter.extend(matrix.iter().cloned());
    }
    if let Some(ts_matrix) = &config.ts_matrix {
        filter.extend(ts_matrix.iter().cloned());
    }
}

fn item_error(name: &str, err: RequestsError) -> RequestsError {
    match err {
        RequestsError::Rendering(msg) => RequestsError::Rendering(format!("item '{name}': {msg}")),
        other => RequestsError::rendering(format!("item '{name}'"), other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CalendarDefinition, EstimationSpec, Holiday, SaItem, TramoSeatsSpecification, Ts,
        TsData, TsPeriod, X13Specification,
    };

    fn series(name: &str) -> Ts {
        Ts::new(name).with_data(TsData::new(
            TsPeriod::month(2015, 1).unwrap(),
            vec![1.0, 2.0, 3.0],
        ))
    }

    fn config(matrix: Option<&[&str]>, ts_matrix: Option<&[&str]>) -> OutputConfig {
        let owned = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        OutputConfig {
            matrix: matrix.map(owned),
            ts_matrix: ts_matrix.map(owned),
            ..OutputConfig::default()
        }
    }

    fn mixed_processing() -> SaProcessing {
        vec![
            SaItem::new(X13Specification::rsa4c(), series("a")),
            SaItem::new(TramoSeatsSpecification::rsafull(), series("b")),
            SaItem::new(X13Specification::rsa5c(), series("c")),
        ]
        .into()
    }

    #[test]
    fn test_mixed_processing_splits_by_family() {
        let config = config(Some(&["m1", "m2"]), Some(&["t1"]));
        let context = ProcessingContext::default();
        let processing = mixed_processing();

        let x13 = create_x13_requests(&config, &processing, &context)
            .unwrap()
            .unwrap();
        let names: Vec<_> = x13.requests().iter().map(|r| r.series.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(x13.filters(), ["m1", "m2", "t1"]);

        let ts = create_tramoseats_requests(&config, &processing, &context)
            .unwrap()
            .unwrap();
        assert_eq!(ts.len(), 1);
        assert_eq!(ts.requests()[0].series.name, "b");
        assert_eq!(ts.filters(), ["m1", "m2", "t1"]);
    }

    #[test]
    fn test_no_matching_item_yields_none() {
        let config = config(Some(&["m1"]), None);
        let context = ProcessingContext::default();

        let empty = SaProcessing::new();
        assert!(create_x13_requests(&config, &empty, &context)
            .unwrap()
            .is_none());

        let only_x13: SaProcessing =
            vec![SaItem::new(X13Specification::rsa4c(), series("a"))].into();
        assert!(create_tramoseats_requests(&config, &only_x13, &context)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_other_methods_are_never_exported() {
        let processing: SaProcessing = vec![SaItem {
            name: "stl".to_string(),
            spec: EstimationSpec::Other {
                name: "stl".to_string(),
            },
            ts: series("stl"),
        }]
        .into();
        let config = OutputConfig::default();
        let context = ProcessingContext::default();

        assert!(create_x13_requests(&config, &processing, &context)
            .unwrap()
            .is_none());
        assert!(create_tramoseats_requests(&config, &processing, &context)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_context_not_rendered_without_items() {
        // an unrenderable context is only an error once something is exported
        let mut context = ProcessingContext::default();
        context.add_calendar(
            "bad",
            CalendarDefinition::National {
                holidays: vec![Holiday::FixedDay {
                    month: 13,
                    day: 1,
                    weight: 1.0,
                }],
            },
        );
        let config = OutputConfig::default();
        let only_ts: SaProcessing =
            vec![SaItem::new(TramoSeatsSpecification::rsa5(), series("b"))].into();

        assert!(create_x13_requests(&config, &only_ts, &context)
            .unwrap()
            .is_none());
        assert!(matches!(
            create_tramoseats_requests(&config, &only_ts, &context),
            Err(RequestsError::Rendering(_))
        ));
    }

    #[test]
    fn test_rendering_error_names_item() {
        let mut spec = X13Specification::rsa4c();
        spec.x11.henderson = 4;
        let processing: SaProcessing = vec![
            SaItem::new(X13Specification::rsa4c(), series("ok")),
            SaItem::new(spec, series("broken")),
        ]
        .into();

        let context = ProcessingContext::default();
        let err = create_x13_requests(&OutputConfig::default(), &processing, &context).unwrap_err();
        assert!(matches!(err, RequestsError::Rendering(_)));
        assert!(err.to_string().contains("item 'broken'"));
    }

    #[test]
    fn test_series_is_deep_copied() {
        let processing: SaProcessing =
            vec![SaItem::new(X13Specification::rsa4c(), series("a").with_moniker("m://a"))]
                .into();
        let context = ProcessingContext::default();
        let doc = create_x13_requests(&OutputConfig::default(), &processing, &context)
            .unwrap()
            .unwrap();
        let xts = &doc.requests()[0].series;
        assert_eq!(xts.moniker.as_deref(), Some("m://a"));
        assert_eq!(xts.data.as_ref().unwrap().values, "1 2 3");
    }

    #[test]
    fn test_fill_filter_variants() {
        let mut filter = Vec::new();
        fill_filter(&config(Some(&["m1", "m1"]), Some(&["t1"])), &mut filter);
        assert_eq!(filter, ["m1", "m1", "t1"]);

        let mut filter = Vec::new();
        fill_filter(&config(None, Some(&["t1", "t2"])), &mut filter);
        assert_eq!(filter, ["t1", "t2"]);

        let mut filter = Vec::new();
        fill_filter(&config(Some(&["m2", "m1"]), None), &mut filter);
        assert_eq!(filter, ["m2", "m1"]);

        let mut filter = Vec::new();
        fill_filter(&config(None, None), &mut filter);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_fill_filter_appends() {
        let mut filter = vec!["existing".to_string()];
        fill_filter(&config(Some(&["m1"]), None), &mut filter);
        assert_eq!(filter, ["existing", "m1"]);
    }
}
