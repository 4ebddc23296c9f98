//! Shared history pipeline used by the CLI front-end.
//!
//! One place for the core workflow:
//! concurrent per-casa fetch -> align -> gap-fill -> downsample/labels
//!
//! A failed casa degrades to an empty series (all-absent after alignment)
//! instead of aborting the batch; the chart shows "no data for that line".

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::data::client::DatosClient;
use crate::domain::{AlignedSeriesSet, Casa, ChartReadyResult, Series, SpanStyle, TimeSpan};
use crate::error::Result;
use crate::report::chart::build_chart;
use crate::series::align::align;
use crate::series::range::DateRange;

/// The selection a history view was computed for.
///
/// Comparable so that a caller refreshing in the background can discard a
/// view whose request no longer matches the current selection instead of
/// applying a stale result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub casas: Vec<Casa>,
    pub span: TimeSpan,
    pub end: NaiveDate,
}

/// All computed outputs of one history run.
#[derive(Debug, Clone)]
pub struct HistoryView {
    pub request: HistoryRequest,
    pub aligned: AlignedSeriesSet,
    pub chart: ChartReadyResult,
    pub style: SpanStyle,
}

impl HistoryView {
    /// Whether this view still matches the caller's current selection.
    pub fn is_current(&self, selection: &HistoryRequest) -> bool {
        self.request == *selection
    }
}

/// Execute the full history pipeline for `request`.
pub fn run_history(client: &DatosClient, request: &HistoryRequest) -> Result<HistoryView> {
    let range = match request.span.window_start(request.end) {
        Some(start) => Some(DateRange::new(start, request.end)?),
        None => None,
    };

    let series: Vec<Series> = request
        .casas
        .par_iter()
        .map(|&casa| match client.fetch_series(casa, range.as_ref()) {
            Ok(series) => series,
            Err(err) => {
                log::warn!("{casa}: degraded to empty series: {err}");
                Series::empty(casa.display_name())
            }
        })
        .collect();

    let aligned = align(&series).gap_filled();
    let chart = build_chart(&aligned, request.span);

    Ok(HistoryView {
        request: request.clone(),
        aligned,
        chart,
        style: SpanStyle::for_span(request.span),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(span: TimeSpan) -> HistoryRequest {
        HistoryRequest {
            casas: vec![Casa::Blue, Casa::Oficial],
            span,
            end: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn stale_views_are_detectable() {
        let view = HistoryView {
            request: request(TimeSpan::Month),
            aligned: AlignedSeriesSet {
                dates: Vec::new(),
                series: Vec::new(),
            },
            chart: ChartReadyResult {
                labels: Vec::new(),
                series: Vec::new(),
            },
            style: SpanStyle::for_span(TimeSpan::Month),
        };

        assert!(view.is_current(&request(TimeSpan::Month)));
        assert!(!view.is_current(&request(TimeSpan::Year)));
    }
}
