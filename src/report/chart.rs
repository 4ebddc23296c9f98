//! Chart-ready assembly.
//!
//! The rendering layer consumes only [`ChartReadyResult`]: formatted date
//! labels plus named value arrays of equal length. This module downsamples
//! an aligned set for the requested span and formats the axis labels.

use chrono::NaiveDate;

use crate::domain::{AlignedSeriesSet, ChartReadyResult, ChartSeries, TimeSpan};
use crate::series::downsample::downsample;

/// Axis label for one date, e.g. `"3 Mar"`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

/// Downsample `set` for `span` and emit labels plus parallel value arrays.
pub fn build_chart(set: &AlignedSeriesSet, span: TimeSpan) -> ChartReadyResult {
    let thinned = downsample(set, span);

    ChartReadyResult {
        labels: thinned.dates.iter().map(|d| date_label(*d)).collect(),
        series: thinned
            .series
            .into_iter()
            .map(|s| ChartSeries {
                name: s.name,
                values: s.values,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlignedValues;

    fn set_of(n: usize) -> AlignedSeriesSet {
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        AlignedSeriesSet {
            dates: (0..n)
                .map(|i| first + chrono::Duration::days(i as i64))
                .collect(),
            series: vec![AlignedValues {
                name: "Blue".to_string(),
                values: (0..n).map(|i| Some(i as f64)).collect(),
            }],
        }
    }

    #[test]
    fn labels_use_day_and_short_month() {
        assert_eq!(
            date_label(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()),
            "3 Mar"
        );
        assert_eq!(
            date_label(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()),
            "25 Dec"
        );
    }

    #[test]
    fn labels_and_value_arrays_are_parallel() {
        let chart = build_chart(&set_of(300), TimeSpan::Month);
        assert_eq!(chart.labels.len(), 30);
        for s in &chart.series {
            assert_eq!(s.values.len(), chart.labels.len());
        }
    }

    #[test]
    fn week_span_passes_everything_through() {
        let chart = build_chart(&set_of(9), TimeSpan::Week);
        assert_eq!(chart.labels.len(), 9);
        assert_eq!(chart.series[0].values[8], Some(8.0));
    }
}
