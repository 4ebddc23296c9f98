//! Union-date alignment of independently-fetched series.
//!
//! Each input series carries its own (possibly sparse) set of dates. The
//! aligner builds one shared ascending axis from the union of those dates
//! and re-indexes every series onto it, marking the dates a series never
//! observed as absent.
//!
//! Whether absents are then carried forward is the caller's policy: the
//! historical chart pipeline gap-fills the aligned set, conversion-range
//! consumers read it raw.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{AlignedSeriesSet, AlignedValues, Series};
use crate::series::fill::carry_forward;
use crate::series::range::union_dates;

/// Merge `series` onto the sorted union of their observed dates.
pub fn align(series: &[Series]) -> AlignedSeriesSet {
    let dates = union_dates(series);

    let aligned = series
        .iter()
        .map(|s| {
            let by_date: HashMap<NaiveDate, f64> =
                s.points.iter().map(|o| (o.date, o.value)).collect();
            AlignedValues {
                name: s.name.clone(),
                values: dates.iter().map(|d| by_date.get(d).copied()).collect(),
            }
        })
        .collect();

    AlignedSeriesSet {
        dates,
        series: aligned,
    }
}

impl AlignedSeriesSet {
    /// A copy with every series' absent slots carried forward.
    pub fn gap_filled(&self) -> AlignedSeriesSet {
        AlignedSeriesSet {
            dates: self.dates.clone(),
            series: self
                .series
                .iter()
                .map(|s| AlignedValues {
                    name: s.name.clone(),
                    values: carry_forward(&s.values),
                })
                .collect(),
        }
    }

    /// Look up a series' value on a given axis date.
    pub fn value_at(&self, name: &str, date: NaiveDate) -> Option<f64> {
        let idx = self.dates.iter().position(|d| *d == date)?;
        self.series
            .iter()
            .find(|s| s.name == name)
            .and_then(|s| s.values[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn series(name: &str, points: &[(u32, f64)]) -> Series {
        Series::new(
            name,
            points
                .iter()
                .map(|&(day, value)| Observation { date: d(day), value })
                .collect(),
        )
    }

    #[test]
    fn merges_two_series_onto_the_date_union() {
        let a = series("a", &[(1, 10.0), (2, 20.0), (4, 40.0)]);
        let b = series("b", &[(2, 200.0), (3, 300.0), (4, 400.0)]);

        let set = align(&[a, b]);

        assert_eq!(set.dates, vec![d(1), d(2), d(3), d(4)]);
        assert_eq!(
            set.series[0].values,
            vec![Some(10.0), Some(20.0), None, Some(40.0)]
        );
        assert_eq!(
            set.series[1].values,
            vec![None, Some(200.0), Some(300.0), Some(400.0)]
        );
    }

    #[test]
    fn axis_is_strictly_ascending_without_duplicates() {
        let a = series("a", &[(5, 1.0), (1, 2.0), (3, 3.0)]);
        let b = series("b", &[(3, 4.0), (1, 5.0)]);

        let set = align(&[a, b]);
        assert!(set.dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn alignment_never_corrupts_source_values() {
        let a = series("a", &[(1, 10.0), (2, 20.0), (4, 40.0)]);
        let set = align(std::slice::from_ref(&a));

        for o in &a.points {
            assert_eq!(set.value_at("a", o.date), Some(o.value));
        }
    }

    #[test]
    fn value_arrays_match_axis_length() {
        let a = series("a", &[(1, 1.0)]);
        let b = series("b", &[(2, 2.0), (3, 3.0)]);
        let set = align(&[a, b]);
        for s in &set.series {
            assert_eq!(s.values.len(), set.dates.len());
        }
    }

    #[test]
    fn empty_input_aligns_to_empty_set() {
        let set = align(&[]);
        assert!(set.dates.is_empty());
        assert!(set.series.is_empty());
    }

    #[test]
    fn failed_series_stays_all_absent() {
        let a = series("a", &[(1, 1.0), (2, 2.0)]);
        let dead = Series::empty("dead");
        let set = align(&[a, dead]);
        assert_eq!(set.series[1].values, vec![None, None]);
    }

    #[test]
    fn gap_filled_carries_within_each_series() {
        let a = series("a", &[(1, 10.0), (3, 30.0)]);
        let b = series("b", &[(2, 200.0)]);

        let filled = align(&[a, b]).gap_filled();

        assert_eq!(
            filled.series[0].values,
            vec![Some(10.0), Some(10.0), Some(30.0)]
        );
        assert_eq!(filled.series[1].values, vec![None, Some(200.0), Some(200.0)]);
    }
}
