//! Date-range materialization.

use chrono::{Duration, NaiveDate};

use crate::domain::Series;
use crate::error::{CoreError, Result};

/// An inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(CoreError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every calendar day of the range, ascending, both ends included.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            out.push(current);
            current += Duration::days(1);
        }
        out
    }
}

/// Distinct sorted union of the dates actually present across `series`.
///
/// Used when exact per-day materialization is not required: the aligner
/// builds its axis from this rather than from calendar expansion.
pub fn union_dates(series: &[Series]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = series
        .iter()
        .flat_map(|s| s.points.iter().map(|o| o.date))
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn rejects_start_after_end() {
        let err = DateRange::new(d(2024, 2, 1), d(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRange { .. }));
    }

    #[test]
    fn days_includes_both_ends() {
        let range = DateRange::new(d(2024, 1, 30), d(2024, 2, 2)).unwrap();
        let days = range.days();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], d(2024, 1, 30));
        assert_eq!(days[3], d(2024, 2, 2));
    }

    #[test]
    fn single_day_range_is_one_day() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 1, 1)).unwrap();
        assert_eq!(range.days(), vec![d(2024, 1, 1)]);
    }

    #[test]
    fn union_dates_sorts_and_dedups() {
        let a = Series::new(
            "a",
            vec![
                Observation { date: d(2024, 1, 4), value: 1.0 },
                Observation { date: d(2024, 1, 1), value: 2.0 },
            ],
        );
        let b = Series::new(
            "b",
            vec![
                Observation { date: d(2024, 1, 1), value: 3.0 },
                Observation { date: d(2024, 1, 2), value: 4.0 },
            ],
        );
        assert_eq!(
            union_dates(&[a, b]),
            vec![d(2024, 1, 1), d(2024, 1, 2), d(2024, 1, 4)]
        );
    }

    #[test]
    fn union_dates_of_nothing_is_empty() {
        assert!(union_dates(&[]).is_empty());
    }
}
