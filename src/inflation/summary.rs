//! Per-year grouping of monthly inflation rates.

use crate::domain::RateObservation;

/// One calendar year's worth of monthly rates plus simple aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub year: i32,
    /// (month, rate) pairs, ascending by month.
    pub months: Vec<(u32, f64)>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Group ascending rates by calendar year, ascending by year.
///
/// Presentation layers typically list years newest-first; that reversal is
/// theirs, not ours.
pub fn yearly_summary(rates: &[RateObservation]) -> Vec<YearSummary> {
    let mut out: Vec<YearSummary> = Vec::new();

    for r in rates {
        let year = r.period.year;
        match out.last_mut() {
            Some(current) if current.year == year => {
                current.months.push((r.period.month, r.rate));
            }
            _ => out.push(YearSummary {
                year,
                months: vec![(r.period.month, r.rate)],
                min: 0.0,
                max: 0.0,
                mean: 0.0,
            }),
        }
    }

    for summary in &mut out {
        let values: Vec<f64> = summary.months.iter().map(|&(_, v)| v).collect();
        summary.min = values.iter().copied().fold(f64::INFINITY, f64::min);
        summary.max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        summary.mean = values.iter().sum::<f64>() / values.len() as f64;
    }

    out
}
