//! Compounded-rate calculator.
//!
//! Given ascending unique monthly rates, compound the slice selected by a
//! start/end period pair and derive the total, annualized, and
//! average-monthly equivalents.
//!
//! Bound semantics, kept bug-for-bug with the upstream behavior: the start
//! index is the first observation at or after `start`, the end index is the
//! first observation strictly after `end`. A consequence is that the last
//! available month can never be chosen as the end bound (there is nothing
//! strictly after it) and the request fails instead. `adjust_rejects_end_at_last_observation`
//! pins this.

use crate::domain::{Adjustment, Period, RateObservation};
use crate::error::{CoreError, Result};

/// Compound `rates` over `[start, end]` and apply the factor to `principal`.
pub fn adjust(
    rates: &[RateObservation],
    start: Period,
    end: Period,
    principal: f64,
) -> Result<Adjustment> {
    if start > end {
        return Err(CoreError::InvalidPeriodRange { start, end });
    }

    let start_idx = rates
        .iter()
        .position(|r| r.period >= start)
        .ok_or(CoreError::RangeNotFound(start))?;
    let end_idx = rates
        .iter()
        .position(|r| r.period > end)
        .ok_or(CoreError::RangeNotFound(end))?;

    let slice = &rates[start_idx..end_idx];
    let months = end_idx - start_idx;
    if months == 0 {
        return Err(CoreError::EmptyRange);
    }

    let factor = slice
        .iter()
        .fold(1.0_f64, |acc, r| acc * (1.0 + r.rate / 100.0));

    let adjusted_amount = principal * factor;
    let total_change_percent = (factor - 1.0) * 100.0;
    let annualized = (1.0 + total_change_percent / 100.0).powf(12.0 / months as f64) - 1.0;
    let average_monthly_percent = ((1.0 + annualized).powf(1.0 / 12.0) - 1.0) * 100.0;

    let result = Adjustment {
        adjusted_amount,
        total_change_percent,
        average_monthly_percent,
        annualized_percent: annualized * 100.0,
    };

    let finite = result.adjusted_amount.is_finite()
        && result.total_change_percent.is_finite()
        && result.average_monthly_percent.is_finite()
        && result.annualized_percent.is_finite();
    if !finite {
        return Err(CoreError::NonFinite);
    }

    Ok(result)
}

/// Latest observed period.
pub fn latest_period(rates: &[RateObservation]) -> Option<Period> {
    rates.last().map(|r| r.period)
}

/// Default calculator bounds when the caller supplies none.
///
/// The newest month can never serve as an end bound (see the module note),
/// so the default end is the month before it, with the start twelve months
/// earlier again.
pub fn default_bounds(rates: &[RateObservation]) -> Option<(Period, Period)> {
    let end = latest_period(rates)?.months_before(1);
    Some((end.months_before(12), end))
}
