//! Display downsampling.
//!
//! Charts cap their point budget per requested span; we thin a series by a
//! positional stride rather than by value so the overall shape survives.
//! Index 0 is always kept; the final index only survives when it lands on
//! the stride, an accepted cosmetic approximation.

use crate::domain::{AlignedSeriesSet, AlignedValues, TimeSpan};

/// Positional stride for `n` points displayed at `span`.
///
/// `f = ceil(n / target)`, clamped to at least 1. Spans with no target
/// (1 week) keep every point.
pub fn stride_for(n: usize, span: TimeSpan) -> usize {
    match span.target_point_count() {
        None => 1,
        Some(target) => n.div_ceil(target).max(1),
    }
}

/// Keep every `stride`-th element of an aligned set, starting at index 0.
pub fn downsample(set: &AlignedSeriesSet, span: TimeSpan) -> AlignedSeriesSet {
    let stride = stride_for(set.dates.len(), span);
    if stride == 1 {
        return set.clone();
    }

    AlignedSeriesSet {
        dates: set
            .dates
            .iter()
            .step_by(stride)
            .copied()
            .collect(),
        series: set
            .series
            .iter()
            .map(|s| AlignedValues {
                name: s.name.clone(),
                values: s.values.iter().step_by(stride).copied().collect(),
            })
            .collect(),
    }
}
