//! Last-known-value carry-forward.
//!
//! Markets are closed on weekends and holidays; the displayed rate should
//! persist across those days rather than show a gap. Absent values before
//! the first present value stay absent.

/// Fill each absent slot with the nearest preceding present value.
///
/// Pure and total over any input length, including zero.
pub fn carry_forward(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut last = None;
    values
        .iter()
        .map(|v| {
            if v.is_some() {
                last = *v;
            }
            last
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_length_equals_input_length() {
        let input = vec![None, Some(1.0), None, None, Some(2.0)];
        assert_eq!(carry_forward(&input).len(), input.len());
        assert!(carry_forward(&[]).is_empty());
    }

    #[test]
    fn fills_gaps_with_last_known_value() {
        let input = vec![Some(10.0), None, None, Some(40.0), None];
        assert_eq!(
            carry_forward(&input),
            vec![Some(10.0), Some(10.0), Some(10.0), Some(40.0), Some(40.0)]
        );
    }

    #[test]
    fn leading_absents_stay_absent() {
        let input = vec![None, None, Some(5.0), None];
        assert_eq!(
            carry_forward(&input),
            vec![None, None, Some(5.0), Some(5.0)]
        );
    }

    #[test]
    fn present_values_are_unchanged() {
        let input = vec![Some(1.0), Some(2.0), Some(3.0)];
        assert_eq!(carry_forward(&input), input);
    }

    #[test]
    fn all_absent_stays_all_absent() {
        let input = vec![None, None, None];
        assert_eq!(carry_forward(&input), input);
    }
}
