//! Stride-based resampling and the small length helpers around it.
//!
//! Unlike interpolating resamplers, [`resample`] never averages or windows:
//! it stride-samples on the way down and replicates values on the way up, so
//! every output value is a value that actually occurred in the input. That
//! makes it suitable for fitting amplitude data into a fixed number of
//! display bars without inventing amplitudes.

use crate::error::SequenceError;

/// Resamples `input` to exactly `target_len` elements.
///
/// Downsampling takes every `stride`-th element starting at index 0, where
/// `stride = round(input.len() / target_len)` (minimum 1). Upsampling
/// replicates each element `ceil(target_len / input.len())` times. Integer
/// strides rarely land exactly on `target_len`, so the result is corrected
/// afterwards: undershoot is padded with clones of the last *input* element,
/// overshoot is truncated keeping the front.
///
/// The operation does no arithmetic on the values, so it is generic over any
/// clonable element type; numeric amplitude arrays are the motivating caller.
///
/// # Errors
///
/// Returns [`SequenceError::EmptyInput`] if `input` is empty and `target_len`
/// is nonzero. A zero `target_len` always yields an empty vector.
///
/// # Example
///
/// ```
/// let bars = wavebars::resample(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 3)?;
/// assert_eq!(bars, vec![1, 4, 7]);
/// # Ok::<(), wavebars::SequenceError>(())
/// ```
pub fn resample<T: Clone>(input: &[T], target_len: usize) -> Result<Vec<T>, SequenceError> {
    if target_len == 0 {
        return Ok(vec![]);
    }
    if input.is_empty() {
        return Err(SequenceError::EmptyInput);
    }
    if input.len() == target_len {
        return Ok(input.to_vec());
    }

    let mut output = if input.len() > target_len {
        let stride = ((input.len() as f64 / target_len as f64).round() as usize).max(1);
        log::trace!(
            "downsampling {} -> {} at stride {}",
            input.len(),
            target_len,
            stride
        );
        input.iter().step_by(stride).cloned().collect::<Vec<T>>()
    } else {
        let spread = target_len.div_ceil(input.len());
        log::trace!(
            "upsampling {} -> {} with spread factor {}",
            input.len(),
            target_len,
            spread
        );
        let mut spread_out = Vec::with_capacity(input.len() * spread);
        for value in input {
            for _ in 0..spread {
                spread_out.push(value.clone());
            }
        }
        spread_out
    };

    // Correct the over/undershoot: pad with the last input element, then
    // keep the front.
    let last = &input[input.len() - 1];
    while output.len() < target_len {
        output.push(last.clone());
    }
    output.truncate(target_len);

    Ok(output)
}

/// Returns `len` repetitions of `value`.
///
/// ```
/// assert_eq!(wavebars::seed(0.0f32, 4), vec![0.0, 0.0, 0.0, 0.0]);
/// assert!(wavebars::seed('x', 0).is_empty());
/// ```
pub fn seed<T: Clone>(value: T, len: usize) -> Vec<T> {
    vec![value; len]
}

/// Adjusts `a` to `len` elements, trimming from the back or filling from the
/// front of `fill_source`.
///
/// If `fill_source` runs out before `len` is reached, the result stays short;
/// supplying enough fill data is the caller's responsibility.
///
/// ```
/// assert_eq!(
///     wavebars::trim_or_fill(&[1, 2], 5, &[9, 9, 9, 9, 9]),
///     vec![1, 2, 9, 9, 9]
/// );
/// ```
pub fn trim_or_fill<T: Clone>(a: &[T], len: usize, fill_source: &[T]) -> Vec<T> {
    if a.len() >= len {
        return a[..len].to_vec();
    }
    let needed = len - a.len();
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(a);
    out.extend_from_slice(&fill_source[..needed.min(fill_source.len())]);
    out
}

/// Returns an independent copy of `a` with identical contents and order.
///
/// Shallow-copy semantics: elements themselves are cloned, but if `T` is a
/// handle type the clones still refer to the same underlying data.
pub fn fast_clone<T: Clone>(a: &[T]) -> Vec<T> {
    a.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resample_length_is_exact() {
        let input: Vec<f32> = (0..137).map(|i| i as f32).collect();
        for target in 0..300 {
            let output = resample(&input, target).unwrap();
            assert_eq!(output.len(), target, "target {}", target);
        }
    }

    #[test]
    fn test_resample_identity() {
        let input = vec![0.1f32, 0.5, -0.3, 0.9];
        let output = resample(&input, input.len()).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_resample_downsample_stride_3() {
        // stride = round(10 / 3) = 3: indices 0, 3, 6, 9 then trimmed to 3
        let output = resample(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 3).unwrap();
        assert_eq!(output, vec![1, 4, 7]);
    }

    #[test]
    fn test_resample_downsample_pads_with_last_input() {
        // stride = round(11 / 7) = 2: indices 0,2,4,6,8,10 give only 6 of 7;
        // the pad value is the last input element, not the last sample taken
        let input: Vec<i32> = (1..=11).collect();
        let output = resample(&input, 7).unwrap();
        assert_eq!(output, vec![1, 3, 5, 7, 9, 11, 11]);
    }

    #[test]
    fn test_resample_upsample_single_element() {
        let output = resample(&[5], 4).unwrap();
        assert_eq!(output, vec![5, 5, 5, 5]);
    }

    #[test]
    fn test_resample_upsample_truncates_overshoot() {
        // spread = ceil(4 / 3) = 2 gives 6 values, trimmed to the front 4
        let output = resample(&[1, 2, 3], 4).unwrap();
        assert_eq!(output, vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_resample_zero_target() {
        assert!(resample(&[1, 2, 3], 0).unwrap().is_empty());
        assert!(resample::<i32>(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn test_resample_empty_input_is_an_error() {
        assert_eq!(
            resample::<f32>(&[], 8),
            Err(SequenceError::EmptyInput)
        );
    }

    #[test]
    fn test_resample_generic_over_non_numeric() {
        let output = resample(&["a", "b", "c"], 6).unwrap();
        assert_eq!(output, vec!["a", "a", "b", "b", "c", "c"]);
    }

    #[test]
    fn test_seed() {
        assert_eq!(seed(7u8, 3), vec![7, 7, 7]);
        assert!(seed(7u8, 0).is_empty());
    }

    #[test]
    fn test_trim_or_fill_exact() {
        let a = vec![1, 2, 3];
        assert_eq!(trim_or_fill(&a, 3, &[9, 9]), a);
    }

    #[test]
    fn test_trim_or_fill_trims() {
        assert_eq!(trim_or_fill(&[1, 2, 3, 4, 5], 2, &[]), vec![1, 2]);
    }

    #[test]
    fn test_trim_or_fill_fills_from_front_of_source() {
        assert_eq!(
            trim_or_fill(&[1, 2], 5, &[9, 8, 7, 6, 5]),
            vec![1, 2, 9, 8, 7]
        );
    }

    #[test]
    fn test_trim_or_fill_short_fill_source_stays_short() {
        assert_eq!(trim_or_fill(&[1, 2], 6, &[9]), vec![1, 2, 9]);
        assert_eq!(trim_or_fill(&[1, 2], 6, &[]), vec![1, 2]);
    }

    #[test]
    fn test_trim_or_fill_zero_length() {
        assert!(trim_or_fill(&[1, 2, 3], 0, &[9]).is_empty());
    }

    #[test]
    fn test_fast_clone_is_independent() {
        let a = vec![1, 2, 3];
        let mut b = fast_clone(&a);
        assert_eq!(a, b);
        b[0] = 99;
        assert_eq!(a, vec![1, 2, 3]);
    }
}
