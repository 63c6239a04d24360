use crate::error::{SlideError, SlideResult};

pub const DEFAULT_RESAMPLE_COUNT: usize = 64;

/// Resamples one coordinate axis of a polyline to `n` points spaced evenly by arc length.
///
/// `samples` holds the axis values of the original vertices and `segment_lengths`
/// the Euclidean length of each segment between consecutive vertices (so
/// `segment_lengths.len() == samples.len() - 1`). The lengths come from the full
/// 2-D path, which is why x and y are resampled against the same array.
///
/// The first output equals `samples[0]` and the last equals the final sample.
/// A zero-length segment contributes its end value instead of a NaN.
pub fn resample(samples: &[f64], segment_lengths: &[f64], n: usize) -> SlideResult<Vec<f64>> {
    if samples.len() < 2 {
        return Err(SlideError::TooFewPoints {
            points: samples.len(),
        });
    }
    if segment_lengths.len() + 1 != samples.len() {
        return Err(SlideError::SegmentMismatch {
            samples: samples.len(),
            segments: segment_lengths.len(),
        });
    }
    if n < 2 {
        return Err(SlideError::ResampleCount { count: n });
    }

    let total: f64 = segment_lengths.iter().sum();
    let last = samples[samples.len() - 1];
    let mut result = Vec::with_capacity(n);
    let mut offset = 0.0;
    let mut segment = 0;

    for i in 0..n {
        let target = (i as f64 * total) / (n - 1) as f64;
        while segment < segment_lengths.len() && offset + segment_lengths[segment] < target {
            offset += segment_lengths[segment];
            segment += 1;
        }

        // 부동소수점 오차로 마지막 샘플에서 세그먼트를 모두 소진한 경우
        if segment == segment_lengths.len() {
            result.push(last);
            continue;
        }

        let a = samples[segment];
        let b = samples[segment + 1];
        let t = (target - offset) / segment_lengths[segment];
        if t.is_finite() {
            result.push(a + (b - a) * t);
        } else {
            result.push(b);
        }
    }

    Ok(result)
}
