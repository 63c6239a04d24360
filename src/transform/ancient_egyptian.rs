//! # 고대 이집트 분해
//!
//! 임의 길이 `n`을 서로 다른 2의 거듭제곱의 합(`n`의 이진 표현)으로 나누고,
//! 각 구간에 감싼 변환을 독립적으로 적용합니다. 길이 1인 꼬리 구간은
//! 항등 변환으로 통과하며 레벨 0의 거친 계수 역할을 합니다.

use super::Transform;
use crate::error::{TransformError, TransformResult};
use tracing::trace;

/// Exponents `p0 > p1 > … >= 0` with `Σ 2^pi == len`, most significant first.
/// Empty for `len == 0`.
pub fn ancient_egyptian_multipliers(len: usize) -> Vec<u32> {
    (0..usize::BITS)
        .rev()
        .filter(|&bit| len & (1usize << bit) != 0)
        .collect()
}

/// Inverse of [`ancient_egyptian_multipliers`].
pub fn multipliers_to_length(multipliers: &[u32]) -> usize {
    multipliers.iter().map(|&p| 1usize << p).sum()
}

/// Generalizes a power-of-two transform to arbitrary positive lengths.
#[derive(Debug, Clone, Default)]
pub struct AncientEgyptianDecomposition<T: Transform> {
    inner: T,
}

impl<T: Transform> AncientEgyptianDecomposition<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Runs `apply` over each power-of-two sub-array and writes the result back
    /// to the same offset.
    fn apply_segments<F>(&self, input: &[f64], apply: F) -> TransformResult<Vec<f64>>
    where
        F: Fn(&T, &[f64]) -> TransformResult<Vec<f64>>,
    {
        if input.is_empty() {
            return Err(TransformError::EmptySignal);
        }

        let mut output = vec![0.0; input.len()];
        let mut offset = 0;
        for p in ancient_egyptian_multipliers(input.len()) {
            let width = 1usize << p;
            let range = offset..offset + width;
            trace!(offset, width, "transforming segment");
            let sub = apply(&self.inner, &input[range.clone()])?;
            output[range].copy_from_slice(&sub);
            offset += width;
        }
        Ok(output)
    }
}

impl<T: Transform> Transform for AncientEgyptianDecomposition<T> {
    fn name(&self) -> String {
        format!("aed({})", self.inner.name())
    }

    fn forward_with(&self, signal: &[f64], levels: Option<usize>) -> TransformResult<Vec<f64>> {
        self.apply_segments(signal, |t, sub| t.forward_with(sub, levels))
    }

    fn reverse_with(
        &self,
        coefficients: &[f64],
        levels: Option<usize>,
    ) -> TransformResult<Vec<f64>> {
        self.apply_segments(coefficients, |t, sub| t.reverse_with(sub, levels))
    }
}
