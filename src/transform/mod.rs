//! # 1차원 변환 엔진
//!
//! `Wavelet` 필터(한 단계, 2의 거듭제곱 길이)를 감싸는 변환들과
//! 임의 길이 신호를 위한 고대 이집트 분해(ancient Egyptian decomposition)를 제공합니다.
//!
//! 모든 변환은 [`Transform`] 트레이트 하나로 추상화되며, 다른 변환을
//! 생성자 인자로 받아 합성할 수 있습니다 (예: `AncientEgyptianDecomposition<PacketTransform<Haar>>`).
//! 2차원/3차원 확장은 [`multi_dim`]의 자유 함수로 제공됩니다.

pub mod ancient_egyptian;
pub mod fast;
pub mod multi_dim;
pub mod packet;
pub mod wavelet;

#[cfg(test)]
mod tests;

pub use self::ancient_egyptian::{
    ancient_egyptian_multipliers, multipliers_to_length, AncientEgyptianDecomposition,
};
pub use self::fast::FastWaveletTransform;
pub use self::multi_dim::{forward_2d, forward_3d, reverse_2d, reverse_3d};
pub use self::packet::PacketTransform;
pub use self::wavelet::{Daubechies4, Haar, Wavelet};

use crate::error::{TransformError, TransformResult};

/// A reversible, length-preserving 1-D transform.
///
/// `levels` bounds how many filter levels are applied; `None` runs to the
/// natural end of the transform. The same bound must be given to the reverse
/// call to undo a bounded forward call.
pub trait Transform: Send + Sync {
    fn name(&self) -> String;

    fn forward_with(&self, signal: &[f64], levels: Option<usize>) -> TransformResult<Vec<f64>>;

    fn reverse_with(&self, coefficients: &[f64], levels: Option<usize>)
        -> TransformResult<Vec<f64>>;

    fn forward(&self, signal: &[f64]) -> TransformResult<Vec<f64>> {
        self.forward_with(signal, None)
    }

    fn reverse(&self, coefficients: &[f64]) -> TransformResult<Vec<f64>> {
        self.reverse_with(coefficients, None)
    }

    fn forward_to_level(&self, signal: &[f64], level: usize) -> TransformResult<Vec<f64>> {
        self.forward_with(signal, Some(level))
    }

    fn reverse_from_level(&self, coefficients: &[f64], level: usize) -> TransformResult<Vec<f64>> {
        self.reverse_with(coefficients, Some(level))
    }
}

/// Band widths visited by a multi-level transform, widest first.
///
/// Starts at `len` and halves while the width is at least `wave_length`,
/// stopping early after `levels` entries. A forward pass walks the list in
/// order; the matching reverse pass walks it backwards.
pub fn band_widths(len: usize, wave_length: usize, levels: Option<usize>) -> Vec<usize> {
    let limit = levels.unwrap_or(usize::MAX);
    let mut widths = Vec::new();
    let mut h = len;
    while h >= wave_length.max(1) && widths.len() < limit {
        widths.push(h);
        h >>= 1;
    }
    widths
}

/// Length check shared by the power-of-two transforms. Signals shorter than the
/// wave length are legal and pass through unchanged.
pub(crate) fn check_power_of_two(len: usize) -> TransformResult<()> {
    if len == 0 {
        return Err(TransformError::EmptySignal);
    }
    if !len.is_power_of_two() {
        return Err(TransformError::NotPowerOfTwo { len });
    }
    Ok(())
}

/// A wavelet filter applied once, as a transform in its own right.
///
/// Used when the decomposition engine should wrap the bare filter. Signals
/// shorter than the wave length, and `levels == Some(0)`, are returned as-is.
#[derive(Debug, Clone, Default)]
pub struct WaveletStep<W: Wavelet> {
    wavelet: W,
}

impl<W: Wavelet> WaveletStep<W> {
    pub fn new(wavelet: W) -> Self {
        Self { wavelet }
    }

    pub fn wavelet(&self) -> &W {
        &self.wavelet
    }
}

impl<W: Wavelet> Transform for WaveletStep<W> {
    fn name(&self) -> String {
        format!("step({})", self.wavelet.name())
    }

    fn forward_with(&self, signal: &[f64], levels: Option<usize>) -> TransformResult<Vec<f64>> {
        check_power_of_two(signal.len())?;
        if signal.len() < self.wavelet.wave_length() || levels == Some(0) {
            return Ok(signal.to_vec());
        }
        self.wavelet.forward(signal)
    }

    fn reverse_with(
        &self,
        coefficients: &[f64],
        levels: Option<usize>,
    ) -> TransformResult<Vec<f64>> {
        check_power_of_two(coefficients.len())?;
        if coefficients.len() < self.wavelet.wave_length() || levels == Some(0) {
            return Ok(coefficients.to_vec());
        }
        self.wavelet.reverse(coefficients)
    }
}
