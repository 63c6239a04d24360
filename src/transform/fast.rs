use super::{band_widths, check_power_of_two, Transform, Wavelet};
use crate::error::TransformResult;

/// Pyramidal (fast) wavelet transform.
///
/// Each level filters only the leading approximation band, so after a full
/// forward pass `out[0]` is the coarsest approximation followed by detail
/// bands from coarse to fine. This is the per-segment transform used for
/// slide parameters.
#[derive(Debug, Clone, Default)]
pub struct FastWaveletTransform<W: Wavelet> {
    wavelet: W,
}

impl<W: Wavelet> FastWaveletTransform<W> {
    pub fn new(wavelet: W) -> Self {
        Self { wavelet }
    }
}

impl<W: Wavelet> Transform for FastWaveletTransform<W> {
    fn name(&self) -> String {
        format!("fwt({})", self.wavelet.name())
    }

    fn forward_with(&self, signal: &[f64], levels: Option<usize>) -> TransformResult<Vec<f64>> {
        check_power_of_two(signal.len())?;
        let mut buffer = signal.to_vec();
        for h in band_widths(signal.len(), self.wavelet.wave_length(), levels) {
            let filtered = self.wavelet.forward(&buffer[..h])?;
            buffer[..h].copy_from_slice(&filtered);
        }
        Ok(buffer)
    }

    fn reverse_with(
        &self,
        coefficients: &[f64],
        levels: Option<usize>,
    ) -> TransformResult<Vec<f64>> {
        check_power_of_two(coefficients.len())?;
        let mut buffer = coefficients.to_vec();
        for h in band_widths(coefficients.len(), self.wavelet.wave_length(), levels)
            .into_iter()
            .rev()
        {
            let restored = self.wavelet.reverse(&buffer[..h])?;
            buffer[..h].copy_from_slice(&restored);
        }
        Ok(buffer)
    }
}
