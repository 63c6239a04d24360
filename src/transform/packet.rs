use super::{band_widths, check_power_of_two, Transform, Wavelet};
use crate::error::TransformResult;

/// Wavelet packet transform: every band is filtered again at each level,
/// not just the approximation band.
#[derive(Debug, Clone, Default)]
pub struct PacketTransform<W: Wavelet> {
    wavelet: W,
}

impl<W: Wavelet> PacketTransform<W> {
    pub fn new(wavelet: W) -> Self {
        Self { wavelet }
    }

    /// Applies `step` in place to each contiguous band of width `h`.
    fn filter_bands<F>(&self, buffer: &mut [f64], h: usize, step: F) -> TransformResult<()>
    where
        F: Fn(&W, &[f64]) -> TransformResult<Vec<f64>>,
    {
        for band in buffer.chunks_mut(h) {
            let filtered = step(&self.wavelet, &*band)?;
            band.copy_from_slice(&filtered);
        }
        Ok(())
    }
}

impl<W: Wavelet> Transform for PacketTransform<W> {
    fn name(&self) -> String {
        format!("packet({})", self.wavelet.name())
    }

    fn forward_with(&self, signal: &[f64], levels: Option<usize>) -> TransformResult<Vec<f64>> {
        check_power_of_two(signal.len())?;
        let mut buffer = signal.to_vec();
        for h in band_widths(signal.len(), self.wavelet.wave_length(), levels) {
            self.filter_bands(&mut buffer, h, |w, band| w.forward(band))?;
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
            self.filter_bands(&mut buffer, h, |w, band| w.reverse(band))?;
        }
        Ok(buffer)
    }
}
