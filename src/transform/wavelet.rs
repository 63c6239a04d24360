//! # 웨이블릿 필터
//!
//! 2의 거듭제곱 길이 신호에 대해 한 단계의 정규직교 필터 뱅크를 적용합니다.
//! 출력의 앞 절반은 근사(approximation) 계수, 뒤 절반은 세부(detail) 계수입니다.
//! 경계는 주기적으로 감싸므로 웨이브 길이보다 짧은 신호는 허용하지 않습니다.

use crate::error::{TransformError, TransformResult};
use std::f64::consts::SQRT_2;

/// Orthonormal wavelet filter. Implementors only provide the scaling filter;
/// the wavelet (high-pass) filter is its quadrature mirror.
pub trait Wavelet: Send + Sync {
    fn name(&self) -> &'static str;

    fn scaling_coefficients(&self) -> &[f64];

    /// Minimum signal length this filter accepts.
    fn wave_length(&self) -> usize {
        self.scaling_coefficients().len()
    }

    /// `g[j] = (-1)^j * h[L-1-j]`
    fn wavelet_coefficients(&self) -> Vec<f64> {
        let h = self.scaling_coefficients();
        let len = h.len();
        (0..len)
            .map(|j| {
                let v = h[len - 1 - j];
                if j % 2 == 0 {
                    v
                } else {
                    -v
                }
            })
            .collect()
    }

    /// One forward filter step: time domain to `[approximation | detail]`.
    fn forward(&self, signal: &[f64]) -> TransformResult<Vec<f64>> {
        check_filter_length(signal.len(), self.wave_length())?;

        let n = signal.len();
        let half = n / 2;
        let h = self.scaling_coefficients();
        let g = self.wavelet_coefficients();
        let mut out = vec![0.0; n];

        for i in 0..half {
            let mut approx = 0.0;
            let mut detail = 0.0;
            for (j, (&hj, &gj)) in h.iter().zip(g.iter()).enumerate() {
                let k = (2 * i + j) % n;
                approx += signal[k] * hj;
                detail += signal[k] * gj;
            }
            out[i] = approx;
            out[i + half] = detail;
        }
        Ok(out)
    }

    /// Inverse of [`Wavelet::forward`].
    fn reverse(&self, coefficients: &[f64]) -> TransformResult<Vec<f64>> {
        check_filter_length(coefficients.len(), self.wave_length())?;

        let n = coefficients.len();
        let half = n / 2;
        let h = self.scaling_coefficients();
        let g = self.wavelet_coefficients();
        let mut out = vec![0.0; n];

        for i in 0..half {
            let approx = coefficients[i];
            let detail = coefficients[i + half];
            for (j, (&hj, &gj)) in h.iter().zip(g.iter()).enumerate() {
                let k = (2 * i + j) % n;
                out[k] += approx * hj + detail * gj;
            }
        }
        Ok(out)
    }
}

fn check_filter_length(len: usize, wave_length: usize) -> TransformResult<()> {
    if len == 0 {
        return Err(TransformError::EmptySignal);
    }
    if !len.is_power_of_two() {
        return Err(TransformError::NotPowerOfTwo { len });
    }
    if len < wave_length {
        return Err(TransformError::TooShort {
            len,
            min: wave_length,
        });
    }
    Ok(())
}

const HAAR_SCALING: [f64; 2] = [1.0 / SQRT_2, 1.0 / SQRT_2];

/// Haar filter, wave length 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haar;

impl Wavelet for Haar {
    fn name(&self) -> &'static str {
        "haar"
    }

    fn scaling_coefficients(&self) -> &[f64] {
        &HAAR_SCALING
    }
}

/// Daubechies filter with four taps (two vanishing moments), wave length 4.
#[derive(Debug, Clone)]
pub struct Daubechies4 {
    scaling: [f64; 4],
}

impl Daubechies4 {
    pub fn new() -> Self {
        let sqrt3 = 3.0f64.sqrt();
        let denom = 4.0 * SQRT_2;
        Self {
            scaling: [
                (1.0 + sqrt3) / denom,
                (3.0 + sqrt3) / denom,
                (3.0 - sqrt3) / denom,
                (1.0 - sqrt3) / denom,
            ],
        }
    }
}

impl Default for Daubechies4 {
    fn default() -> Self {
        Self::new()
    }
}

impl Wavelet for Daubechies4 {
    fn name(&self) -> &'static str {
        "daubechies4"
    }

    fn scaling_coefficients(&self) -> &[f64] {
        &self.scaling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haar_single_step() {
        let out = Haar.forward(&[3.0, 1.0, 4.0, 4.0]).unwrap();
        assert_relative_eq!(out[0], 4.0 / SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(out[1], 8.0 / SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(out[2], 2.0 / SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(out[3], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_filters_are_orthonormal() {
        for wavelet in [&Haar as &dyn Wavelet, &Daubechies4::new()] {
            let h = wavelet.scaling_coefficients();
            let g = wavelet.wavelet_coefficients();
            let hh: f64 = h.iter().map(|v| v * v).sum();
            let gg: f64 = g.iter().map(|v| v * v).sum();
            let hg: f64 = h.iter().zip(g.iter()).map(|(a, b)| a * b).sum();
            assert_relative_eq!(hh, 1.0, epsilon = 1e-12);
            assert_relative_eq!(gg, 1.0, epsilon = 1e-12);
            assert_relative_eq!(hg, 0.0, epsilon = 1e-12);
            // 세부 필터는 상수 신호를 소거해야 함
            assert_relative_eq!(g.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_constant_signal_has_zero_detail() {
        let signal = [5.0; 8];
        for wavelet in [&Haar as &dyn Wavelet, &Daubechies4::new()] {
            let out = wavelet.forward(&signal).unwrap();
            for v in &out[4..] {
                assert_relative_eq!(*v, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_round_trip() {
        let signal = [1.5, -2.0, 3.25, 0.0, 7.0, 7.5, -1.0, 2.0];
        for wavelet in [&Haar as &dyn Wavelet, &Daubechies4::new()] {
            let coeffs = wavelet.forward(&signal).unwrap();
            let back = wavelet.reverse(&coeffs).unwrap();
            for (a, b) in signal.iter().zip(back.iter()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_invalid_lengths() {
        assert_eq!(Haar.forward(&[]), Err(TransformError::EmptySignal));
        assert_eq!(
            Haar.forward(&[1.0, 2.0, 3.0]),
            Err(TransformError::NotPowerOfTwo { len: 3 })
        );
        assert_eq!(
            Haar.reverse(&[1.0]),
            Err(TransformError::TooShort { len: 1, min: 2 })
        );
        assert_eq!(
            Daubechies4::new().forward(&[1.0, 2.0]),
            Err(TransformError::TooShort { len: 2, min: 4 })
        );
    }
}
