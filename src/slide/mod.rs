//! # 슬라이드 파라미터 추출
//!
//! 단어를 키보드 위에서 손가락으로 그린 경로로 보고, 그 모양을 고정 길이
//! 특징 벡터로 요약합니다.
//!
//! 1. 단어 정규화 (ASCII 알파벳만 남기고 소문자화)
//! 2. 문자 → 키 좌표 (하나라도 매핑이 없으면 단어 전체 실패)
//! 3. x, y 축을 호 길이 기준으로 균등 리샘플링
//! 4. 고대 이집트 분해 + Haar 웨이블릿 변환
//! 5. `[예약 0.0 | x 선행 계수 | y 선행 계수]` 조립

pub mod config;
pub mod keyboard;
pub mod output;
pub mod pipeline;
pub mod wordlist;

pub use self::config::{ParameterMode, SlideConfig, TransformKind};
pub use self::keyboard::KeyLayout;
pub use self::output::{format_row, write_rows, write_skipped};
pub use self::pipeline::{process_words, BatchReport, SkippedWord};
pub use self::wordlist::{parse_word_list, read_word_list};

use crate::error::{SlideError, SlideResult};
use crate::ops::geometry::{polygon_length, segment_lengths, split_axes, Point};
use crate::ops::resample::resample;
use crate::transform::{
    AncientEgyptianDecomposition, FastWaveletTransform, Haar, PacketTransform, Transform,
    WaveletStep,
};
use tracing::trace;

/// Fixed-length feature vector for one word. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideParameters {
    values: Vec<f64>,
    reserved: usize,
    per_axis: usize,
}

impl SlideParameters {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Leading reserved slots (always zero).
    pub fn reserved(&self) -> &[f64] {
        &self.values[..self.reserved]
    }

    pub fn x_coefficients(&self) -> &[f64] {
        &self.values[self.reserved..self.reserved + self.per_axis]
    }

    pub fn y_coefficients(&self) -> &[f64] {
        &self.values[self.reserved + self.per_axis..]
    }
}

/// Drops every character outside `a-zA-Z` and lower-cases the rest.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Turns words into [`SlideParameters`]. Holds no per-word state, so one
/// extractor can serve many threads.
pub struct SlideExtractor {
    config: SlideConfig,
    transform: Box<dyn Transform>,
}

impl SlideExtractor {
    pub fn new(config: SlideConfig) -> Self {
        let transform: Box<dyn Transform> = match config.transform {
            TransformKind::FastWavelet => Box::new(AncientEgyptianDecomposition::new(
                FastWaveletTransform::new(Haar),
            )),
            TransformKind::Packet => {
                Box::new(AncientEgyptianDecomposition::new(PacketTransform::new(Haar)))
            }
            TransformKind::SingleStep => {
                Box::new(AncientEgyptianDecomposition::new(WaveletStep::new(Haar)))
            }
        };
        Self { config, transform }
    }

    /// Uses a caller-supplied transform instead of the configured Haar one.
    pub fn with_transform(config: SlideConfig, transform: Box<dyn Transform>) -> Self {
        Self { config, transform }
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    pub fn transform_name(&self) -> String {
        self.transform.name()
    }

    pub fn extract(&self, word: &str, layout: &KeyLayout) -> SlideResult<SlideParameters> {
        let norm = normalize_word(word);
        if norm.is_empty() {
            return Err(SlideError::EmptyWord);
        }

        let points = norm
            .chars()
            .map(|ch| layout.get(ch).ok_or(SlideError::UnmappedCharacter { ch }))
            .collect::<SlideResult<Vec<Point>>>()?;
        if points.len() < 2 {
            return Err(SlideError::TooFewPoints {
                points: points.len(),
            });
        }

        let (xs, ys) = split_axes(&points);
        self.extract_from_axes(&xs, &ys)
    }

    /// Runs the signal part of the pipeline on coordinate arrays directly.
    pub fn extract_from_axes(&self, xs: &[f64], ys: &[f64]) -> SlideResult<SlideParameters> {
        if xs.len() != ys.len() {
            return Err(SlideError::AxisMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(SlideError::TooFewPoints { points: xs.len() });
        }

        let segments = segment_lengths(xs, ys);
        let total = polygon_length(xs, ys);
        trace!(points = xs.len(), total, "path length");

        let n = self.config.resample_count;
        let rx = resample(xs, &segments, n)?;
        let ry = resample(ys, &segments, n)?;

        match self.config.mode {
            ParameterMode::Resampled => {
                let mut values = rx;
                values.extend(ry);
                Ok(SlideParameters {
                    values,
                    reserved: 0,
                    per_axis: n,
                })
            }
            ParameterMode::Wavelet => {
                let cx = self.transform.forward_with(&rx, self.config.levels)?;
                let cy = self.transform.forward_with(&ry, self.config.levels)?;

                let per_axis = self.config.coefficients_per_axis.min(n);
                let reserved = self.config.reserved_slots;
                let mut values = vec![0.0; reserved];
                values.extend_from_slice(&cx[..per_axis]);
                values.extend_from_slice(&cy[..per_axis]);
                Ok(SlideParameters {
                    values,
                    reserved,
                    per_axis,
                })
            }
        }
    }
}

impl Default for SlideExtractor {
    fn default() -> Self {
        Self::new(SlideConfig::default())
    }
}
