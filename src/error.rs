use thiserror::Error;

/// 변환 엔진 오류 (wavelet filter, packet, pyramid, decomposition).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("empty signal cannot be transformed")]
    EmptySignal,

    #[error("signal length {len} is not a power of two")]
    NotPowerOfTwo { len: usize },

    #[error("signal length {len} is shorter than the wave length {min}")]
    TooShort { len: usize, min: usize },

    #[error("matrix with shape {shape:?} has an empty axis")]
    EmptyAxis { shape: Vec<usize> },
}

/// Per-word failures. None of these abort a batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlideError {
    #[error("word is empty after normalization")]
    EmptyWord,

    #[error("path has {points} point(s), at least 2 are required")]
    TooFewPoints { points: usize },

    #[error("character '{ch}' has no key in the layout")]
    UnmappedCharacter { ch: char },

    #[error("{samples} samples do not match {segments} segment lengths")]
    SegmentMismatch { samples: usize, segments: usize },

    #[error("resample count {count} is below 2")]
    ResampleCount { count: usize },

    #[error("x and y axes differ in length ({x} vs {y})")]
    AxisMismatch { x: usize, y: usize },

    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),
}

/// Input document errors (keyboard layout, word list). Fatal for a run.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("invalid keyboard geometry: {0}")]
    Geometry(String),
}

pub type TransformResult<T> = std::result::Result<T, TransformError>;
pub type SlideResult<T> = std::result::Result<T, SlideError>;
