pub mod geometry;
pub mod resample;

pub use self::geometry::{polygon_length, segment_lengths, split_axes, Point};
pub use self::resample::{resample, DEFAULT_RESAMPLE_COUNT};
