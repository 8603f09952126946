//! Text preparation: normalization, segmentation, filename sanitization.

pub mod normalize;
pub mod sanitize;
pub mod segment;

pub use normalize::normalize;
pub use sanitize::sanitize_filename;
pub use segment::{Segment, SegmenterConfig, segment};
