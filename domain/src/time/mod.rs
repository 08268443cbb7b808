//! Point-in-time parsing and normalization.

mod normalize;
mod parse;

pub use normalize::{DateNormalizer, ZoneShift};
pub use parse::parse_time;
