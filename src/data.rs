mod line_segment;
pub(crate) mod point;
pub mod polygon;

pub use line_segment::*;

#[doc(inline)]
pub use crate::data::polygon::{EdgeIter, Polygon};
pub use point::Point;
