/// Intersection test between two shapes.
///
/// `None` means the shapes are disjoint. Otherwise `Result` describes how they
/// meet, e.g. [`ILineSegment`](crate::data::ILineSegment) for segment pairs.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
