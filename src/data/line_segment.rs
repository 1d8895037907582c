use super::Point;

use crate::Intersects;
use crate::Side;

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Closed line segment between two points. Both endpoints belong to the segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
  pub src: Point,
  pub dst: Point,
}

impl LineSegment {
  pub fn new(src: Point, dst: Point) -> LineSegment {
    LineSegment { src, dst }
  }

  pub fn length(&self) -> f64 {
    self.src.distance(&self.dst)
  }

  fn min_coord(&self, axis: usize) -> f64 {
    self.src.array[axis].min(self.dst.array[axis])
  }

  fn max_coord(&self, axis: usize) -> f64 {
    self.src.array[axis].max(self.dst.array[axis])
  }

  /// True if the axis-aligned bounding boxes of the two segments overlap (or touch)
  /// on both axes.
  pub fn bounding_boxes_overlap(&self, other: &LineSegment) -> bool {
    (0..2).all(|axis| {
      self.min_coord(axis) <= other.max_coord(axis) && other.min_coord(axis) <= self.max_coord(axis)
    })
  }

  /// Endpoints of `other` compared against the line through `self`.
  pub fn side_of(&self, other: &LineSegment) -> Side {
    Side::new(&other.src, &other.dst, &self.src, &self.dst)
  }
}

impl From<(Point, Point)> for LineSegment {
  fn from((src, dst): (Point, Point)) -> LineSegment {
    LineSegment::new(src, dst)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Intersection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ILineSegment {
  /// The interiors cross at a single point.
  Crossing,
  /// An endpoint lies on the other segment or the segments overlap along a line.
  Touching,
}

impl Intersects for &LineSegment {
  type Result = ILineSegment;

  /// ```rust
  /// # use polyanneal::data::*;
  /// # use polyanneal::Intersects;
  /// let a = LineSegment::new(Point::new([0.0, 0.0]), Point::new([2.0, 2.0]));
  /// let b = LineSegment::new(Point::new([0.0, 2.0]), Point::new([2.0, 0.0]));
  /// let c = LineSegment::new(Point::new([2.0, 2.0]), Point::new([3.0, 0.0]));
  /// assert_eq!(a.intersect(&b), Some(ILineSegment::Crossing));
  /// assert_eq!(a.intersect(&c), Some(ILineSegment::Touching));
  /// ```
  fn intersect(self, other: &LineSegment) -> Option<ILineSegment> {
    let other_side = self.side_of(other);
    let self_side = other.side_of(self);
    if other_side.is_same() || self_side.is_same() || !self.bounding_boxes_overlap(other) {
      return None;
    }
    if other_side == Side::Different && self_side == Side::Different {
      Some(ILineSegment::Crossing)
    } else {
      Some(ILineSegment::Touching)
    }
  }
}

/// Segment-vs-segment test on raw endpoints: does `a-b` meet `c-d`?
pub fn segments_intersect(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
  let ab = LineSegment::new(*a, *b);
  let cd = LineSegment::new(*c, *d);
  ab.intersect(&cd).is_some()
}
