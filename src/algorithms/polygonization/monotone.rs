// https://en.wikipedia.org/wiki/Monotone_polygon
use crate::data::{Point, Polygon};
use crate::{Error, Orientation};

use claims::debug_assert_ok;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Connect a set of points into an x-monotone polygon.
///
/// The leftmost and rightmost points split the remaining points into those
/// strictly left of the line `leftmost -> rightmost` (the upper chain) and
/// everything else (the lower chain). The upper chain is walked from left to
/// right, the lower chain from right to left. Ties for the extreme points go
/// to the earliest point in the input.
///
/// The result is simple when the x coordinates are distinct and no point lies
/// on the line through the two extreme points. All-colinear inputs are accepted
/// and give a polygon with zero area.
///
/// # Errors
///
/// * [`Error::InsufficientVertices`] for fewer than three points.
/// * [`Error::NonFiniteCoordinate`] if a coordinate is NaN or infinite.
///
/// # Time complexity
/// $O(n \log n)$
///
/// # Example
///
/// ```rust
/// use polyanneal::algorithms::polygonization::new_monotone_polygon;
/// use polyanneal::data::Point;
///
/// let pts = vec![
///   Point::new([1.0, 1.0]),
///   Point::new([0.0, 0.0]),
///   Point::new([0.0, 1.0]),
///   Point::new([1.0, 0.0]),
/// ];
/// let polygon = new_monotone_polygon(pts).unwrap();
/// assert!(!polygon.is_self_intersecting());
/// assert_eq!(polygon.area(), 1.0);
/// ```
pub fn new_monotone_polygon(points: Vec<Point>) -> Result<Polygon, Error> {
  if points.len() < 3 {
    return Err(Error::InsufficientVertices);
  }
  if !points.iter().all(Point::is_finite) {
    return Err(Error::NonFiniteCoordinate);
  }

  let mut leftmost = 0;
  let mut rightmost = 0;
  for (idx, pt) in points.iter().enumerate().skip(1) {
    if pt.x_coord() < points[leftmost].x_coord() {
      leftmost = idx;
    }
    if pt.x_coord() > points[rightmost].x_coord() {
      rightmost = idx;
    }
  }
  // With equal extremes (all x identical) pick a distinct second anchor.
  if leftmost == rightmost {
    rightmost = if leftmost == 0 { 1 } else { 0 };
  }
  let min = points[leftmost];
  let max = points[rightmost];

  let mut above = Vec::new();
  let mut below = Vec::new();
  let mut on_line = false;
  for (idx, pt) in points.iter().enumerate() {
    if idx == leftmost || idx == rightmost {
      continue;
    }
    match Orientation::new(&min, &max, pt) {
      Orientation::CounterClockWise => above.push(*pt),
      Orientation::CoLinear => {
        on_line = true;
        below.push(*pt)
      }
      Orientation::ClockWise => below.push(*pt),
    }
  }

  above.sort_by_key(Point::xy_key);
  below.sort_by_key(|pt| (Reverse(OrderedFloat(pt.x_coord())), OrderedFloat(pt.y_coord())));

  let mut chain = Vec::with_capacity(points.len());
  chain.push(min);
  chain.extend(above);
  chain.push(max);
  chain.extend(below);
  let polygon = Polygon::new_unchecked(chain);

  if cfg!(debug_assertions) && !on_line && distinct_x(&points) {
    debug_assert_ok!(polygon.validate());
  }
  Ok(polygon)
}

fn distinct_x(points: &[Point]) -> bool {
  let mut seen = BTreeSet::new();
  points.iter().all(|pt| seen.insert(OrderedFloat(pt.x_coord())))
}
