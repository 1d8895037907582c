// Strategies for points and point sets.
//
// Coordinates are small integers stored as f64 so that areas and cross
// products are computed without rounding.
use crate::data::Point;

use core::ops::Range;
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeSet;

const COORD_RANGE: Range<i32> = -1000..1000;

pub fn any_point() -> impl Strategy<Value = Point> {
  (COORD_RANGE, COORD_RANGE).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

/// Point sets with pairwise distinct x coordinates and no three points on a line.
pub fn general_position_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_point(), size).prop_filter("points must be in general position", |pts| {
    in_general_position(pts)
  })
}

pub fn in_general_position(pts: &[Point]) -> bool {
  let mut xs = BTreeSet::new();
  if !pts.iter().all(|pt| xs.insert(pt.x_coord() as i64)) {
    return false;
  }
  for (i, a) in pts.iter().enumerate() {
    for (j, b) in pts.iter().enumerate().skip(i + 1) {
      for c in pts.iter().skip(j + 1) {
        if Point::orient(a, b, c).is_colinear() {
          return false;
        }
      }
    }
  }
  true
}

/// Sorted copy of the coordinates, used to compare point multisets.
pub fn sorted_points(pts: &[Point]) -> Vec<Point> {
  let mut out = pts.to_vec();
  out.sort_by_key(Point::xy_key);
  out
}
