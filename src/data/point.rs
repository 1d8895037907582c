use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::collections::BTreeSet;
use std::ops::Deref;
use std::ops::Index;

use crate::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    let dx = rhs.array[0] - self.array[0];
    let dy = rhs.array[1] - self.array[1];
    dx * dx + dy * dy
  }

  /// ```rust
  /// # use polyanneal::data::Point;
  /// assert_eq!(Point::new([0.0, 0.0]).distance(&Point::new([3.0, 4.0])), 5.0);
  /// ```
  pub fn distance(&self, rhs: &Point) -> f64 {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  pub fn orient(p: &Point, q: &Point, r: &Point) -> Orientation {
    Orientation::new(p, q, r)
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  /// Lexicographic `(x, y)` key with a total order.
  pub fn xy_key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
    (OrderedFloat(self.array[0]), OrderedFloat(self.array[1]))
  }

  pub fn all_colinear(pts: &[Point]) -> bool {
    if pts.len() < 3 {
      return true;
    }
    let p1 = &pts[0];
    // Skip duplicates of the first point so the reference line is well defined.
    match pts.iter().find(|pt| *pt != p1) {
      None => true,
      Some(p2) => pts.iter().all(|p3| Point::orient(p1, p2, p3).is_colinear()),
    }
  }

  /// True if two points share both coordinates.
  pub fn has_duplicates(pts: &[Point]) -> bool {
    let mut seen = BTreeSet::new();
    !pts.iter().all(|pt| seen.insert(pt.xy_key()))
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl Deref for Point {
  type Target = [f64; 2];
  fn deref(&self) -> &[f64; 2] {
    &self.array
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point { array }
  }
}
