use std::fmt;

use crate::data::LineSegment;
use crate::data::Point;
use crate::Error;
use crate::Intersects;

mod iter;
pub use iter::*;

/// Closed vertex sequence. Edge `i` connects vertex `i` to vertex `(i+1) % n`.
///
/// A polygon is not required to be simple. Use [`Polygon::new`] to get a checked
/// polygon or [`Polygon::new_unchecked`] to wrap any vertex order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
  pub(crate) points: Vec<Point>,
}

impl Polygon {
  pub fn new_unchecked(points: Vec<Point>) -> Polygon {
    Polygon { points }
  }

  pub fn new(points: Vec<Point>) -> Result<Polygon, Error> {
    let p = Self::new_unchecked(points);
    p.validate()?;
    Ok(p)
  }

  // Validate that a polygon is simple.
  // https://en.wikipedia.org/wiki/Simple_polygon
  pub fn validate(&self) -> Result<(), Error> {
    if self.points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    if self.is_self_intersecting() {
      return Err(Error::SelfIntersections);
    }
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn point(&self, idx: usize) -> &Point {
    &self.points[idx]
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point> {
    self.points
  }

  pub fn iter(&self) -> Iter<'_> {
    Iter {
      iter: self.points.iter(),
    }
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_> {
    EdgeIter {
      points: &self.points,
      index: 0,
    }
  }

  /// Edge from vertex `idx` to its cyclic successor.
  pub fn edge(&self, idx: usize) -> LineSegment {
    let n = self.points.len();
    LineSegment::new(self.points[idx], self.points[(idx + 1) % n])
  }

  /// Twice the signed area. Positive for counter-clockwise vertex orders.
  pub fn signed_area_2x(&self) -> f64 {
    self
      .iter_boundary_edges()
      .map(|edge| {
        let p = edge.src;
        let q = edge.dst;
        (p.array[0] + q.array[0]) * (q.array[1] - p.array[1])
      })
      .sum()
  }

  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  /// Enclosed area by the shoelace formula, independent of orientation.
  ///
  /// Self-intersecting vertex orders still get a (meaningless but finite) value.
  pub fn area(&self) -> f64 {
    self.signed_area().abs()
  }

  /// All vertices on one line, or some vertex repeated. Such vertex sets may
  /// have no simple order at all.
  pub fn is_degenerate(&self) -> bool {
    Point::all_colinear(&self.points) || Point::has_duplicates(&self.points)
  }

  pub fn perimeter(&self) -> f64 {
    self.iter_boundary_edges().map(|edge| edge.length()).sum()
  }

  /// True if any two non-adjacent edges touch or cross. Edge `0` and edge `n-1`
  /// share vertex `0` and are treated as adjacent.
  ///
  /// # Time complexity
  /// $O(n^2)$
  pub fn is_self_intersecting(&self) -> bool {
    let n = self.points.len();
    for i in 0..n {
      let e1 = self.edge(i);
      for j in i + 2..n {
        if i == 0 && j == n - 1 {
          continue;
        }
        if e1.intersect(&self.edge(j)).is_some() {
          return true;
        }
      }
    }
    false
  }

  pub fn swap_vertices(&mut self, a: usize, b: usize) {
    self.points.swap(a, b);
  }

  // Vertex at b moves to a, c moves to b, a moves to c.
  // Repeated indices are allowed; `unrotate_vertices` is always the exact inverse.
  pub fn rotate_vertices(&mut self, a: usize, b: usize, c: usize) {
    self.points.swap(a, b);
    self.points.swap(b, c);
  }

  pub fn unrotate_vertices(&mut self, a: usize, b: usize, c: usize) {
    self.points.swap(b, c);
    self.points.swap(a, b);
  }
}

impl fmt::Display for Polygon {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (nth, pt) in self.points.iter().enumerate() {
      if nth > 0 {
        write!(f, " ")?;
      }
      write!(f, "({} {})", pt.array[0], pt.array[1])?;
    }
    Ok(())
  }
}
