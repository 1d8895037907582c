use crate::data::LineSegment;
use crate::data::Point;

pub struct Iter<'a> {
  pub(crate) iter: std::slice::Iter<'a, Point>,
}

impl<'a> Iterator for Iter<'a> {
  type Item = &'a Point;
  fn next(&mut self) -> Option<&'a Point> {
    self.iter.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl ExactSizeIterator for Iter<'_> {}

/// Cyclic edges of a polygon: edge `i` runs from vertex `i` to vertex `(i+1) % n`.
pub struct EdgeIter<'a> {
  pub(crate) points: &'a [Point],
  pub(crate) index: usize,
}

impl Iterator for EdgeIter<'_> {
  type Item = LineSegment;
  fn next(&mut self) -> Option<LineSegment> {
    let n = self.points.len();
    if self.index >= n {
      return None;
    }
    let src = self.points[self.index];
    let dst = self.points[(self.index + 1) % n];
    self.index += 1;
    Some(LineSegment::new(src, dst))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.points.len().saturating_sub(self.index);
    (len, Some(len))
  }
}

impl ExactSizeIterator for EdgeIter<'_> {}
