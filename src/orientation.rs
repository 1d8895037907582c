use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign is computed with an adaptive exact predicate: the result is
  /// `CoLinear` only when the cross product is exactly zero.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use polyanneal::data::Point;
  /// # use polyanneal::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    let orient = geometry_predicates::predicates::orient2d(p1.array, p2.array, p3.array);
    if orient > 0.0 {
      CounterClockWise
    } else if orient < 0.0 {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

/// Where two points lie relative to the line through a third and fourth point.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Side {
  Same,
  Different,
  OnLine,
}

impl Side {
  /// Compare the turns `c -> d -> a` and `c -> d -> b`.
  ///
  /// ```rust
  /// # use polyanneal::data::Point;
  /// # use polyanneal::Side;
  /// let c = Point::new([ 0.0, 0.0 ]);
  /// let d = Point::new([ 4.0, 0.0 ]);
  /// let up = Point::new([ 1.0, 1.0 ]);
  /// let down = Point::new([ 2.0, -1.0 ]);
  /// assert_eq!(Side::new(&up, &up, &c, &d), Side::Same);
  /// assert_eq!(Side::new(&up, &down, &c, &d), Side::Different);
  /// assert_eq!(Side::new(&up, &Point::new([ 9.0, 0.0 ]), &c, &d), Side::OnLine);
  /// ```
  pub fn new(a: &Point, b: &Point, c: &Point, d: &Point) -> Side {
    match (Orientation::new(c, d, a), Orientation::new(c, d, b)) {
      (CoLinear, _) | (_, CoLinear) => Side::OnLine,
      (lhs, rhs) if lhs == rhs => Side::Same,
      _ => Side::Different,
    }
  }

  pub fn is_same(self) -> bool {
    matches!(self, Side::Same)
  }
}
