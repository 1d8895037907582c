use crate::data::Polygon;
use crate::Error;

use log::trace;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
  Swap,
  Rotate,
}

/// A reversible reordering of polygon vertices.
///
/// Indices may repeat. A repeated index degrades the move to a smaller
/// permutation (or a no-op) and `undo` still restores the exact previous order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
  /// Exchange two vertices.
  Swap(usize, usize),
  /// Vertex at `.1` moves to `.0`, `.2` moves to `.1`, `.0` moves to `.2`.
  Rotate(usize, usize, usize),
}

impl Move {
  /// Draw a move with indices uniform in `0..n`.
  ///
  /// # Panics
  ///
  /// Panics if `n` is zero.
  pub fn random<R>(kind: MoveKind, n: usize, rng: &mut R) -> Move
  where
    R: Rng + ?Sized,
  {
    match kind {
      MoveKind::Swap => {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        Move::Swap(a, b)
      }
      MoveKind::Rotate => {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        let c = rng.gen_range(0..n);
        Move::Rotate(a, b, c)
      }
    }
  }

  pub fn kind(self) -> MoveKind {
    match self {
      Move::Swap(..) => MoveKind::Swap,
      Move::Rotate(..) => MoveKind::Rotate,
    }
  }

  pub fn apply(self, poly: &mut Polygon) {
    match self {
      Move::Swap(a, b) => poly.swap_vertices(a, b),
      Move::Rotate(a, b, c) => poly.rotate_vertices(a, b, c),
    }
  }

  pub fn undo(self, poly: &mut Polygon) {
    match self {
      Move::Swap(a, b) => poly.swap_vertices(a, b),
      Move::Rotate(a, b, c) => poly.unrotate_vertices(a, b, c),
    }
  }
}

/// Apply random moves of the given kind until the polygon is simple again.
///
/// Every rejected draw is undone before the next one is applied. After
/// `max_attempts` rejected draws the polygon is left in its original order and
/// [`Error::NoValidMove`] is returned.
///
/// The polygon must have at least one vertex.
pub fn propose_simple_move<R>(
  poly: &mut Polygon,
  kind: MoveKind,
  max_attempts: usize,
  rng: &mut R,
) -> Result<Move, Error>
where
  R: Rng + ?Sized,
{
  let n = poly.len();
  for attempt in 1..=max_attempts {
    let mv = Move::random(kind, n, rng);
    mv.apply(poly);
    if !poly.is_self_intersecting() {
      if attempt > 1 {
        trace!("{:?} found after {} attempts", mv, attempt);
      }
      return Ok(mv);
    }
    mv.undo(poly);
  }
  Err(Error::NoValidMove)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Point;

  use claims::assert_ok;
  use rand::rngs::mock::StepRng;
  use rand::SeedableRng;

  fn square() -> Polygon {
    Polygon::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([0.0, 1.0]),
      Point::new([1.0, 1.0]),
      Point::new([1.0, 0.0]),
    ])
  }

  #[test]
  fn swap_round_trip() {
    let mut poly = square();
    let mv = Move::Swap(0, 2);
    mv.apply(&mut poly);
    assert_eq!(poly.point(0), &Point::new([1.0, 1.0]));
    assert_eq!(poly.point(2), &Point::new([0.0, 0.0]));
    mv.undo(&mut poly);
    assert_eq!(poly, square());
  }

  #[test]
  fn rotate_round_trip() {
    let mut poly = square();
    let mv = Move::Rotate(0, 1, 3);
    mv.apply(&mut poly);
    assert_eq!(poly.point(0), &Point::new([0.0, 1.0]));
    assert_eq!(poly.point(1), &Point::new([1.0, 0.0]));
    assert_eq!(poly.point(3), &Point::new([0.0, 0.0]));
    mv.undo(&mut poly);
    assert_eq!(poly, square());
  }

  #[test]
  fn repeated_indices_round_trip() {
    for mv in [
      Move::Swap(1, 1),
      Move::Rotate(2, 2, 2),
      Move::Rotate(0, 0, 3),
      Move::Rotate(0, 3, 3),
      Move::Rotate(3, 1, 3),
    ] {
      let mut poly = square();
      mv.apply(&mut poly);
      mv.undo(&mut poly);
      assert_eq!(poly, square(), "{:?}", mv);
    }
  }

  #[test]
  fn random_indices_in_range() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(3);
    for _ in 0..1000 {
      match Move::random(MoveKind::Rotate, 7, &mut rng) {
        Move::Rotate(a, b, c) => assert!(a < 7 && b < 7 && c < 7),
        other => panic!("unexpected move: {:?}", other),
      }
      assert_eq!(Move::random(MoveKind::Swap, 7, &mut rng).kind(), MoveKind::Swap);
    }
  }

  #[test]
  fn gate_keeps_polygon_simple() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(11);
    let mut poly = square();
    for _ in 0..100 {
      let kind = if rng.gen_bool(0.5) {
        MoveKind::Swap
      } else {
        MoveKind::Rotate
      };
      assert_ok!(propose_simple_move(&mut poly, kind, 1000, &mut rng));
      assert!(!poly.is_self_intersecting());
    }
  }

  #[test]
  fn gate_gives_up() {
    // The first draw is Swap(0, 1), which turns the square into a bow tie.
    let mut rng = StepRng::new(0, 1 << 62);
    let mut poly = square();
    assert_eq!(
      propose_simple_move(&mut poly, MoveKind::Swap, 1, &mut rng),
      Err(Error::NoValidMove)
    );
    assert_eq!(poly, square());
  }
}
