#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Simple polygons through every point of a point set, reordered by simulated
//! annealing to drive the enclosed area down (or up).
//!
//! ```rust
//! # use polyanneal::algorithms::annealing::{anneal, AnnealingConfig, NullSink};
//! # use polyanneal::algorithms::polygonization::new_monotone_polygon;
//! # use polyanneal::data::Point;
//! # use rand::SeedableRng;
//! let pts = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([2.0, 0.0]),
//!   Point::new([2.0, 2.0]),
//!   Point::new([0.0, 2.0]),
//!   Point::new([1.0, 1.0]),
//! ];
//! let start = new_monotone_polygon(pts)?;
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
//! let config = AnnealingConfig::default().with_steps(50);
//! let annealed = anneal(start, &config, &mut rng, &mut NullSink)?;
//! assert!(!annealed.polygon.is_self_intersecting());
//! assert!(annealed.best_area <= 4.0);
//! # Ok::<(), polyanneal::Error>(())
//! ```

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;

pub use orientation::{Orientation, Side};

pub use intersection::Intersects;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  SelfIntersections,
  /// The simplicity gate ran out of attempts without finding a move that
  /// keeps the polygon simple.
  NoValidMove,
  NonFiniteCoordinate,
  InvalidConfig,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::SelfIntersections => write!(f, "Self intersections"),
      Error::NoValidMove => write!(f, "No valid move found"),
      Error::NonFiniteCoordinate => write!(f, "Coordinate is NaN or infinite"),
      Error::InvalidConfig => write!(f, "Invalid annealing configuration"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
