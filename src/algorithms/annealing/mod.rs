//! Simulated annealing over vertex orders of a simple polygon.
//!
//! Each step perturbs the order with a random swap (or 3-vertex rotation),
//! redraws until the polygon is simple again, and then keeps or reverts the
//! move with the Metropolis criterion on the polygon's area.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod moves;
mod runner;
mod sink;

pub use config::{AnnealingConfig, CoolingSchedule, Objective};
pub use moves::{propose_simple_move, Move, MoveKind};
pub use runner::{anneal, anneal_with_cancel, optimize_points, Annealed};
pub use sink::{LogSink, NullSink, Progress, ProgressSink};
