use super::config::AnnealingConfig;
use super::moves::{propose_simple_move, MoveKind};
use super::sink::{Progress, ProgressSink};
use crate::algorithms::polygonization::new_monotone_polygon;
use crate::data::{Point, Polygon};
use crate::Error;

use log::{debug, warn};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

/// Outcome of an annealing run.
#[derive(Debug, Clone)]
pub struct Annealed {
  /// Polygon held when the run stopped. This is not necessarily the best one.
  pub polygon: Polygon,
  pub area: f64,

  /// Best polygon seen, in the direction of the objective.
  pub best_polygon: Polygon,
  pub best_area: f64,

  /// Steps completed.
  pub steps: usize,
  /// Accepted moves, improving ones included.
  pub accepted_moves: usize,
  pub improving_moves: usize,
  pub cancelled: bool,
}

impl Annealed {
  fn unchanged(polygon: Polygon) -> Annealed {
    let area = polygon.area();
    Annealed {
      best_polygon: polygon.clone(),
      polygon,
      area,
      best_area: area,
      steps: 0,
      accepted_moves: 0,
      improving_moves: 0,
      cancelled: false,
    }
  }
}

/// Anneal a simple polygon.
///
/// The vertices are only ever reordered. Every polygon handed to `sink` is
/// simple, and so are the returned polygons unless the start was degenerate.
///
/// # Errors
///
/// * [`Error::InvalidConfig`] if `config` does not validate.
/// * [`Error::InsufficientVertices`] for fewer than three vertices.
/// * [`Error::SelfIntersections`] if `polygon` is not simple. Degenerate
///   vertex sets (all colinear, or with a repeated point) are the exception:
///   they are returned unchanged after zero steps.
/// * [`Error::NoValidMove`] if a step runs out of attempts.
pub fn anneal<R, S>(
  polygon: Polygon,
  config: &AnnealingConfig,
  rng: &mut R,
  sink: &mut S,
) -> Result<Annealed, Error>
where
  R: Rng + ?Sized,
  S: ProgressSink + ?Sized,
{
  anneal_with_cancel(polygon, config, rng, sink, None)
}

/// Like [`anneal`] but stops early once `cancel` is set. The flag is checked
/// before every step.
pub fn anneal_with_cancel<R, S>(
  mut polygon: Polygon,
  config: &AnnealingConfig,
  rng: &mut R,
  sink: &mut S,
  cancel: Option<&AtomicBool>,
) -> Result<Annealed, Error>
where
  R: Rng + ?Sized,
  S: ProgressSink + ?Sized,
{
  config.validate()?;
  match polygon.validate() {
    Ok(()) => {}
    // Colinear or repeated vertices can leave no simple order to search.
    Err(Error::SelfIntersections) if polygon.is_degenerate() => {
      warn!(
        "Degenerate vertex set of {} points has no simple order; returning it unchanged",
        polygon.len()
      );
      return Ok(Annealed::unchanged(polygon));
    }
    Err(err) => return Err(err),
  }

  let objective = config.objective;
  let mut cost = objective.cost(polygon.area());
  let mut best_cost = cost;
  let mut best_polygon = polygon.clone();

  let checkpoint_every = config.steps / config.checkpoints;
  let mut steps = 0;
  let mut accepted_moves = 0;
  let mut improving_moves = 0;
  let mut cancelled = false;

  debug!(
    "Annealing {} vertices: steps={}, T0={}, three_swaps={}, area={:.4}",
    polygon.len(),
    config.steps,
    config.initial_temperature,
    config.three_swaps,
    polygon.area()
  );

  for step in 1..=config.steps {
    if cancel.map_or(false, |flag| flag.load(Ordering::Relaxed)) {
      cancelled = true;
      break;
    }

    // Heat up again when the current solution has drifted from the best one.
    let stagnation = if cost == 0.0 {
      1.0
    } else {
      1.0 + (cost - best_cost) / cost.abs()
    };
    let temperature = stagnation
      * config
        .cooling
        .temperature(config.initial_temperature, step, config.steps);

    let kind = if config.three_swaps && rng.gen_bool(0.5) {
      MoveKind::Rotate
    } else {
      MoveKind::Swap
    };
    let mv = propose_simple_move(&mut polygon, kind, config.max_attempts, rng).map_err(|err| {
      warn!(
        "No simple {:?} move after {} attempts at step {}",
        kind, config.max_attempts, step
      );
      err
    })?;

    // Metropolis criterion
    let candidate = objective.cost(polygon.area());
    if candidate < cost {
      cost = candidate;
      accepted_moves += 1;
      improving_moves += 1;
    } else {
      let probability = ((cost - candidate) / temperature).exp();
      if rng.gen::<f64>() < probability {
        cost = candidate;
        accepted_moves += 1;
      } else {
        mv.undo(&mut polygon);
      }
    }

    if cost < best_cost {
      best_cost = cost;
      best_polygon.clone_from(&polygon);
    }
    steps = step;

    if checkpoint_every == 0 || step == 1 || step % checkpoint_every == 0 {
      let progress = Progress {
        test_id: config.test_id,
        area: objective.area(cost),
        best_area: objective.area(best_cost),
        step,
        total_steps: config.steps,
        temperature,
      };
      sink.receive(&polygon, &progress);
    }
  }

  let area = polygon.area();
  let best_area = objective.area(best_cost);
  debug!(
    "Annealing done after {} steps: area={:.4}, best={:.4}, accepted={}, cancelled={}",
    steps, area, best_area, accepted_moves, cancelled
  );

  Ok(Annealed {
    polygon,
    area,
    best_polygon,
    best_area,
    steps,
    accepted_moves,
    improving_moves,
    cancelled,
  })
}

/// Build a monotone polygon through `points` and anneal it.
///
/// Colinear or duplicated inputs whose monotone polygon is not simple come
/// back unchanged, with zero steps taken.
pub fn optimize_points<R, S>(
  points: Vec<Point>,
  config: &AnnealingConfig,
  rng: &mut R,
  sink: &mut S,
) -> Result<Annealed, Error>
where
  R: Rng + ?Sized,
  S: ProgressSink + ?Sized,
{
  let polygon = new_monotone_polygon(points)?;
  anneal(polygon, config, rng, sink)
}
