//! Annealing configuration and cooling schedules.

use crate::Error;

/// Maps a step index to a base temperature.
///
/// The runner multiplies the base temperature by a stagnation factor
/// `1 + (cost - best_cost) / |cost|`, so the effective temperature rises again
/// when the current solution drifts away from the best one seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolingSchedule {
  /// `S / (1 + 0.8 * step)` for a run of `S` steps. Ignores the initial temperature.
  Linear,

  /// Logistic variant of multiplicative cooling:
  /// `T0 / (1 + exp(2 ln(T0) / S * (step - S/2)))`.
  ///
  /// Decreasing only when `T0 > 1`.
  Logistic,

  /// Mean of [`Linear`](Self::Linear) and [`Logistic`](Self::Logistic).
  Blended,
}

impl Default for CoolingSchedule {
  fn default() -> Self {
    CoolingSchedule::Blended
  }
}

impl CoolingSchedule {
  /// Base temperature at `step` (1-based) of a run with `steps` steps.
  pub fn temperature(self, initial_temperature: f64, step: usize, steps: usize) -> f64 {
    let step = step as f64;
    let steps = steps as f64;
    let linear = || steps / (1.0 + 0.8 * step);
    let logistic = || {
      let expo = (2.0 * initial_temperature.ln() / steps) * (step - steps / 2.0);
      initial_temperature / (1.0 + expo.exp())
    };
    match self {
      CoolingSchedule::Linear => linear(),
      CoolingSchedule::Logistic => logistic(),
      CoolingSchedule::Blended => (linear() + logistic()) / 2.0,
    }
  }
}

/// Direction of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
  /// Prefer polygons with a smaller area.
  Minimize,
  /// Prefer polygons with a larger area.
  Maximize,
}

impl Default for Objective {
  fn default() -> Self {
    Objective::Minimize
  }
}

impl Objective {
  /// The quantity the runner drives down.
  pub fn cost(self, area: f64) -> f64 {
    match self {
      Objective::Minimize => area,
      Objective::Maximize => -area,
    }
  }

  pub fn area(self, cost: f64) -> f64 {
    match self {
      Objective::Minimize => cost,
      Objective::Maximize => -cost,
    }
  }
}

/// Configuration for [`anneal`](super::anneal).
///
/// # Examples
///
/// ```
/// use polyanneal::algorithms::annealing::{AnnealingConfig, CoolingSchedule, Objective};
///
/// let config = AnnealingConfig::default()
///   .with_steps(20_000)
///   .with_initial_temperature(500.0)
///   .with_three_swaps(true)
///   .with_cooling(CoolingSchedule::Linear)
///   .with_objective(Objective::Maximize);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingConfig {
  /// Number of steps. Every step proposes exactly one move.
  pub steps: usize,

  /// Initial temperature, used by the logistic part of the schedule.
  pub initial_temperature: f64,

  /// Propose 3-vertex rotations half of the time instead of only 2-vertex swaps.
  pub three_swaps: bool,

  pub cooling: CoolingSchedule,

  pub objective: Objective,

  /// Draws allowed per step before the run gives up with [`Error::NoValidMove`].
  pub max_attempts: usize,

  /// Sets the report cadence: a progress report goes out at step 1 and every
  /// `steps / checkpoints` steps after that, or at every step when
  /// `steps < checkpoints`. A run therefore reports about `checkpoints + 1`
  /// times, and up to `2 * checkpoints - 1` times when `steps` is not a multiple.
  pub checkpoints: usize,

  /// Label copied into every progress report.
  pub test_id: usize,
}

impl Default for AnnealingConfig {
  fn default() -> Self {
    Self {
      steps: 1000,
      initial_temperature: 100.0,
      three_swaps: false,
      cooling: CoolingSchedule::default(),
      objective: Objective::default(),
      max_attempts: 100_000,
      checkpoints: 100,
      test_id: 0,
    }
  }
}

impl AnnealingConfig {
  pub fn with_steps(mut self, steps: usize) -> Self {
    self.steps = steps;
    self
  }

  pub fn with_initial_temperature(mut self, t: f64) -> Self {
    self.initial_temperature = t;
    self
  }

  pub fn with_three_swaps(mut self, enabled: bool) -> Self {
    self.three_swaps = enabled;
    self
  }

  pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
    self.cooling = cooling;
    self
  }

  pub fn with_objective(mut self, objective: Objective) -> Self {
    self.objective = objective;
    self
  }

  pub fn with_max_attempts(mut self, n: usize) -> Self {
    self.max_attempts = n;
    self
  }

  pub fn with_checkpoints(mut self, n: usize) -> Self {
    self.checkpoints = n;
    self
  }

  pub fn with_test_id(mut self, id: usize) -> Self {
    self.test_id = id;
    self
  }

  pub fn validate(&self) -> Result<(), Error> {
    if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
      return Err(Error::InvalidConfig);
    }
    if self.cooling == CoolingSchedule::Logistic && self.initial_temperature <= 1.0 {
      return Err(Error::InvalidConfig);
    }
    if self.max_attempts == 0 || self.checkpoints == 0 {
      return Err(Error::InvalidConfig);
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err, assert_ok};

  #[test]
  fn default_config() {
    let config = AnnealingConfig::default();
    assert_ok!(config.validate());
    assert_eq!(config.cooling, CoolingSchedule::Blended);
    assert_eq!(config.objective, Objective::Minimize);
    assert!(!config.three_swaps);
  }

  #[test]
  fn bad_temperature() {
    assert_err!(AnnealingConfig::default().with_initial_temperature(0.0).validate());
    assert_err!(AnnealingConfig::default().with_initial_temperature(-5.0).validate());
    assert_err!(AnnealingConfig::default().with_initial_temperature(f64::NAN).validate());
    assert_err!(AnnealingConfig::default()
      .with_initial_temperature(f64::INFINITY)
      .validate());
  }

  #[test]
  fn logistic_needs_hot_start() {
    let config = AnnealingConfig::default().with_initial_temperature(0.5);
    assert_ok!(config.clone().with_cooling(CoolingSchedule::Linear).validate());
    assert_eq!(
      config.with_cooling(CoolingSchedule::Logistic).validate(),
      Err(Error::InvalidConfig)
    );
  }

  #[test]
  fn zero_attempts_or_checkpoints() {
    assert_err!(AnnealingConfig::default().with_max_attempts(0).validate());
    assert_err!(AnnealingConfig::default().with_checkpoints(0).validate());
  }

  #[test]
  fn zero_steps_is_valid() {
    assert_ok!(AnnealingConfig::default().with_steps(0).validate());
  }

  #[test]
  fn linear_schedule() {
    let schedule = CoolingSchedule::Linear;
    assert_eq!(schedule.temperature(100.0, 0, 1000), 1000.0);
    assert_eq!(schedule.temperature(100.0, 5, 1000), 200.0);
  }

  #[test]
  fn logistic_midpoint() {
    // At the midpoint the exponent is zero and the temperature is T0 / 2.
    let schedule = CoolingSchedule::Logistic;
    assert_eq!(schedule.temperature(100.0, 500, 1000), 50.0);
  }

  #[test]
  fn schedules_decrease() {
    for schedule in [
      CoolingSchedule::Linear,
      CoolingSchedule::Logistic,
      CoolingSchedule::Blended,
    ] {
      let mut prev = f64::INFINITY;
      for step in 1..=500 {
        let t = schedule.temperature(100.0, step, 500);
        assert!(t > 0.0, "{:?} at {}", schedule, step);
        assert!(t < prev, "{:?} at {}", schedule, step);
        prev = t;
      }
    }
  }

  #[test]
  fn objective_round_trip() {
    assert_eq!(Objective::Minimize.cost(3.0), 3.0);
    assert_eq!(Objective::Maximize.cost(3.0), -3.0);
    assert_eq!(Objective::Maximize.area(Objective::Maximize.cost(3.0)), 3.0);
  }
}
