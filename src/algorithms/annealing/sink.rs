use std::fmt;

use crate::data::Polygon;

/// Snapshot of a run at a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
  pub test_id: usize,
  /// Area of the current polygon.
  pub area: f64,
  /// Best area seen so far, in the direction of the objective.
  pub best_area: f64,
  /// 1-based step index.
  pub step: usize,
  pub total_steps: usize,
  pub temperature: f64,
}

impl fmt::Display for Progress {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "|Test Case #{}", self.test_id)?;
    writeln!(f, "|Area: {:>21.1}", self.area)?;
    writeln!(f, "|Best Area Seen: {:>11.1}", self.best_area)?;
    writeln!(f, "|Iteration: {:>16} (out of {})", self.step, self.total_steps)?;
    write!(f, "|Temperature: {:>14.3}", self.temperature)
  }
}

/// Receives the polygon and a [`Progress`] record at every checkpoint.
///
/// Closures `FnMut(&Polygon, &Progress)` are sinks.
pub trait ProgressSink {
  fn receive(&mut self, polygon: &Polygon, progress: &Progress);
}

impl<F> ProgressSink for F
where
  F: FnMut(&Polygon, &Progress),
{
  fn receive(&mut self, polygon: &Polygon, progress: &Progress) {
    self(polygon, progress)
  }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
  fn receive(&mut self, _polygon: &Polygon, _progress: &Progress) {}
}

/// Writes every record to the `log` facade. Vertices go out at `trace` level.
#[derive(Debug, Clone, Copy)]
pub struct LogSink {
  pub level: log::Level,
}

impl Default for LogSink {
  fn default() -> Self {
    LogSink {
      level: log::Level::Info,
    }
  }
}

impl ProgressSink for LogSink {
  fn receive(&mut self, polygon: &Polygon, progress: &Progress) {
    log::log!(self.level, "\n{}", progress);
    log::trace!("Vertices: {}", polygon);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Point;

  fn triangle() -> Polygon {
    Polygon::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([0.0, 1.0]),
    ])
  }

  fn progress() -> Progress {
    Progress {
      test_id: 3,
      area: 12.34,
      best_area: 10.0,
      step: 42,
      total_steps: 1000,
      temperature: 1.5,
    }
  }

  #[test]
  fn display() {
    let expected = "|Test Case #3\n\
                    |Area:                  12.3\n\
                    |Best Area Seen:        10.0\n\
                    |Iteration:               42 (out of 1000)\n\
                    |Temperature:          1.500";
    assert_eq!(progress().to_string(), expected);
  }

  #[test]
  fn closure_sink() {
    let mut seen = Vec::new();
    let mut sink = |poly: &Polygon, progress: &Progress| seen.push((poly.len(), progress.step));
    sink.receive(&triangle(), &progress());
    sink.receive(&triangle(), &progress());
    assert_eq!(seen, vec![(3, 42), (3, 42)]);
  }

  #[test]
  fn quiet_sinks() {
    NullSink.receive(&triangle(), &progress());
    LogSink::default().receive(&triangle(), &progress());
  }
}
