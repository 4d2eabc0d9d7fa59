//! Fixed-timestep driving of a [`Simulation`].
//!
//! Hosts feed the wall-clock time elapsed since their last frame into
//! [`FixedStep::drive`]. The accumulated time is spent in whole steps, so the
//! number of generations per second only depends on the step duration and
//! never on the frame rate.

use std::time::Duration;

use crate::simulation::Simulation;

pub const DEFAULT_STEP: Duration = Duration::from_millis(500);
pub const MIN_STEP: Duration = Duration::from_millis(100);
pub const MAX_STEP: Duration = Duration::from_secs(1);
/// Change applied by [`FixedStep::slower`] and [`FixedStep::faster`].
pub const STEP_INCREMENT: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedStep {
    step: Duration,
    accumulated: Duration,
    time: Duration,
}

impl FixedStep {
    /// `step` is clamped to `MIN_STEP..=MAX_STEP`.
    pub fn new(step: Duration) -> Self {
        Self {
            step: step.clamp(MIN_STEP, MAX_STEP),
            accumulated: Duration::ZERO,
            time: Duration::ZERO,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Simulated time, the sum of every step taken so far.
    pub fn time(&self) -> Duration {
        self.time
    }

    /// Elapsed time not yet spent on a step.
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn set_step(&mut self, step: Duration) {
        self.step = step.clamp(MIN_STEP, MAX_STEP);
        log::debug!("step duration is now {:?}", self.step);
    }

    pub fn slower(&mut self) {
        self.set_step(self.step.saturating_add(STEP_INCREMENT));
    }

    pub fn faster(&mut self) {
        self.set_step(self.step.saturating_sub(STEP_INCREMENT));
    }

    /// Adds `elapsed` and returns how many whole steps are now due, keeping
    /// the remainder for the next call.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.step {
            self.accumulated -= self.step;
            self.time += self.step;
            due += 1;
        }
        due
    }

    /// Accumulates `elapsed` and advances `simulation` once per due step.
    pub fn drive(&mut self, simulation: &mut Simulation, elapsed: Duration) -> u32 {
        let due = self.accumulate(elapsed);
        for _ in 0..due {
            simulation.advance(self.step);
        }
        due
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_accumulate_keeps_remainder() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.accumulate(ms(300)), 0);
        assert_eq!(clock.accumulate(ms(300)), 1);
        assert_eq!(clock.accumulated(), ms(100));
        assert_eq!(clock.accumulate(ms(1400)), 3);
        assert_eq!(clock.accumulated(), ms(0));
        assert_eq!(clock.time(), ms(2000));
    }

    #[test]
    fn test_exact_multiple() {
        let mut clock = FixedStep::new(ms(200));
        assert_eq!(clock.accumulate(ms(200)), 1);
        assert_eq!(clock.accumulated(), Duration::ZERO);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(FixedStep::new(ms(1)).step(), MIN_STEP);
        assert_eq!(FixedStep::new(ms(5000)).step(), MAX_STEP);
    }

    #[test]
    fn test_slower_and_faster_stay_in_bounds() {
        let mut clock = FixedStep::default();
        clock.slower();
        assert_eq!(clock.step(), ms(600));
        for _ in 0..10 {
            clock.slower();
        }
        assert_eq!(clock.step(), MAX_STEP);
        for _ in 0..20 {
            clock.faster();
        }
        assert_eq!(clock.step(), MIN_STEP);
        clock.set_step(ms(0));
        assert_eq!(clock.step(), MIN_STEP);
    }

    #[test]
    fn test_drive_advances_simulation() {
        let mut sim = Simulation::default();
        let mut clock = FixedStep::default();
        assert_eq!(clock.drive(&mut sim, ms(499)), 0);
        assert_eq!(sim.generation(), 0);
        assert_eq!(clock.drive(&mut sim, ms(1001)), 3);
        assert_eq!(sim.generation(), 3);
    }

    #[test]
    fn test_drive_while_seeding() {
        let mut sim = Simulation::default();
        let mut clock = FixedStep::default();
        sim.toggle_seed_mode();
        // Time still passes, the board does not change.
        assert_eq!(clock.drive(&mut sim, ms(1000)), 2);
        assert_eq!(sim.generation(), 0);
        assert_eq!(clock.time(), ms(1000));
    }
}
