//! # Cycle Clock
//!
//! The CPU advances its clock by one tick for every bus access and every
//! internal (filler) cycle. The clock is the only place that knows about real
//! time: a non-zero pacing makes `tick` block until the wall-clock time of the
//! current cycle has been reached.

use std::thread;
use std::time::{Duration, Instant};

/// Timing source driven by the CPU.
pub trait Clock {
    /// Zeroes the cycle counter and restarts pacing.
    fn reset(&mut self);

    /// Advances the counter by one cycle, sleeping when paced.
    fn tick(&mut self);

    /// Cycles elapsed since the last reset.
    fn cycle_count(&self) -> u64;

    /// Sets the wall-clock duration of one cycle. `Duration::ZERO` runs unpaced.
    fn set_pacing(&mut self, per_cycle: Duration);
}

/// Monotonic cycle counter with optional real-time pacing.
///
/// Pacing is deadline based: cycle `n` after the pacing epoch is not allowed to
/// complete before `epoch + n * per_cycle`, so oversleeping on one tick is
/// absorbed by the following ones instead of accumulating drift.
///
/// # Examples
///
/// ```
/// use cpu6502::{Clock, SystemClock};
///
/// let mut clock = SystemClock::new();
/// clock.tick();
/// clock.tick();
/// assert_eq!(clock.cycle_count(), 2);
///
/// clock.reset();
/// assert_eq!(clock.cycle_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemClock {
    cycles: u64,
    pacing: Duration,
    epoch: Option<(Instant, u64)>,
}

impl SystemClock {
    /// Creates an unpaced clock at cycle 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock where every cycle lasts `per_cycle` of wall-clock time.
    ///
    /// ```
    /// use std::time::Duration;
    /// use cpu6502::SystemClock;
    ///
    /// // Roughly 1 MHz
    /// let clock = SystemClock::with_pacing(Duration::from_micros(1));
    /// assert_eq!(clock.pacing(), Duration::from_micros(1));
    /// ```
    pub fn with_pacing(per_cycle: Duration) -> Self {
        Self {
            pacing: per_cycle,
            ..Self::default()
        }
    }

    /// Current wall-clock duration of one cycle.
    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    fn wait_for_deadline(&mut self) {
        let cycles = self.cycles;
        let (start, base_cycles) = *self
            .epoch
            .get_or_insert_with(|| (Instant::now(), cycles - 1));
        let elapsed_cycles = cycles - base_cycles;
        let nanos = (self.pacing.as_nanos() as u64).saturating_mul(elapsed_cycles);
        let deadline = start + Duration::from_nanos(nanos);

        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
    }
}

impl Clock for SystemClock {
    fn reset(&mut self) {
        self.cycles = 0;
        self.epoch = None;
    }

    fn tick(&mut self) {
        self.cycles += 1;

        if !self.pacing.is_zero() {
            self.wait_for_deadline();
        }
    }

    fn cycle_count(&self) -> u64 {
        self.cycles
    }

    fn set_pacing(&mut self, per_cycle: Duration) {
        self.pacing = per_cycle;
        self.epoch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_counts_cycles() {
        let mut clock = SystemClock::new();

        for _ in 0..10 {
            clock.tick();
        }

        assert_eq!(clock.cycle_count(), 10);
    }

    #[test]
    fn test_reset_zeroes_counter() {
        let mut clock = SystemClock::new();
        clock.tick();
        clock.reset();

        assert_eq!(clock.cycle_count(), 0);
    }

    #[test]
    fn test_unpaced_clock_does_not_sleep() {
        let mut clock = SystemClock::new();
        let start = Instant::now();

        for _ in 0..100_000 {
            clock.tick();
        }

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_paced_clock_blocks_for_elapsed_cycles() {
        let mut clock = SystemClock::with_pacing(Duration::from_millis(2));
        let start = Instant::now();

        for _ in 0..10 {
            clock.tick();
        }

        // 10 cycles of 2ms each
        assert!(start.elapsed() >= Duration::from_millis(18));
        assert_eq!(clock.cycle_count(), 10);
    }

    #[test]
    fn test_set_pacing_to_zero_disables_pacing() {
        let mut clock = SystemClock::with_pacing(Duration::from_secs(1));
        clock.set_pacing(Duration::ZERO);
        let start = Instant::now();

        clock.tick();
        clock.tick();

        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
