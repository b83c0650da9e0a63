//! # Real-Time Pacing
//!
//! The cycle counter on the CPU is the authoritative notion of time. When a
//! front end wants the program to run at the speed of a real machine,
//! [`Throttle`] compares elapsed cycles with the wall clock and sleeps while
//! emulation is ahead.
//!
//! Sleeping happens in slices of at least [`SLEEP_GRANULARITY`] so a 2-cycle
//! instruction does not trigger a syscall. If emulation falls behind by more
//! than [`MAX_LAG`] (debugger pause, slow host) the throttle resynchronises
//! instead of racing to catch up.

use std::time::{Duration, Instant};

/// NTSC NES / Atari CPU clock.
pub const NTSC_CLOCK_HZ: u32 = 1_789_773;

/// Apple II / Commodore PET class 1 MHz clock.
pub const ONE_MHZ: u32 = 1_000_000;

/// Smallest sleep the throttle will issue.
pub const SLEEP_GRANULARITY: Duration = Duration::from_millis(1);

/// Lag beyond which the throttle gives up catching up.
pub const MAX_LAG: Duration = Duration::from_millis(250);

/// Wall-clock pacer driven by the CPU cycle counter.
#[derive(Debug, Clone)]
pub struct Throttle {
    clock_hz: u32,
    origin: Instant,
    origin_cycles: u64,
}

impl Throttle {
    /// Starts pacing at `clock_hz` from the current cycle count.
    ///
    /// A zero rate is treated as 1 Hz; `CpuConfig::validate` rejects it
    /// before it gets here.
    pub fn new(clock_hz: u32, start_cycles: u64) -> Self {
        Self {
            clock_hz: clock_hz.max(1),
            origin: Instant::now(),
            origin_cycles: start_cycles,
        }
    }

    pub fn clock_hz(&self) -> u32 {
        self.clock_hz
    }

    /// Wall-clock duration `cycles` should take at this clock rate.
    pub fn cycles_to_duration(&self, cycles: u64) -> Duration {
        let hz = self.clock_hz as u64;
        let secs = cycles / hz;
        let nanos = (cycles % hz) * 1_000_000_000 / hz;
        Duration::new(secs, nanos as u32)
    }

    /// How far emulation at `cycles` is ahead of the wall clock.
    pub fn ahead_by(&self, cycles: u64) -> Option<Duration> {
        let target = self.cycles_to_duration(cycles.saturating_sub(self.origin_cycles));
        target.checked_sub(self.origin.elapsed())
    }

    /// Sleeps if emulation has run ahead of real time.
    pub fn pace(&mut self, cycles: u64) {
        let target = self.cycles_to_duration(cycles.saturating_sub(self.origin_cycles));
        let elapsed = self.origin.elapsed();

        if let Some(ahead) = target.checked_sub(elapsed) {
            if ahead >= SLEEP_GRANULARITY {
                std::thread::sleep(ahead);
            }
        } else if elapsed - target > MAX_LAG {
            tracing::debug!(
                lag_ms = (elapsed - target).as_millis() as u64,
                "throttle resynchronised"
            );
            self.resync(cycles);
        }
    }

    /// Restarts pacing from `cycles` at the current instant.
    pub fn resync(&mut self, cycles: u64) {
        self.origin = Instant::now();
        self.origin_cycles = cycles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_to_duration() {
        let throttle = Throttle::new(ONE_MHZ, 0);
        assert_eq!(throttle.cycles_to_duration(1_000_000), Duration::from_secs(1));
        assert_eq!(throttle.cycles_to_duration(1_500), Duration::from_micros(1_500));
    }

    #[test]
    fn test_zero_rate_clamped() {
        let throttle = Throttle::new(0, 0);
        assert_eq!(throttle.clock_hz(), 1);
    }

    #[test]
    fn test_ahead_after_burst() {
        let throttle = Throttle::new(ONE_MHZ, 0);
        // Ten seconds' worth of cycles cannot have elapsed yet
        assert!(throttle.ahead_by(10_000_000).is_some());
    }

    #[test]
    fn test_pace_sleeps_until_caught_up() {
        let mut throttle = Throttle::new(ONE_MHZ, 0);
        let start = Instant::now();
        throttle.pace(5_000); // 5ms of emulated time
        assert!(start.elapsed() >= Duration::from_millis(4));
    }

    #[test]
    fn test_resync_moves_origin() {
        let mut throttle = Throttle::new(ONE_MHZ, 0);
        throttle.resync(42_000);
        assert!(throttle
            .ahead_by(42_000)
            .map_or(true, |ahead| ahead < SLEEP_GRANULARITY));
    }
}
