// ── High-resolution timer ─────────────────────────────────────────────────────
//
// A start/stop pair of performance-counter ticks plus unit conversions.
// Capturing ticks is platform work (`platform::win32::timer`); everything
// here is arithmetic and runs anywhere.
//
// The nanosecond conversion splits the delta into whole seconds and a
// remainder so that large tick counts cannot overflow the multiply.  The
// floating-point units are each derived from the previous one by dividing by
// 1000.0; the compounding this causes is a documented property of the
// conversion chain, kept as-is.

/// A start/stop pair of monotonic tick counts.
///
/// Both fields are raw counter readings; a duration is only meaningful after
/// the timer has been started and then stopped.  Nothing validates the order
/// of the two captures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerfTimer {
    pub(crate) start_ticks: u64,
    pub(crate) stop_ticks: u64,
}

/// Nanoseconds per second; also the tick rate a frequency is scaled against.
const NANOS_PER_SECOND: u64 = 1_000_000_000;

impl PerfTimer {
    /// A timer with both captures at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A timer over an explicit pair of raw tick readings.
    pub fn from_ticks(start_ticks: u64, stop_ticks: u64) -> Self {
        Self {
            start_ticks,
            stop_ticks,
        }
    }

    /// The raw tick delta.  Wraps rather than panicking if the timer was
    /// stopped before it was started.
    pub fn elapsed_ticks(&self) -> u64 {
        self.stop_ticks.wrapping_sub(self.start_ticks)
    }

    /// The captured duration in whole nanoseconds, given the counter's tick
    /// rate in ticks per second.
    ///
    /// `ticks_per_second` must be non-zero.  Whole seconds are divided out
    /// first; the remainder is scaled by the integer nanoseconds-per-tick, so
    /// a counter slower than 1 GHz loses no precision and a faster one
    /// truncates sub-nanosecond detail.
    pub fn nanoseconds_with_frequency(&self, ticks_per_second: u64) -> u64 {
        let delta = self.elapsed_ticks();
        let nanos_per_tick = NANOS_PER_SECOND / ticks_per_second;
        let seconds = delta / ticks_per_second;
        let remainder_nanos = (delta % ticks_per_second) * nanos_per_tick;
        seconds * NANOS_PER_SECOND + remainder_nanos
    }

    /// The captured duration in microseconds.
    pub fn microseconds_with_frequency(&self, ticks_per_second: u64) -> f64 {
        self.nanoseconds_with_frequency(ticks_per_second) as f64 / 1_000.0
    }

    /// The captured duration in milliseconds.
    pub fn milliseconds_with_frequency(&self, ticks_per_second: u64) -> f64 {
        self.microseconds_with_frequency(ticks_per_second) / 1_000.0
    }

    /// The captured duration in seconds.
    pub fn seconds_with_frequency(&self, ticks_per_second: u64) -> f64 {
        self.milliseconds_with_frequency(ticks_per_second) / 1_000.0
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Typical modern QPC rate: 10 MHz.
    const FREQ: u64 = 10_000_000;

    #[test]
    fn zero_delta_is_zero_in_every_unit() {
        let t = PerfTimer::from_ticks(12_345, 12_345);
        assert_eq!(t.elapsed_ticks(), 0);
        assert_eq!(t.nanoseconds_with_frequency(FREQ), 0);
        assert_eq!(t.microseconds_with_frequency(FREQ), 0.0);
        assert_eq!(t.milliseconds_with_frequency(FREQ), 0.0);
        assert_eq!(t.seconds_with_frequency(FREQ), 0.0);
    }

    #[test]
    fn one_tick_at_ten_megahertz_is_one_hundred_nanoseconds() {
        let t = PerfTimer::from_ticks(0, 1);
        assert_eq!(t.nanoseconds_with_frequency(FREQ), 100);
    }

    #[test]
    fn whole_seconds_and_remainder_are_split() {
        // 3 s + 1 tick.
        let t = PerfTimer::from_ticks(0, 3 * FREQ + 1);
        assert_eq!(t.nanoseconds_with_frequency(FREQ), 3_000_000_100);
    }

    /// Tick counts far beyond what `delta * 1e9` could hold must not
    /// overflow; that is the point of the split.
    #[test]
    fn large_deltas_do_not_overflow() {
        // About a month of 10 MHz ticks.
        let month_ticks = FREQ * 60 * 60 * 24 * 30;
        let t = PerfTimer::from_ticks(0, month_ticks);
        assert_eq!(
            t.nanoseconds_with_frequency(FREQ),
            NANOS_PER_SECOND * 60 * 60 * 24 * 30
        );
    }

    #[test]
    fn float_units_chain_by_thousands() {
        let t = PerfTimer::from_ticks(0, 5 * FREQ);
        assert_eq!(t.microseconds_with_frequency(FREQ), 5_000_000.0);
        assert_eq!(t.milliseconds_with_frequency(FREQ), 5_000.0);
        assert_eq!(t.seconds_with_frequency(FREQ), 5.0);
    }

    /// A counter faster than 1 GHz truncates the per-tick scale to zero
    /// nanoseconds; only whole seconds survive.  Property of the integer
    /// split, kept deliberately.
    #[test]
    fn faster_than_gigahertz_counters_truncate_remainders() {
        let freq = 2 * NANOS_PER_SECOND;
        let t = PerfTimer::from_ticks(0, freq + freq / 2);
        assert_eq!(t.nanoseconds_with_frequency(freq), NANOS_PER_SECOND);
    }
}
