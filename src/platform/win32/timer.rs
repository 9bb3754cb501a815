// ── Performance-counter capture ───────────────────────────────────────────────
//
// The capture half of `crate::timer`: reading QueryPerformanceCounter into
// the start/stop fields and the frequency-free unit conversions.  The
// arithmetic itself lives portably in `crate::timer`.
//
// This is inside `platform::win32` so `unsafe` is permitted per crate policy.

#![allow(unsafe_code)]

use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

use crate::timer::PerfTimer;

/// Ticks per second of the performance counter.
///
/// Zero only if the counter is unavailable, which does not happen on any
/// Windows this crate runs on.
pub fn frequency() -> u64 {
    let mut ticks_per_second = 0i64;
    // SAFETY: the out pointer is a valid i64 on our stack.  The call cannot
    // fail on XP and later.
    let _ = unsafe { QueryPerformanceFrequency(&mut ticks_per_second) };
    ticks_per_second as u64
}

fn read_counter() -> Option<u64> {
    let mut ticks = 0i64;
    // SAFETY: the out pointer is a valid i64 on our stack.  The call cannot
    // fail on XP and later.
    match unsafe { QueryPerformanceCounter(&mut ticks) } {
        Ok(()) => Some(ticks as u64),
        Err(_) => None,
    }
}

impl PerfTimer {
    /// Capture the current counter reading as the start of the interval.
    ///
    /// Leaves the previous reading in place if the counter cannot be read.
    pub fn start(&mut self) {
        if let Some(ticks) = read_counter() {
            self.start_ticks = ticks;
        }
    }

    /// Capture the current counter reading as the end of the interval.
    pub fn stop(&mut self) {
        if let Some(ticks) = read_counter() {
            self.stop_ticks = ticks;
        }
    }

    /// The captured duration in whole nanoseconds.
    pub fn nanoseconds(&self) -> u64 {
        let ticks_per_second = frequency();
        if ticks_per_second == 0 {
            return 0;
        }
        self.nanoseconds_with_frequency(ticks_per_second)
    }

    /// The captured duration in microseconds.
    pub fn microseconds(&self) -> f64 {
        self.nanoseconds() as f64 / 1_000.0
    }

    /// The captured duration in milliseconds.
    pub fn milliseconds(&self) -> f64 {
        self.microseconds() / 1_000.0
    }

    /// The captured duration in seconds.
    pub fn seconds(&self) -> f64 {
        self.milliseconds() / 1_000.0
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
