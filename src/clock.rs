//! Monotonic time sources used to derive the per-frame delta time.

use core::cell::Cell;

/// A monotonic millisecond clock supplied by the host.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Must never go backwards.
    fn now_ms(&self) -> u64;
}

/// A clock advanced by hand. Useful for hosts that already track frame
/// time (e.g. `requestAnimationFrame` timestamps) and for tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        ManualClock { now: Cell::new(start_ms) }
    }

    /// Jump to `ms`. Earlier values are ignored so the clock stays monotonic.
    pub fn set(&self, ms: u64) {
        if ms > self.now.get() {
            self.now.set(ms);
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Wall clock backed by `std::time::Instant`.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    pub fn new() -> Self {
        SystemClock { origin: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_never_goes_backwards() {
        let clock = ManualClock::new(100);
        clock.advance(16);
        assert_eq!(clock.now_ms(), 116);
        clock.set(50);
        assert_eq!(clock.now_ms(), 116);
        clock.set(200);
        assert_eq!(clock.now_ms(), 200);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now_ms();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = clock.now_ms();
        assert!(second >= first + 5, "{} then {}", first, second);
    }
}
