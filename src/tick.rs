//! Tick source — the scheduler's only time base
//!
//! A single-word counter advanced by an external timing source (usually a
//! timer interrupt) by a configurable step. Overflow wraps; it is not an error.
//!
//! Author: Moroya Sakamoto

use core::sync::atomic::{AtomicU32, Ordering};

/// One unit of scheduler time
pub type Tick = u32;

/// Wrapping distance from `since` to `now`
///
/// Correct across counter overflow as long as the real elapsed time is
/// below the counter's full range.
#[inline]
pub const fn elapsed(now: Tick, since: Tick) -> Tick {
    now.wrapping_sub(since)
}

/// System tick source
///
/// Lives in a `static` shared between the timer interrupt (writer) and the
/// main loop (reader). Only plain word loads and stores are used, so it also
/// works on cores without atomic read-modify-write (Cortex-M0, RV32I).
///
/// Contract: exactly one context calls [`advance`](Self::advance). Readers
/// may run concurrently with it; a read sees either the old or the new
/// value, never a torn one.
///
/// Size: 8 bytes
pub struct TickSource {
    /// Current tick count
    count: AtomicU32,
    /// Amount added per advance
    step: AtomicU32,
}

impl TickSource {
    /// Step used when none is configured
    pub const DEFAULT_STEP: Tick = 1;

    /// Tick source at zero with the default step
    pub const fn new() -> Self {
        Self::with_step(Self::DEFAULT_STEP)
    }

    /// Tick source at zero with a custom step
    pub const fn with_step(step: Tick) -> Self {
        Self {
            count: AtomicU32::new(0),
            step: AtomicU32::new(step),
        }
    }

    /// Advance by one step and return the new count
    ///
    /// Call from the timer interrupt (or any single writer context).
    #[inline]
    pub fn advance(&self) -> Tick {
        let next = self
            .count
            .load(Ordering::Relaxed)
            .wrapping_add(self.step.load(Ordering::Relaxed));
        self.count.store(next, Ordering::Release);
        next
    }

    /// Current tick count
    #[inline]
    pub fn now(&self) -> Tick {
        self.count.load(Ordering::Acquire)
    }

    /// Change the step for subsequent advances
    pub fn set_step(&self, step: Tick) {
        self.step.store(step, Ordering::Relaxed);
    }

    /// Current step
    pub fn step(&self) -> Tick {
        self.step.load(Ordering::Relaxed)
    }

    /// Ticks elapsed since a reference count
    pub fn elapsed_since(&self, reference: Tick) -> Tick {
        elapsed(self.now(), reference)
    }

    /// Reset the count to zero (step is kept)
    pub(crate) fn reset(&self) {
        self.count.store(0, Ordering::Release);
    }
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for TickSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TickSource")
            .field("count", &self.now())
            .field("step", &self.step())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_source() {
        let ticks = TickSource::new();
        assert_eq!(ticks.now(), 0);
        assert_eq!(ticks.step(), 1);
    }

    #[test]
    fn test_advance_returns_new_count() {
        let ticks = TickSource::new();
        assert_eq!(ticks.advance(), 1);
        assert_eq!(ticks.advance(), 2);
        assert_eq!(ticks.now(), 2);
    }

    #[test]
    fn test_custom_step() {
        let ticks = TickSource::with_step(250);
        ticks.advance();
        ticks.advance();
        assert_eq!(ticks.now(), 500);

        ticks.set_step(1000);
        assert_eq!(ticks.advance(), 1500);
    }

    #[test]
    fn test_overflow_wraps() {
        let ticks = TickSource::with_step(Tick::MAX);
        ticks.advance();
        assert_eq!(ticks.now(), Tick::MAX);

        ticks.set_step(3);
        assert_eq!(ticks.advance(), 2);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        assert_eq!(elapsed(5, Tick::MAX - 4), 10);
        assert_eq!(elapsed(100, 40), 60);
        assert_eq!(elapsed(7, 7), 0);
    }

    #[test]
    fn test_elapsed_since() {
        let ticks = TickSource::new();
        ticks.set_step(1000);
        ticks.advance();
        let reference = ticks.now();
        ticks.set_step(500);
        ticks.advance();
        assert_eq!(ticks.elapsed_since(reference), 500);
    }

    #[test]
    fn test_reset_keeps_step() {
        let ticks = TickSource::with_step(7);
        ticks.advance();
        ticks.reset();
        assert_eq!(ticks.now(), 0);
        assert_eq!(ticks.step(), 7);
    }

    #[test]
    fn test_static_source() {
        static TICKS: TickSource = TickSource::new();
        TICKS.advance();
        assert!(TICKS.now() >= 1);
    }
}
