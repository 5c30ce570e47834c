//! Wraparound-safe tick arithmetic.
//!
//! All timing in this crate is expressed over the platform's free-running
//! tick counter, which wraps at `u32::MAX`. Durations must always be computed
//! through [`elapsed`], never by plain subtraction.

/// Timestamp sampled from the platform's wrapping tick counter.
pub type Tick = u32;

/// Ticks elapsed from `start` to `end`.
///
/// Correct across at most one counter wraparound between the two samples:
///
/// ```
/// use pressline::tick::elapsed;
///
/// assert_eq!(elapsed(0xFFFF_FFF0, 0x0000_0010), 0x20);
/// ```
pub fn elapsed(start: Tick, end: Tick) -> u32 {
    // Modular distance on the wrapping counter.
    end.wrapping_sub(start)
}
