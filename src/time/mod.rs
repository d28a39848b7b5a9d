//! Wrap-safe time arithmetic and the time source capability
//!
//! The scheduler never assumes a clock epoch or counter width. All
//! comparisons go through [`TimeDomain`], which is bound to the maximum
//! value the host's counter reaches before rolling back to zero.

use crate::types::SchedTime;

/// Source of the current time
///
/// The returned counter must start at 0, increment monotonically to
/// `max_time`, and then roll back to 0. The units do not matter to the
/// scheduler, but the resolution should be finer than the tick period so
/// that task execution time can be measured meaningfully. Reading the
/// counter must be cheap and side-effect free.
///
/// Implemented for any `FnMut() -> u32` closure, so a captured peripheral
/// handle or shared cell can serve as the clock:
///
/// ```
/// use ticksched::TimeSource;
///
/// let ticks = 42u32;
/// let mut source = move || ticks;
/// assert_eq!(source.now(), 42);
/// ```
pub trait TimeSource {
    /// Read the current counter value, in `[0, max_time]`
    fn now(&mut self) -> SchedTime;
}

impl<F> TimeSource for F
where
    F: FnMut() -> SchedTime,
{
    #[inline]
    fn now(&mut self) -> SchedTime {
        self()
    }
}

/// Signed-comparison arithmetic over a wrapping counter domain
///
/// The domain spans `[0, max_time]` and wraps back to 0 after `max_time`.
/// Differences use the half-width of the domain as the tie-break between
/// "a is ahead of b" and "a has wrapped past b".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDomain {
    /// Number of distinct counter values, `max_time + 1`
    span: u64,
}

impl TimeDomain {
    /// Bind a domain to the given counter upper bound
    pub const fn new(max_time: SchedTime) -> Self {
        TimeDomain {
            span: max_time as u64 + 1,
        }
    }

    /// Upper bound of the counter domain
    #[inline]
    pub const fn max_time(&self) -> SchedTime {
        (self.span - 1) as SchedTime
    }

    /// Forward distance from `b` to `a`, modulo the domain span
    ///
    /// A raw forward distance beyond half the span is reported as negative,
    /// signalling that `a` appears to precede `b` rather than to have made
    /// a very large forward jump.
    #[inline]
    pub fn diff(&self, a: SchedTime, b: SchedTime) -> i32 {
        debug_assert!((a as u64) < self.span && (b as u64) < self.span);

        let d = (a as u64 + self.span - b as u64) % self.span;
        if d > self.span / 2 {
            (d as i64 - self.span as i64) as i32
        } else {
            // For the full-width domain the half-distance case falls through
            // to a two's-complement wrapping cast, which is the same
            // convention.
            d as i32
        }
    }

    /// `a` advanced by `n` counts, wrapping within the domain
    #[inline]
    pub fn offset(&self, a: SchedTime, n: SchedTime) -> SchedTime {
        debug_assert!((a as u64) < self.span);

        ((a as u64 + n as u64) % self.span) as SchedTime
    }
}
