//! Error types for the scheduler
//!
//! Uses Rust's Result pattern instead of sentinel returns.

/// Scheduler error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedError {
    /// The wrap domain upper bound is below the supported minimum
    TimeDomainTooSmall,
    /// A tick period of zero was requested
    TickPeriodZero,
    /// The tick period is too coarse to measure unambiguously within the
    /// wrap domain (`tick_period >= max_time / 2`)
    TickPeriodTooCoarse,
    /// The task registry is full
    TaskLimit,
}

/// Result type alias for scheduler operations
pub type SchedResult<T> = Result<T, SchedError>;
