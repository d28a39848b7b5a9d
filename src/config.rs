//! Compile-time configuration for the scheduler
//!
//! These constants control the resource limits of a scheduler context.

/// Maximum number of tasks a single scheduler context can hold
pub const CFG_TASK_MAX: usize = 32;

/// Longest task name stored inline, in bytes
///
/// Names up to this length live inside the task itself. Longer names are
/// copied to an owned heap allocation at registration time.
pub const CFG_SHORT_NAME_LEN: usize = 15;

/// Smallest permitted upper bound of the wrapping time domain
pub const CFG_MIN_MAX_TIME: u32 = 4;
