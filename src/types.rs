//! Core type definitions for the scheduler
//!
//! These types provide strong naming for the scheduler's primitive values.

/// Time-source counter type
///
/// Values are in whatever units the host's time source reports; the
/// scheduler only ever compares them through [`crate::time::TimeDomain`].
pub type SchedTime = u32;

/// Tick mask type
///
/// The scheduler keeps the current tick as a 32-bit value with exactly one
/// bit set and rotates it left by one position per tick boundary. A task
/// runs on a boundary when `task_mask & current_tick != 0`; a task with a
/// mask of zero runs as an idle task instead.
pub type TickMask = u32;

// ============ Standard tick masks ============

/// Standard power-of-two tick masks
///
/// Hosts may hand-pick arbitrary bit patterns to pin tasks to exact tick
/// slots; these constants cover the common "every Nth tick" divisions.
pub mod mask {
    use super::TickMask;

    /// Idle task: runs only when no tick boundary was serviced
    pub const IDLE: TickMask = 0;

    /// Run on every tick
    pub const EVERY_TICK: TickMask = 0xFFFF_FFFF;
    /// Run on every 2nd tick
    pub const EVERY_2: TickMask = 0xAAAA_AAAA;
    /// Run on every 4th tick
    pub const EVERY_4: TickMask = 0x4444_4444;
    /// Run on every 8th tick
    pub const EVERY_8: TickMask = 0x1010_1010;
    /// Run on every 16th tick
    pub const EVERY_16: TickMask = 0x0100_0100;
    /// Run on every 32nd tick
    pub const EVERY_32: TickMask = 0x0001_0000;
}
