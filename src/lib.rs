//! Cooperative tick-mask task scheduler
//!
//! A single-context, non-preemptive scheduler for embedded control loops:
//! - Periodic tasks selected by a rotating 32-bit tick mask
//! - Idle tasks that run whenever no tick boundary is due
//! - Wrap-safe time arithmetic over an arbitrary rollover domain
//! - Per-task execution-time statistics (moving average and maximum)
//!
//! The scheduler assumes a single flow of control: the host loop calls
//! [`Scheduler::run`] repeatedly, and every task callback runs to completion
//! before `run` returns. There is no threading, no preemption, and no
//! internal locking.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// ============ Modules ============

pub mod log;

pub mod config;
pub mod error;
pub mod sched;
pub mod task;
pub mod time;
pub mod types;

// ============ Re-exports ============

pub use config::*;
pub use error::{SchedError, SchedResult};
pub use sched::{Scheduler, TaskCursor};
pub use task::{TaskId, TaskInfo, TaskName};
pub use time::{TimeDomain, TimeSource};
pub use types::{mask, SchedTime, TickMask};
