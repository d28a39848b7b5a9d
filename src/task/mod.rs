//! Task entity, handles, and per-task statistics
//!
//! A task pairs a callback with a tick mask and carries running
//! execution-time statistics. Tasks are owned by their scheduler context;
//! callers hold only [`TaskId`] handles.

mod name;

pub use name::TaskName;

use alloc::boxed::Box;

use crate::types::{SchedTime, TickMask};

/// Opaque, copyable task handle
///
/// Each registration yields a fresh serial, so a handle kept past
/// `remove_task` can never alias a later task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskId(pub(crate) u32);

/// Read-only view of one task's name and statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskInfo<'a> {
    /// Task name, empty if the task was registered without one
    pub name: &'a str,
    /// Exponential moving average of execution time, in time-source units
    pub average_time: SchedTime,
    /// Maximum observed execution time, in time-source units
    pub max_time: SchedTime,
}

/// One schedulable unit of work
pub(crate) struct Task {
    /// Registration serial, unique within the owning context
    pub(crate) id: TaskId,

    /// Execution happens when `tick_mask & current_tick != 0`, or in the
    /// idle slot if the mask is zero
    pub(crate) tick_mask: TickMask,

    /// Task callback; captured state serves as the task's context
    pub(crate) execute: Box<dyn FnMut()>,

    pub(crate) name: TaskName,

    // Task stats
    pub(crate) average_time: SchedTime,
    pub(crate) max_time: SchedTime,
}

impl Task {
    pub(crate) fn new(id: TaskId, tick_mask: TickMask, name: TaskName, execute: Box<dyn FnMut()>) -> Self {
        Task {
            id,
            tick_mask,
            execute,
            name,
            average_time: 0,
            max_time: 0,
        }
    }

    /// Fold one observed execution interval into the statistics
    ///
    /// The average is a 0.5-weight exponential moving average; the maximum
    /// never decreases except through an explicit reset. Negative intervals
    /// mean the time source behaved inconsistently during execution and are
    /// discarded.
    pub(crate) fn record(&mut self, observed: i32) {
        if observed >= 0 {
            let t = observed as SchedTime;
            self.average_time = (self.average_time + t) >> 1;
            if t > self.max_time {
                self.max_time = t;
            }
        }
    }

    pub(crate) fn reset_stats(&mut self) {
        self.average_time = 0;
        self.max_time = 0;
    }

    pub(crate) fn info(&self) -> TaskInfo<'_> {
        TaskInfo {
            name: self.name.as_str(),
            average_time: self.average_time,
            max_time: self.max_time,
        }
    }
}
