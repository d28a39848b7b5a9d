//! Scheduler context and drive loop
//!
//! The scheduler keeps the current tick as a single set bit in a 32-bit
//! mask. Each serviced tick boundary executes every task whose mask
//! overlaps the current bit, then rotates the bit left by one position.
//! Drive calls that service no boundary execute the idle tasks instead, so
//! exactly one of the two sets runs per call.

use alloc::boxed::Box;

use crate::config::{CFG_MIN_MAX_TIME, CFG_TASK_MAX};
use crate::error::{SchedError, SchedResult};
use crate::task::{Task, TaskId, TaskInfo, TaskName};
use crate::time::{TimeDomain, TimeSource};
use crate::types::{SchedTime, TickMask};

/// Position in a task-info walk
///
/// Returned alongside each [`TaskInfo`] by [`Scheduler::first_task_info`]
/// and [`Scheduler::next_task_info`]. The walk is forward-only and
/// restartable only from `first_task_info`. Tasks removed after the cursor
/// has passed them are simply skipped; because the cursor tracks the task
/// serial rather than a list position, removals never repeat or drop a
/// surviving task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCursor(TaskId);

/// Scheduler context
///
/// Owns the task registry and the injected time source. All operations are
/// synchronous and non-reentrant; a task callback must not call back into
/// its own scheduler (the exclusive borrow makes that unrepresentable).
pub struct Scheduler {
    /// The tick to run when `now` reaches `last_tick_time + tick_period`;
    /// zero means no tick has been serviced since creation or reset
    current_tick: TickMask,

    /// Time at which the last tick boundary was serviced
    last_tick_time: SchedTime,
    tick_period: SchedTime,
    domain: TimeDomain,

    /// Registered tasks, in registration order
    tasks: heapless::Vec<Task, CFG_TASK_MAX>,
    next_id: u32,

    time_source: Box<dyn TimeSource>,
}

impl Scheduler {
    /// Create a scheduler context
    ///
    /// # Arguments
    /// * `time_source` - Clock capability used for tick detection and task
    ///   execution timing
    /// * `max_time` - Maximum value the time source returns before wrapping
    ///   to 0
    /// * `tick_period` - Time-source counts per task tick
    ///
    /// # Errors
    /// * [`SchedError::TimeDomainTooSmall`] - `max_time` below [`CFG_MIN_MAX_TIME`]
    /// * [`SchedError::TickPeriodZero`] - `tick_period` of zero
    /// * [`SchedError::TickPeriodTooCoarse`] - `tick_period >= max_time / 2`,
    ///   too coarse to measure unambiguously within the wrap domain
    pub fn new(
        time_source: impl TimeSource + 'static,
        max_time: SchedTime,
        tick_period: SchedTime,
    ) -> SchedResult<Self> {
        if max_time < CFG_MIN_MAX_TIME {
            return Err(SchedError::TimeDomainTooSmall);
        }
        if tick_period < 1 {
            return Err(SchedError::TickPeriodZero);
        }
        if tick_period >= max_time / 2 {
            return Err(SchedError::TickPeriodTooCoarse);
        }

        Ok(Scheduler {
            current_tick: 0,
            last_tick_time: 0,
            tick_period,
            domain: TimeDomain::new(max_time),
            tasks: heapless::Vec::new(),
            next_id: 0,
            time_source: Box::new(time_source),
        })
    }

    /// Drive the scheduler
    ///
    /// This needs to be called continuously to drive task execution. It
    /// returns after running at most one task set, so top level code outside
    /// the scheduler gets a chance to run. Example:
    ///
    /// ```ignore
    /// loop {
    ///     sched.run();
    ///     if can_sleep {
    ///         enter_low_power_mode();
    ///         sched.reset();
    ///     }
    /// }
    /// ```
    pub fn run(&mut self) {
        let mut execute_tick = false;

        let now = self.time_source.now();

        if self.current_tick == 0 {
            // First call since creation or reset: synchronize and service
            // the first tick slot.
            self.current_tick = 0x0000_0001;
            self.last_tick_time = now;
            execute_tick = true;
        } else {
            let delta = self.domain.diff(now, self.last_tick_time);
            if delta < 0 {
                // The time source moved backward further than the wrap
                // tolerance allows. Resynchronize, but keep the slot
                // rotation going.
                crate::trace!("time source anomaly, resynchronizing");
                self.last_tick_time = now;
                execute_tick = true;
            } else if delta as SchedTime >= self.tick_period {
                // Advance by exactly one period rather than snapping to
                // `now`, so jitter does not accumulate into the schedule.
                self.last_tick_time = self.domain.offset(self.last_tick_time, self.tick_period);
                execute_tick = true;
            }
        }

        if execute_tick {
            self.execute_current_tick();
            self.current_tick = self.current_tick.rotate_left(1);
        } else {
            self.execute_idle_tasks();
        }
    }

    /// Drive the scheduler forever
    pub fn run_forever(&mut self) -> ! {
        loop {
            self.run();
        }
    }

    /// Reset the current tick and next tick time
    ///
    /// The next [`Scheduler::run`] call is treated as the first: it
    /// resynchronizes `last_tick_time` and services a tick immediately.
    /// Useful after a sleep or low-power interval, where the stale elapsed
    /// time would otherwise cause a burst of catch-up ticks.
    pub fn reset(&mut self) {
        self.current_tick = 0;
    }

    // ============ Task registration ============

    /// Register a task
    ///
    /// The task is appended to the end of the list, so execution and
    /// iteration order always match registration order.
    ///
    /// # Arguments
    /// * `name` - Human readable task name; pass `""` for an unnamed task.
    ///   Copied inline if short enough, to the heap otherwise
    /// * `tick_mask` - Tick slots to execute on, or [`crate::mask::IDLE`]
    ///   for an idle task. See [`crate::types::mask`] for the standard
    ///   power-of-two masks
    /// * `execute` - Task callback; captured state is threaded unchanged
    ///   into every invocation
    ///
    /// # Errors
    /// * [`SchedError::TaskLimit`] - the registry already holds
    ///   [`CFG_TASK_MAX`] tasks
    pub fn add_task(
        &mut self,
        name: &str,
        tick_mask: TickMask,
        execute: impl FnMut() + 'static,
    ) -> SchedResult<TaskId> {
        let id = TaskId(self.next_id);

        let task = Task::new(id, tick_mask, TaskName::new(name), Box::new(execute));
        if self.tasks.push(task).is_err() {
            return Err(SchedError::TaskLimit);
        }

        self.next_id = self.next_id.wrapping_add(1);
        crate::debug!("task {} registered, mask {:x}", id.0, tick_mask);
        Ok(id)
    }

    /// Remove a task
    ///
    /// Returns `true` if the task was present. Removing an already-removed
    /// task is a no-op, not an error.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                crate::debug!("task {} removed", id.0);
                true
            }
            None => false,
        }
    }

    /// Number of registered tasks
    #[inline]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks are registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ============ Task debugging ============

    /// Info for the first registered task, with a cursor for the rest
    ///
    /// Returns `None` if no tasks are registered. Example:
    ///
    /// ```ignore
    /// let mut entry = sched.first_task_info();
    /// while let Some((info, cursor)) = entry {
    ///     // print name / average_time / max_time to the debug console
    ///     entry = sched.next_task_info(cursor);
    /// }
    /// ```
    pub fn first_task_info(&self) -> Option<(TaskInfo<'_>, TaskCursor)> {
        self.tasks
            .first()
            .map(|task| (task.info(), TaskCursor(task.id)))
    }

    /// Info for the task after `cursor`, in registration order
    pub fn next_task_info(&self, cursor: TaskCursor) -> Option<(TaskInfo<'_>, TaskCursor)> {
        self.tasks
            .iter()
            .find(|task| task.id > cursor.0)
            .map(|task| (task.info(), TaskCursor(task.id)))
    }

    /// Iterate over all task infos in registration order
    pub fn task_infos(&self) -> impl Iterator<Item = TaskInfo<'_>> {
        self.tasks.iter().map(Task::info)
    }

    /// Reset every task's timing statistics
    pub fn reset_stats(&mut self) {
        for task in self.tasks.iter_mut() {
            task.reset_stats();
        }
    }

    // ============ Observation ============

    /// The current single-bit tick slot, or 0 before the first tick
    #[inline]
    pub fn current_tick(&self) -> TickMask {
        self.current_tick
    }

    /// Time-source counts per tick
    #[inline]
    pub fn tick_period(&self) -> SchedTime {
        self.tick_period
    }

    // ============ Private ============

    /// Run the task at `index`, folding its measured execution interval
    /// into its statistics
    fn execute_task(&mut self, index: usize) {
        let start = self.time_source.now();

        (self.tasks[index].execute)();

        let stop = self.time_source.now();
        let observed = self.domain.diff(stop, start);
        self.tasks[index].record(observed);
    }

    fn execute_current_tick(&mut self) {
        let tick = self.current_tick;
        for index in 0..self.tasks.len() {
            if self.tasks[index].tick_mask & tick != 0 {
                self.execute_task(index);
            }
        }
    }

    fn execute_idle_tasks(&mut self) {
        for index in 0..self.tasks.len() {
            if self.tasks[index].tick_mask == 0 {
                self.execute_task(index);
            }
        }
    }
}
