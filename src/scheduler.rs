//! Cooperative tick scheduler
//!
//! Scans a caller-owned task table in order on every `run()` and invokes
//! the tasks whose period has elapsed. No priorities, no preemption: each
//! action runs to completion before the next entry is considered.
//!
//! Two states: Uninitialized (no table, `run()` does nothing) and Bound.
//! Only a successful `init` binds; a later `init` replaces the binding.
//!
//! Author: Moroya Sakamoto

use log::{debug, trace, warn};

use crate::config::SchedulerConfig;
use crate::error::InitError;
use crate::task::{Poll, Task};
use crate::tick::{Tick, TickSource};

/// Cooperative scheduler
///
/// Holds a non-owning borrow of the task table and of the tick source.
/// Nothing is allocated; the only writes into the table are each task's
/// private last-run tick.
pub struct Scheduler<'t, 'a> {
    /// Bound task table (None = Uninitialized)
    table: Option<&'t mut [Task<'a>]>,
    /// Shared with whatever advances time
    ticks: &'t TickSource,
}

impl<'t, 'a> Scheduler<'t, 'a> {
    /// Create an unbound scheduler reading time from `ticks`
    pub const fn new(ticks: &'t TickSource) -> Self {
        Self { table: None, ticks }
    }

    /// Bind a task table with a tick step of 1
    pub fn init(&mut self, table: &'t mut [Task<'a>]) -> Result<(), InitError> {
        self.init_with(table, SchedulerConfig::default())
    }

    /// Bind a task table
    ///
    /// Every entry must have an action. On failure nothing changes: the
    /// previous binding (if any), the tick count, the step and every task's
    /// last-run tick are left as they were.
    ///
    /// On success every task is armed to be due on the first `run()`, the
    /// step is applied and the tick count restarts at zero.
    ///
    /// The reset is a plain store: an interrupt advancing the same tick
    /// source while this runs can be lost. Bind before enabling the timer
    /// interrupt, or mask it around the call.
    pub fn init_with(
        &mut self,
        table: &'t mut [Task<'a>],
        config: SchedulerConfig,
    ) -> Result<(), InitError> {
        if let Some(index) = table.iter().position(|task| !task.has_action()) {
            warn!("rejected task table: entry {index} has no action");
            return Err(InitError::MissingAction { index });
        }

        for task in table.iter_mut() {
            task.arm();
        }

        self.ticks.set_step(config.tick_step);
        self.ticks.reset();

        debug!(
            "bound {} tasks, tick step {}",
            table.len(),
            config.tick_step
        );
        self.table = Some(table);
        Ok(())
    }

    /// Is a task table bound?
    pub fn is_bound(&self) -> bool {
        self.table.is_some()
    }

    /// Run one dispatch cycle
    ///
    /// Tasks are checked first to last. The tick count is read once per
    /// task, so an interrupt advancing it mid-cycle can't split one task's
    /// due check across two values.
    ///
    /// An entry without an action ends the cycle: it and every entry after
    /// it are skipped. This can only happen if a bound task was cleared
    /// through [`tasks_mut`](Self::tasks_mut), and it silently masks that
    /// caller bug rather than reporting it.
    ///
    /// A panic inside an action propagates to the caller.
    pub fn run(&mut self) {
        let ticks = self.ticks;
        let Some(table) = self.table.as_deref_mut() else {
            return;
        };

        for (index, task) in table.iter_mut().enumerate() {
            let now = ticks.now();
            if task.poll(now) == Poll::Sentinel {
                trace!("dispatch truncated at entry {index}");
                break;
            }
        }
    }

    /// Advance the tick source by one step, returning the new count
    ///
    /// Same single-writer contract as [`TickSource::advance`]: if an
    /// interrupt already advances the tick source, do not call this from
    /// the main loop as well, or ticks are lost.
    pub fn advance_tick(&self) -> Tick {
        self.ticks.advance()
    }

    /// Current tick count
    pub fn tick_count(&self) -> Tick {
        self.ticks.now()
    }

    /// Change the step for future advances. Recorded last-run ticks are
    /// not touched.
    pub fn set_tick_step(&self, step: Tick) {
        self.ticks.set_step(step);
    }

    /// Tick source this scheduler reads
    pub fn ticks(&self) -> &'t TickSource {
        self.ticks
    }

    /// Bound tasks (empty while Uninitialized)
    pub fn tasks(&self) -> &[Task<'a>] {
        self.table.as_deref().unwrap_or(&[])
    }

    /// Bound tasks, for adjusting intervals at runtime
    pub fn tasks_mut(&mut self) -> &mut [Task<'a>] {
        self.table.as_deref_mut().unwrap_or(&mut [])
    }
}

impl core::fmt::Debug for Scheduler<'_, '_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scheduler")
            .field("bound", &self.is_bound())
            .field("tasks", &self.tasks().len())
            .field("ticks", self.ticks)
            .finish()
    }
}
