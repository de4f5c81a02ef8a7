//! Task descriptor — caller-owned, no-alloc table entries
//!
//! Each task is an action plus a period in ticks. A period of zero makes the
//! task continuous: it runs on every dispatch cycle.
//!
//! Author: Moroya Sakamoto

use crate::tick::{elapsed, Tick};

/// Task action — any zero-argument callable, borrowed from the caller
pub type TaskFn<'a> = &'a mut dyn FnMut();

/// Outcome of offering one dispatch cycle to a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Poll {
    /// Action was invoked
    Ran,
    /// Period has not elapsed yet
    Pending,
    /// Slot has no action; dispatch stops here
    Sentinel,
}

/// Static task descriptor
///
/// Built by the caller into a table (array or slice) that outlives the
/// scheduler. `last_run` is scheduler state embedded in caller storage and
/// is only written by initialization and dispatch.
pub struct Task<'a> {
    /// Action to invoke when due
    action: Option<TaskFn<'a>>,
    /// Period in ticks (0 = continuous)
    interval: Tick,
    /// Tick at which the action last ran
    last_run: Tick,
}

impl<'a> Task<'a> {
    /// Empty slot. Rejected by initialization; ends dispatch if it shows up
    /// in a bound table.
    pub const fn empty() -> Self {
        Self {
            action: None,
            interval: 0,
            last_run: 0,
        }
    }

    /// Create a task that runs every `interval` ticks
    pub fn new(action: TaskFn<'a>, interval: Tick) -> Self {
        Self {
            action: Some(action),
            interval,
            last_run: 0,
        }
    }

    /// Create a task that runs on every cycle
    pub fn continuous(action: TaskFn<'a>) -> Self {
        Self::new(action, 0)
    }

    /// Period in ticks
    pub fn interval(&self) -> Tick {
        self.interval
    }

    /// Change the period. Takes effect from the next cycle, measured from
    /// the last recorded run.
    pub fn set_interval(&mut self, interval: Tick) {
        self.interval = interval;
    }

    /// Runs on every cycle?
    pub fn is_continuous(&self) -> bool {
        self.interval == 0
    }

    /// Has an action?
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Detach the action, turning this slot into an end-of-table sentinel
    pub fn clear(&mut self) -> Option<TaskFn<'a>> {
        self.action.take()
    }

    /// Make the task due on the first cycle after the counter is reset.
    ///
    /// `MAX - interval + 1` is `-interval` in wrapping arithmetic, so
    /// `0 - last_run == interval` on the first check.
    pub(crate) fn arm(&mut self) {
        self.last_run = Tick::MAX.wrapping_sub(self.interval).wrapping_add(1);
    }

    /// Run the action if due at `now`
    ///
    /// `now` is the caller's snapshot; it is what gets recorded, never a
    /// fresher counter value read after the action returns.
    pub(crate) fn poll(&mut self, now: Tick) -> Poll {
        let Some(action) = self.action.as_deref_mut() else {
            return Poll::Sentinel;
        };

        if self.interval == 0 {
            action();
            Poll::Ran
        } else if elapsed(now, self.last_run) >= self.interval {
            action();
            self.last_run = now;
            Poll::Ran
        } else {
            Poll::Pending
        }
    }

    #[cfg(test)]
    pub(crate) fn last_run(&self) -> Tick {
        self.last_run
    }
}

impl core::fmt::Debug for Task<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Task")
            .field("has_action", &self.has_action())
            .field("interval", &self.interval)
            .field("last_run", &self.last_run)
            .finish()
    }
}
