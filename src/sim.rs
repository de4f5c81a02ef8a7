//! Host-side driver loop
//!
//! Stands in for the firmware main loop and the timer interrupt: each cycle
//! dispatches once, then lets a fixed number of ticks pass.
//!
//! Author: Moroya Sakamoto

use crate::scheduler::Scheduler;
use crate::tick::{elapsed, Tick};

/// Outcome of a simulated run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimReport {
    /// Dispatch cycles executed
    pub cycles: u32,
    /// Tick count before the first cycle
    pub start_tick: Tick,
    /// Tick count after the last cycle
    pub end_tick: Tick,
}

impl SimReport {
    /// Ticks that passed during the run (wrapping)
    pub fn elapsed(&self) -> Tick {
        elapsed(self.end_tick, self.start_tick)
    }
}

/// Run `cycles` dispatch cycles, advancing the tick source
/// `ticks_per_cycle` times after each one
pub fn drive(scheduler: &mut Scheduler<'_, '_>, cycles: u32, ticks_per_cycle: u32) -> SimReport {
    let start_tick = scheduler.tick_count();

    for _ in 0..cycles {
        scheduler.run();
        for _ in 0..ticks_per_cycle {
            scheduler.advance_tick();
        }
    }

    SimReport {
        cycles,
        start_tick,
        end_tick: scheduler.tick_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;
    use crate::task::Task;
    use crate::tick::TickSource;
    use core::cell::Cell;

    #[test]
    fn test_drive_unbound() {
        let ticks = TickSource::new();
        let mut sched = Scheduler::new(&ticks);
        let report = drive(&mut sched, 10, 1);
        assert_eq!(report.cycles, 10);
        assert_eq!(report.elapsed(), 10);
    }

    #[test]
    fn test_drive_rates() {
        let ticks = TickSource::new();
        let fast = Cell::new(0u32);
        let slow = Cell::new(0u32);
        let idle = Cell::new(0u32);
        let mut f = || fast.set(fast.get() + 1);
        let mut s = || slow.set(slow.get() + 1);
        let mut i = || idle.set(idle.get() + 1);
        let mut table = [
            Task::new(&mut f, 10),
            Task::new(&mut s, 100),
            Task::continuous(&mut i),
        ];
        let mut sched = Scheduler::new(&ticks);
        sched.init(&mut table).unwrap();

        // Cycles observe ticks 0, 5, 10, ... 995
        let report = drive(&mut sched, 200, 5);
        assert_eq!(report.elapsed(), 1000);
        assert_eq!(fast.get(), 100);
        assert_eq!(slow.get(), 10);
        assert_eq!(idle.get(), 200);
    }

    #[test]
    fn test_drive_with_step() {
        let ticks = TickSource::new();
        let hits = Cell::new(0u32);
        let mut count = || hits.set(hits.get() + 1);
        // 1 ms task on a 250 µs tick
        let mut table = [Task::new(&mut count, 1000)];
        let mut sched = Scheduler::new(&ticks);
        sched
            .init_with(&mut table, SchedulerConfig::default().with_tick_step(250))
            .unwrap();

        let report = drive(&mut sched, 8, 1);
        assert_eq!(report.end_tick, 2000);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_drive_across_wrap() {
        let ticks = TickSource::new();
        let hits = Cell::new(0u32);
        let mut count = || hits.set(hits.get() + 1);
        let mut table = [Task::new(&mut count, 16)];
        let mut sched = Scheduler::new(&ticks);
        sched.init(&mut table).unwrap();

        sched.set_tick_step(Tick::MAX - 63);
        sched.advance_tick();
        sched.set_tick_step(1);

        // 128 ticks spanning the overflow, one run per tick
        let report = drive(&mut sched, 128, 1);
        assert_eq!(report.start_tick, Tick::MAX - 63);
        assert_eq!(report.end_tick, 64);
        assert_eq!(hits.get(), 8);
    }
}
