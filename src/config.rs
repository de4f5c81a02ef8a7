//! Scheduler configuration
//!
//! Author: Moroya Sakamoto

use crate::tick::{Tick, TickSource};

/// Settings applied when a task table is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct SchedulerConfig {
    /// Ticks added per timer advance (e.g. microseconds per interrupt)
    pub tick_step: Tick,
}

impl SchedulerConfig {
    /// Replace the tick step
    pub const fn with_tick_step(self, tick_step: Tick) -> Self {
        Self { tick_step, ..self }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_step: TickSource::DEFAULT_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_step() {
        assert_eq!(SchedulerConfig::default().tick_step, 1);
    }

    #[test]
    fn test_with_tick_step() {
        let config = SchedulerConfig::default().with_tick_step(100);
        assert_eq!(config.tick_step, 100);
    }
}
