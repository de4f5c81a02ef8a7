//! ALICE-Coop — Cooperative tick scheduler
//!
//! Run the right equation at the right tick, and nothing else.
//!
//! Minimal cooperative scheduler for single-threaded control loops:
//! - Caller-owned static task table (no heap, no allocation)
//! - Periodic and continuous tasks, dispatched in table order
//! - Wraparound-safe due times on a 32-bit tick counter
//! - Tick source that an interrupt handler can advance without locks
//!
//! Author: Moroya Sakamoto

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod error;
pub mod tick;
pub mod task;
pub mod scheduler;
pub mod sim;

pub use config::SchedulerConfig;
pub use error::InitError;
pub use tick::{Tick, TickSource};
pub use task::{Task, TaskFn};
pub use scheduler::Scheduler;
pub use sim::SimReport;
