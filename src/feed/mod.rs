//! # Queue Feed Layer
//!
//! The only background activity in Campus Hub: a periodic, observable stream
//! of mock cafeteria queue counts.
//!
//! ```text
//! QueueFeed task ──snapshot──▶ broadcast channel ──▶ any number of observers
//!      │ tick (3s)                                    (TUI forwards into the
//!      └─ SplitMix64 deltas, clamped [0, 25]           action channel)
//! ```
//!
//! - [`simulator`]: the `QueueFeed` lifecycle and snapshot types
//! - [`rng`]: the seeded generator behind the per-tick deltas

pub mod rng;
pub mod simulator;

pub use simulator::{CafeteriaQueue, QueueFeed, QueueSnapshot, DEFAULT_TICK, QUEUE_MAX};
