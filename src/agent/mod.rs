//! Generation and evaluation agents
//!
//! The driver generates candidate domains in batches; the swarm
//! evaluates them with bounded-concurrency model calls.

pub mod driver;
pub mod parser;
pub mod swarm;

// Re-export main functionality
pub use driver::{DriverAgent, DRIVER_MODEL};
pub use swarm::{filter_worth_checking, rank_evaluations, SwarmAgent, DEFAULT_MIN_SCORE, SWARM_MODEL};
