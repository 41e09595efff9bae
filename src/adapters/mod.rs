//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`TokioScheduler`] - timers backed by `tokio::time::sleep` tasks
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides deterministic test doubles:
//! - [`mock::TextField`] - In-memory text input
//! - [`mock::ManualScheduler`] - Virtual-clock scheduler

pub mod mock;
pub mod tokio_scheduler;

pub use mock::{ManualScheduler, TextField};
pub use tokio_scheduler::TokioScheduler;
