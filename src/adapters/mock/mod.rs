//! Mock implementations for testing.
//!
//! Deterministic stand-ins for the collaborator traits, so the controller can
//! be exercised without a real widget toolkit or wall-clock timers.
//!
//! # Available Mocks
//!
//! - [`TextField`] - In-memory text input with subscription tracking
//! - [`ManualScheduler`] - Virtual-clock scheduler advanced by hand

pub mod scheduler;
pub mod surface;

pub use scheduler::ManualScheduler;
pub use surface::TextField;
