//! Trait abstractions for the draft controller's collaborators.
//!
//! The controller never talks to a concrete text widget or timer queue. It is
//! generic over these seams so hosts can plug in their own widget and event
//! loop, and tests can drive everything deterministically.
//!
//! # Traits
//!
//! - [`InputSurface`] - the bound text input (read/write value, subscriptions)
//! - [`Scheduler`] - deferred execution with cancellable handles

pub mod scheduler;
pub mod surface;

pub use scheduler::{Scheduler, TimerId};
pub use surface::InputSurface;
