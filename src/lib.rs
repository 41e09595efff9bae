//! draftkeeper - debounced draft saving for a single text input
//!
//! A [`DraftController`](controller::DraftController) watches one input
//! surface, coalesces edits into delayed saves, holds saves back during IME
//! composition, and keeps a bounded history of distinct saved values.

pub mod adapters;
pub mod config;
pub mod controller;
pub mod debouncer;
pub mod driver;
pub mod error;
pub mod events;
pub mod history;
pub mod logging;
pub mod prelude;
pub mod traits;
