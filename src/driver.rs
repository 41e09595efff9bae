//! Async driver for tokio hosts.
//!
//! The controller is synchronous and single-threaded. This module gives it an
//! event loop: one task owns the controller and processes [`DraftMessage`]s in
//! order, so notifications, timer fires and API calls never interleave.
//!
//! # Usage
//!
//! ```rust,ignore
//! let (tx, rx) = mpsc::unbounded_channel();
//! let mut controller = DraftController::new(field, TokioScheduler::new(tx.clone()), options)?;
//! controller.start()?;
//! let task = tokio::spawn(driver::run(controller, rx));
//!
//! // From the widget's event handler:
//! tx.send(DraftMessage::Event(InputEvent::input()))?;
//!
//! // On teardown:
//! tx.send(DraftMessage::Shutdown)?;
//! let controller = task.await?;
//! ```

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::controller::DraftController;
use crate::events::InputEvent;
use crate::traits::{InputSurface, Scheduler, TimerId};

/// Messages processed by [`run`].
#[derive(Debug, Clone, PartialEq)]
pub enum DraftMessage {
    /// A surface notification
    Event(InputEvent),
    /// A scheduled timer elapsed
    TimerFired(TimerId),
    /// Request a debounced save
    Save,
    /// Force-save the given value, or the surface value when `None`
    ForceSave(Option<String>),
    /// Cancel any pending save
    CancelPendingSave,
    /// Destroy the controller and stop the loop
    Shutdown,
}

/// Process messages until [`DraftMessage::Shutdown`] or until every sender is
/// dropped. The controller is destroyed on exit and handed back.
///
/// A [`TokioScheduler`](crate::adapters::TokioScheduler) owned by the
/// controller holds a sender of its own, so with that scheduler the loop only
/// ends on `Shutdown`.
pub async fn run<S, Sc>(
    mut controller: DraftController<S, Sc>,
    mut rx: mpsc::UnboundedReceiver<DraftMessage>,
) -> DraftController<S, Sc>
where
    S: InputSurface,
    Sc: Scheduler,
{
    while let Some(message) = rx.recv().await {
        match message {
            DraftMessage::Event(event) => controller.handle_event(event),
            DraftMessage::TimerFired(id) => controller.handle_timer(id),
            DraftMessage::Save => {
                if let Err(err) = controller.save() {
                    warn!(error = %err, "save request failed");
                }
            }
            DraftMessage::ForceSave(value) => {
                if let Err(err) = controller.force_save(value.as_deref()) {
                    warn!(error = %err, "force save failed");
                }
            }
            DraftMessage::CancelPendingSave => controller.cancel_pending_save(),
            DraftMessage::Shutdown => {
                debug!("draft driver shutting down");
                break;
            }
        }
    }

    controller.destroy();
    controller
}
