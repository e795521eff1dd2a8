//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `submission`: Contact submission lifecycle handlers

pub(crate) mod keys;
pub(crate) mod submission;
pub(crate) mod update;

use url::Url;

use folio_core::OutboundPayload;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// POST a contact payload to the webhook in a background task.
    ///
    /// `seq` must be echoed back in `Message::SubmissionResolved` so the
    /// update loop can discard results from superseded attempts.
    DeliverSubmission {
        seq: u64,
        endpoint: Url,
        payload: OutboundPayload,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
