//! Action dispatch - runs UpdateActions as background tasks
//!
//! The update function stays synchronous; this module is where returned
//! actions actually hit the runtime. Every task reports back through the
//! message channel, never by touching state directly.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::submit::Webhook;

/// Dispatch an action from the update loop.
///
/// Delivery runs on a spawned task; its result comes back as
/// `Message::SubmissionResolved` tagged with the attempt's `seq`.
pub fn handle_action<W>(action: UpdateAction, webhook: Arc<W>, tx: mpsc::Sender<Message>)
where
    W: Webhook + Send + Sync + 'static,
{
    match action {
        UpdateAction::DeliverSubmission {
            seq,
            endpoint,
            payload,
        } => {
            tokio::spawn(async move {
                let result = webhook
                    .deliver(&endpoint, &payload)
                    .await
                    .map_err(|e| e.to_string());
                if tx
                    .send(Message::SubmissionResolved { seq, result })
                    .await
                    .is_err()
                {
                    debug!(seq, "Event loop gone before submission result arrived");
                }
            });
        }
    }
}
