//! Contact submission lifecycle handlers
//!
//! Transitions: `Idle|Succeeded|Failed -> Pending -> (Succeeded | Failed)`.
//! A new attempt supersedes an in-flight one; the stale attempt's result is
//! identified by its sequence number and discarded when it lands.

use chrono::Utc;
use tracing::{debug, info, warn};

use folio_core::{SubmissionStatus, SubmitFailure};

use crate::state::AppState;
use crate::submit::DeliveryOutcome;

use super::{UpdateAction, UpdateResult};

/// Handle `Message::SubmitContact`.
///
/// Validation failures never leave the form layer; the status only moves to
/// Pending for a draft that could actually be sent. The configuration guard
/// runs after Pending is set and resolves it to Failed in the same update,
/// with no delivery action emitted.
pub fn handle_submit_contact(state: &mut AppState) -> UpdateResult {
    if let Some(issue) = state.contact.draft.first_issue() {
        state.contact.form_error = Some(issue);
        return UpdateResult::none();
    }
    state.contact.form_error = None;

    state.contact.status = SubmissionStatus::Pending;
    state.contact.submit_seq += 1;
    let seq = state.contact.submit_seq;

    let Some(endpoint) = state.settings.contact.endpoint() else {
        warn!("Submit attempted without a configured webhook endpoint");
        state.contact.status = SubmissionStatus::Failed(SubmitFailure::ConfigurationMissing);
        return UpdateResult::none();
    };

    let payload = state.contact.draft.to_payload(Utc::now());
    info!(seq, "Submitting contact form");
    UpdateResult::action(UpdateAction::DeliverSubmission {
        seq,
        endpoint,
        payload,
    })
}

/// Handle `Message::SubmissionResolved`.
pub fn handle_submission_resolved(
    state: &mut AppState,
    seq: u64,
    result: Result<DeliveryOutcome, String>,
) -> UpdateResult {
    if seq != state.contact.submit_seq {
        debug!(
            seq,
            current = state.contact.submit_seq,
            "Discarding stale submission result"
        );
        return UpdateResult::none();
    }

    match result {
        Ok(DeliveryOutcome::Accepted) => {
            info!(seq, "Contact submission accepted");
            state.contact.status = SubmissionStatus::Succeeded;
            state.contact.draft.reset();
        }
        Ok(DeliveryOutcome::Rejected { status }) => {
            warn!(seq, status, "Contact submission rejected by webhook");
            state.contact.status =
                SubmissionStatus::Failed(SubmitFailure::RemoteRejection { status });
        }
        Err(error) => {
            warn!(seq, %error, "Contact submission failed in transport");
            state.contact.status = SubmissionStatus::Failed(SubmitFailure::Transport);
        }
    }
    UpdateResult::none()
}
