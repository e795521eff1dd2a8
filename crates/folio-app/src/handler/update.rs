//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::state::{AppState, Section, UiMode};

use super::keys::handle_key;
use super::submission::{handle_submission_resolved, handle_submit_contact};
use super::UpdateResult;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Section Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextSection => {
            activate_section(state, state.active_section.next());
            UpdateResult::none()
        }

        Message::PrevSection => {
            activate_section(state, state.active_section.prev());
            UpdateResult::none()
        }

        Message::SelectSection(section) => {
            activate_section(state, section);
            UpdateResult::none()
        }

        Message::ScrollUp => {
            state.scroll = state.scroll.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            state.scroll = state.scroll.saturating_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Contact Form
        // ─────────────────────────────────────────────────────────
        Message::EnterForm => {
            if state.active_section == Section::ContactForm {
                state.ui_mode = UiMode::ContactForm;
            }
            UpdateResult::none()
        }

        Message::LeaveForm => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }

        Message::FormFocusNext => {
            state.contact.focus = state.contact.focus.next();
            UpdateResult::none()
        }

        Message::FormFocusPrev => {
            state.contact.focus = state.contact.focus.prev();
            UpdateResult::none()
        }

        Message::FormInput(c) => {
            if let Some(field) = state.contact.focus.field() {
                state.contact.draft.field_mut(field).push(c);
                // Editing clears the validation hint; the last submission
                // outcome stays visible until the next attempt.
                state.contact.form_error = None;
            }
            UpdateResult::none()
        }

        Message::FormBackspace => {
            if let Some(field) = state.contact.focus.field() {
                state.contact.draft.field_mut(field).pop();
                state.contact.form_error = None;
            }
            UpdateResult::none()
        }

        Message::SubmitContact => handle_submit_contact(state),

        Message::SubmissionResolved { seq, result } => {
            handle_submission_resolved(state, seq, result)
        }
    }
}

/// Switch sections; leaving the contact section always drops form mode.
fn activate_section(state: &mut AppState, section: Section) {
    if state.active_section != section {
        debug!(from = state.active_section.id(), to = section.id(), "Section change");
        state.scroll = 0;
    }
    state.active_section = section;
    if section != Section::ContactForm {
        state.ui_mode = UiMode::Browse;
    }
}
