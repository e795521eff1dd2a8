//! Key event handlers - translate keys to messages per UI mode

use tracing::trace;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormFocus, Section, UiMode};

/// Translate a key event into a message, honoring the active UI mode.
///
/// Browse mode treats printable keys as commands; form mode treats them as
/// text input. Ctrl+C quits from anywhere.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Browse => handle_browse_key(state, key),
        UiMode::ContactForm => handle_form_key(state, key),
    }
}

fn handle_browse_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::NextSection),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::PrevSection),

        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),

        InputKey::Char(c @ '1'..='5') => {
            let index = c.to_digit(10)? as usize - 1;
            Section::from_index(index).map(Message::SelectSection)
        }

        InputKey::Enter | InputKey::Char('i') if state.active_section == Section::ContactForm => {
            Some(Message::EnterForm)
        }

        _ => {
            trace!(?key, "Unbound key in browse mode");
            None
        }
    }
}

fn handle_form_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::LeaveForm),

        InputKey::Tab | InputKey::Down => Some(Message::FormFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FormFocusPrev),

        InputKey::CharCtrl('s') => Some(Message::SubmitContact),

        // Enter submits on the Send button, otherwise advances like Tab.
        InputKey::Enter if state.contact.focus == FormFocus::Send => Some(Message::SubmitContact),
        InputKey::Enter => Some(Message::FormFocusNext),

        InputKey::Char(c) => Some(Message::FormInput(c)),
        InputKey::Backspace => Some(Message::FormBackspace),

        _ => None,
    }
}
