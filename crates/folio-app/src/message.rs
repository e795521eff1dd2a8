//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::Section;
use crate::submit::DeliveryOutcome;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Section Navigation
    // ─────────────────────────────────────────────────────────
    /// Activate the next section (wraps)
    NextSection,
    /// Activate the previous section (wraps)
    PrevSection,
    /// Jump directly to a section
    SelectSection(Section),
    /// Scroll section content up one line
    ScrollUp,
    /// Scroll section content down one line
    ScrollDown,

    // ─────────────────────────────────────────────────────────
    // Contact Form
    // ─────────────────────────────────────────────────────────
    /// Enter form-editing mode (contact section only)
    EnterForm,
    /// Leave form-editing mode back to browse
    LeaveForm,
    /// Move focus to the next form element
    FormFocusNext,
    /// Move focus to the previous form element
    FormFocusPrev,
    /// Insert a character into the focused field
    FormInput(char),
    /// Delete the last character of the focused field
    FormBackspace,
    /// Submit the current draft
    SubmitContact,

    /// A delivery task finished.
    ///
    /// `seq` ties the result to the attempt that spawned it; results for a
    /// superseded attempt are discarded. `Err` carries the transport error
    /// text for logging only.
    SubmissionResolved {
        seq: u64,
        result: Result<DeliveryOutcome, String>,
    },
}
