//! Application state - the single source of truth (TEA pattern)

use folio_core::{ContactDraft, ContactField, DraftIssue, Profile, SubmissionStatus};

use crate::config::Settings;

/// The five portfolio sections, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ProfileSummary,
    WorkHistory,
    AcademicHistory,
    ProjectGallery,
    ContactForm,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 5] = [
        Section::ProfileSummary,
        Section::WorkHistory,
        Section::AcademicHistory,
        Section::ProjectGallery,
        Section::ContactForm,
    ];

    /// Stable identifier, used in logs.
    pub fn id(&self) -> &'static str {
        match self {
            Section::ProfileSummary => "profile-summary",
            Section::WorkHistory => "work-history",
            Section::AcademicHistory => "academic-history",
            Section::ProjectGallery => "project-gallery",
            Section::ContactForm => "contact-form",
        }
    }

    /// Tab label shown in the section bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::ProfileSummary => "Profile",
            Section::WorkHistory => "Experience",
            Section::AcademicHistory => "Education",
            Section::ProjectGallery => "Projects",
            Section::ContactForm => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Section at a 0-based index, if in range.
    pub fn from_index(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }

    /// Next section, wrapping past the last.
    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous section, wrapping before the first.
    pub fn prev(&self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}

/// Which input layer owns keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Section navigation; printable keys are commands.
    #[default]
    Browse,
    /// Contact form editing; printable keys are text input.
    ContactForm,
}

/// Focusable elements of the contact form, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    Send,
}

impl FormFocus {
    const ORDER: [FormFocus; 5] = [
        FormFocus::Name,
        FormFocus::Email,
        FormFocus::Subject,
        FormFocus::Message,
        FormFocus::Send,
    ];

    fn position(&self) -> usize {
        FormFocus::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> FormFocus {
        FormFocus::ORDER[(self.position() + 1) % FormFocus::ORDER.len()]
    }

    pub fn prev(&self) -> FormFocus {
        let len = FormFocus::ORDER.len();
        FormFocus::ORDER[(self.position() + len - 1) % len]
    }

    /// The draft field under focus, `None` on the Send button.
    pub fn field(&self) -> Option<ContactField> {
        match self {
            FormFocus::Name => Some(ContactField::Name),
            FormFocus::Email => Some(ContactField::Email),
            FormFocus::Subject => Some(ContactField::Subject),
            FormFocus::Message => Some(ContactField::Message),
            FormFocus::Send => None,
        }
    }
}

/// Contact form state: draft, focus, and the submission lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub draft: ContactDraft,
    pub focus: FormFocus,
    pub status: SubmissionStatus,
    /// Validation issue blocking the current draft, cleared on edit.
    pub form_error: Option<DraftIssue>,
    /// Monotonic counter identifying the latest submit attempt. Responses
    /// carrying an older value are stale and discarded.
    pub submit_seq: u64,
}

/// Top-level application state.
///
/// The profile and settings are immutable after startup; everything else is
/// mutated exclusively by `handler::update`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub profile: Profile,
    pub settings: Settings,
    pub active_section: Section,
    pub ui_mode: UiMode,
    pub contact: ContactFormState,
    /// Content scroll offset for the active section. Reset on section change.
    pub scroll: u16,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(profile: Profile, settings: Settings) -> Self {
        Self {
            profile,
            settings,
            active_section: Section::ProfileSummary,
            ui_mode: UiMode::Browse,
            contact: ContactFormState::default(),
            scroll: 0,
            should_quit: false,
        }
    }
}
