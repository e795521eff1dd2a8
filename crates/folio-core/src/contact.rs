//! Contact-form domain types: draft, submission status, and wire payload.
//!
//! The draft and status are small value records replaced wholesale on each
//! transition rather than mutated piecemeal, so tests can compare them with
//! plain equality.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Field selector for [`ContactDraft`] edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Label shown next to the input in the form.
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    /// Whether the field must be non-empty at submit time.
    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Subject)
    }
}

/// The in-progress, user-editable contact-form values.
///
/// Created empty at session start, mutated per keystroke, reset to empty
/// immediately after a successful submission. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A reason the draft cannot be submitted yet.
///
/// These are caller-level validation results; the submission controller is
/// never invoked while one holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftIssue {
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingMessage,
}

impl DraftIssue {
    /// Inline hint rendered under the form.
    pub fn hint(&self) -> &'static str {
        match self {
            DraftIssue::MissingName => "Name is required",
            DraftIssue::MissingEmail => "Email is required",
            DraftIssue::InvalidEmail => "Email doesn't look valid",
            DraftIssue::MissingMessage => "Message is required",
        }
    }
}

impl ContactDraft {
    /// Read access to a field by selector.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Mutable access to a field by selector.
    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// First blocking issue, or `None` when the draft is submittable.
    ///
    /// Required-field presence and the email shape are checked in form
    /// order, mirroring native `required` input enforcement.
    pub fn first_issue(&self) -> Option<DraftIssue> {
        if self.name.trim().is_empty() {
            return Some(DraftIssue::MissingName);
        }
        if self.email.trim().is_empty() {
            return Some(DraftIssue::MissingEmail);
        }
        if !email_shape_ok(self.email.trim()) {
            return Some(DraftIssue::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Some(DraftIssue::MissingMessage);
        }
        None
    }

    /// Clear all fields (post-success reset).
    pub fn reset(&mut self) {
        *self = ContactDraft::default();
    }

    /// Build the wire payload, stamping the submission instant.
    pub fn to_payload(&self, created_at: DateTime<Utc>) -> OutboundPayload {
        OutboundPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            created_at,
        }
    }
}

/// Structural well-formed-email check: one `@` with a dotted domain after it.
///
/// Deliberately shallow -- the webhook is the source of truth, this only
/// catches obvious typos before a request is wasted.
pub fn email_shape_ok(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.contains(char::is_whitespace),
        None => false,
    }
}

/// The JSON record posted to the webhook.
///
/// Field names match the spreadsheet columns on the receiving end, so the
/// timestamp keeps its camelCase wire name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// The three failure kinds a submit attempt can end in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// The endpoint was never set or still holds the placeholder value.
    /// Detected before any network attempt.
    ConfigurationMissing,
    /// A response was received but its status indicates failure.
    /// The body is not inspected, by design.
    RemoteRejection { status: u16 },
    /// Network/DNS-level failure raised by the HTTP client.
    Transport,
}

impl SubmitFailure {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitFailure::ConfigurationMissing => "Webhook endpoint not configured",
            SubmitFailure::RemoteRejection { .. } => "Failed to send. Check webhook deployment.",
            SubmitFailure::Transport => "Network error. Try again.",
        }
    }
}

/// Outcome of the most recent submit attempt.
///
/// Exactly one variant holds at any time; transitions are
/// `Idle|Failed|Succeeded -> Pending -> (Succeeded | Failed)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// No attempt yet; no message shown.
    #[default]
    Idle,
    /// Attempt in flight.
    Pending,
    /// The webhook accepted the payload.
    Succeeded,
    /// The attempt ended in one of the three failure kinds.
    Failed(SubmitFailure),
}

impl SubmissionStatus {
    /// User-visible message, `None` while idle.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Pending => Some("Sending..."),
            SubmissionStatus::Succeeded => Some("Message sent successfully"),
            SubmissionStatus::Failed(failure) => Some(failure.message()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled_draft() -> ContactDraft {
        ContactDraft {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_draft_starts_empty() {
        let draft = ContactDraft::default();
        assert_eq!(draft, ContactDraft::default());
        assert_eq!(draft.first_issue(), Some(DraftIssue::MissingName));
    }

    #[test]
    fn test_draft_field_access_roundtrip() {
        let mut draft = ContactDraft::default();
        draft.field_mut(ContactField::Email).push_str("a@x.com");
        assert_eq!(draft.field(ContactField::Email), "a@x.com");
        assert_eq!(draft.field(ContactField::Name), "");
    }

    #[test]
    fn test_first_issue_checks_in_form_order() {
        let mut draft = filled_draft();
        assert_eq!(draft.first_issue(), None);

        draft.message.clear();
        assert_eq!(draft.first_issue(), Some(DraftIssue::MissingMessage));

        draft.email = "not-an-email".to_string();
        assert_eq!(draft.first_issue(), Some(DraftIssue::InvalidEmail));

        draft.name = "   ".to_string();
        assert_eq!(draft.first_issue(), Some(DraftIssue::MissingName));
    }

    #[test]
    fn test_subject_is_optional() {
        let mut draft = filled_draft();
        draft.subject.clear();
        assert_eq!(draft.first_issue(), None);
        assert!(!ContactField::Subject.is_required());
        assert!(ContactField::Message.is_required());
    }

    #[test]
    fn test_email_shape() {
        assert!(email_shape_ok("a@x.com"));
        assert!(email_shape_ok("first.last@sub.domain.org"));
        assert!(!email_shape_ok("plainaddress"));
        assert!(!email_shape_ok("@no-local.com"));
        assert!(!email_shape_ok("no-domain@"));
        assert!(!email_shape_ok("no-tld@host"));
        assert!(!email_shape_ok("two@@x.com"));
        assert!(!email_shape_ok("spaced@x .com"));
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let mut draft = filled_draft();
        draft.reset();
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn test_payload_shape() {
        // The outbound JSON body carries the four draft fields plus a
        // valid ISO-8601 createdAt stamp.
        let created_at = Utc.with_ymd_and_hms(2026, 8, 25, 12, 30, 0).unwrap();
        let payload = filled_draft().to_payload(created_at);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["subject"], "Hi");
        assert_eq!(json["message"], "Hello");

        let stamp = json["createdAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(SubmissionStatus::Idle.message(), None);
        assert_eq!(SubmissionStatus::Pending.message(), Some("Sending..."));
        assert_eq!(
            SubmissionStatus::Succeeded.message(),
            Some("Message sent successfully")
        );
        assert_eq!(
            SubmissionStatus::Failed(SubmitFailure::ConfigurationMissing).message(),
            Some("Webhook endpoint not configured")
        );
        assert_eq!(
            SubmissionStatus::Failed(SubmitFailure::RemoteRejection { status: 502 }).message(),
            Some("Failed to send. Check webhook deployment.")
        );
        assert_eq!(
            SubmissionStatus::Failed(SubmitFailure::Transport).message(),
            Some("Network error. Try again.")
        );
    }

    #[test]
    fn test_status_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert!(!SubmissionStatus::default().is_pending());
        assert!(SubmissionStatus::Pending.is_pending());
    }
}
