//! # folio-core - Core Domain Types
//!
//! Foundation crate for folio. Provides the portfolio data model, the
//! contact-form domain types (draft, submission status, outbound payload),
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Profile (`profile`)
//! - [`Profile`] - Immutable portfolio data (identity, skills, history, projects)
//! - [`Skill`], [`ExperienceEntry`], [`EducationEntry`], [`Project`]
//!
//! ### Contact (`contact`)
//! - [`ContactDraft`] - The in-progress, user-editable contact-form values
//! - [`ContactField`] - Field selector for draft edits
//! - [`SubmissionStatus`] - Outcome of the most recent submit attempt
//! - [`SubmitFailure`] - The three failure kinds, each with a display message
//! - [`OutboundPayload`] - The JSON record posted to the webhook
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod contact;
pub mod error;
pub mod logging;
pub mod profile;

/// Prelude for common imports used throughout all folio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use contact::{
    ContactDraft, ContactField, DraftIssue, OutboundPayload, SubmissionStatus, SubmitFailure,
};
pub use error::{Error, Result, ResultExt};
pub use profile::{EducationEntry, ExperienceEntry, Profile, Project, Skill};
