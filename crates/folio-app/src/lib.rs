//! # folio-app - Application Engine
//!
//! The TEA (The Elm Architecture) core of folio. Owns all mutable state and
//! every state transition; the TUI crate only renders state and feeds events
//! back in as messages.
//!
//! ## Architecture
//!
//! ```text
//! InputKey ──► Message ──► update(state, msg) ──► UpdateResult
//!                                │                    │
//!                                ▼                    ▼
//!                            AppState          UpdateAction (async work)
//!                                                     │
//!                                                     ▼
//!                                        handle_action() ──► tokio::spawn
//!                                                     │
//!                                   Message::SubmissionResolved ──► loop
//! ```
//!
//! The update function is synchronous and side-effect free; anything that
//! touches the network is returned as an [`UpdateAction`] and performed by
//! [`handle_action`] on the runtime.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod submit;

pub use actions::handle_action;
pub use config::{ContactSettings, Settings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, ContactFormState, FormFocus, Section, UiMode};
pub use submit::{DeliveryOutcome, Webhook, WebhookClient};
