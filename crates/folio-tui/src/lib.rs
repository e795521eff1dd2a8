//! # folio-tui - Terminal UI
//!
//! Rendering and terminal I/O for folio. This crate is the outer shell of
//! the TEA loop: it polls crossterm events, converts them to messages for
//! `folio-app`, and draws the state it gets back. No business logic lives
//! here.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use runner::run;
