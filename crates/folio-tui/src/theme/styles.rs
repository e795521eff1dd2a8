//! Semantic style builders for the folio theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use folio_core::{SubmissionStatus, SubmitFailure};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - used for the selected tab and the focused Send button
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Style for the submission status banner.
pub fn submission_status(status: &SubmissionStatus) -> Style {
    match status {
        SubmissionStatus::Idle => text_muted(),
        SubmissionStatus::Pending => Style::default().fg(palette::STATUS_YELLOW),
        SubmissionStatus::Succeeded => Style::default().fg(palette::STATUS_GREEN),
        SubmissionStatus::Failed(SubmitFailure::ConfigurationMissing) => {
            Style::default().fg(palette::STATUS_YELLOW)
        }
        SubmissionStatus::Failed(_) => Style::default().fg(palette::STATUS_RED),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_styles_differ_by_outcome() {
        let ok = submission_status(&SubmissionStatus::Succeeded);
        let err = submission_status(&SubmissionStatus::Failed(SubmitFailure::Transport));
        assert_ne!(ok.fg, err.fg);
        assert_eq!(ok.fg, Some(palette::STATUS_GREEN));
        assert_eq!(err.fg, Some(palette::STATUS_RED));
    }
}
