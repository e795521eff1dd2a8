//! Key hint footer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_app::state::{Section, UiMode};

use crate::theme::styles;

/// One-line footer showing the keys that currently do something.
pub struct FooterHints {
    mode: UiMode,
    active_section: Section,
}

impl FooterHints {
    pub fn new(mode: UiMode, active_section: Section) -> Self {
        Self {
            mode,
            active_section,
        }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.mode {
            UiMode::Browse => {
                let mut hints = vec![("Tab/←→", "switch"), ("1-5", "jump"), ("↑↓", "scroll")];
                if self.active_section == Section::ContactForm {
                    hints.push(("Enter", "edit form"));
                }
                hints.push(("q", "quit"));
                hints
            }
            UiMode::ContactForm => vec![
                ("Tab/↓", "next field"),
                ("Shift+Tab/↑", "prev"),
                ("Ctrl+S", "send"),
                ("Esc", "back"),
            ],
        }
    }
}

impl Widget for FooterHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  │  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }

        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        Paragraph::new(Line::from(spans)).render(padded_area, buf);
    }
}
