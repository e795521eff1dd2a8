//! Section tab bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use folio_app::state::Section;

use crate::theme::styles;

/// Tab bar over the five portfolio sections.
pub struct SectionTabs {
    active: Section,
}

impl SectionTabs {
    pub fn new(active: Section) -> Self {
        Self { active }
    }

    fn tab_titles() -> Vec<Line<'static>> {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), styles::text_muted()),
                    Span::raw(format!("{} ", section.label())),
                ])
            })
            .collect()
    }
}

impl Widget for SectionTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tabs = Tabs::new(Self::tab_titles())
            .select(self.active.index())
            .highlight_style(styles::focused_selected())
            .divider("│");

        // Left padding to line up with the bordered blocks above and below
        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        tabs.render(padded_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_all_labels_render() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(SectionTabs::new(Section::ProfileSummary), term.area());

        for label in ["Profile", "Experience", "Education", "Projects", "Contact"] {
            assert!(term.buffer_contains(label), "missing tab label {label}");
        }
    }

    #[test]
    fn test_tabs_show_jump_digits() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(SectionTabs::new(Section::ContactForm), term.area());
        assert!(term.buffer_contains("1"));
        assert!(term.buffer_contains("5"));
    }
}
