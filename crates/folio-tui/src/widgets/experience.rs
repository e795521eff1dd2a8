//! Work history section

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_core::ExperienceEntry;

use crate::theme::styles;

/// Chronological list of roles with their highlight bullets.
pub struct ExperienceView<'a> {
    entries: &'a [ExperienceEntry],
    scroll: u16,
}

impl<'a> ExperienceView<'a> {
    pub fn new(entries: &'a [ExperienceEntry]) -> Self {
        Self { entries, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    fn entry_lines(entry: &ExperienceEntry) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(entry.role.clone(), styles::accent_bold()),
                Span::styled(format!("  {}", entry.company), styles::text_primary()),
            ]),
            Line::from(Span::styled(entry.period.clone(), styles::text_muted())),
        ];
        for point in &entry.points {
            lines.push(Line::from(vec![
                Span::styled("  • ".to_string(), styles::text_muted()),
                Span::styled(point.clone(), styles::text_secondary()),
            ]));
        }
        lines
    }
}

impl Widget for ExperienceView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }
            lines.extend(Self::entry_lines(entry));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "No work history listed",
                styles::text_muted(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
