//! Academic history section

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_core::EducationEntry;

use crate::theme::styles;

pub struct EducationView<'a> {
    entries: &'a [EducationEntry],
    scroll: u16,
}

impl<'a> EducationView<'a> {
    pub fn new(entries: &'a [EducationEntry]) -> Self {
        Self { entries, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for EducationView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(vec![
                Span::styled(entry.degree.clone(), styles::accent_bold()),
                Span::styled(format!("  {}", entry.school), styles::text_primary()),
            ]));
            lines.push(Line::from(Span::styled(
                entry.period.clone(),
                styles::text_muted(),
            )));
            if let Some(detail) = &entry.detail {
                lines.push(Line::from(Span::styled(
                    detail.clone(),
                    styles::text_secondary(),
                )));
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "No academic history listed",
                styles::text_muted(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
