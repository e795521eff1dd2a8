//! Profile summary section: bio paragraph and skill bars

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_core::Profile;

use crate::theme::{palette, styles};

const BAR_WIDTH: usize = 20;
const NAME_COLUMN: usize = 22;

/// Summary text plus one proficiency bar per skill.
pub struct ProfileView<'a> {
    profile: &'a Profile,
    scroll: u16,
}

impl<'a> ProfileView<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    fn skill_line(name: &str, level: u8) -> Line<'static> {
        let filled = (level.min(100) as usize * BAR_WIDTH) / 100;
        Line::from(vec![
            Span::styled(format!("{name:<NAME_COLUMN$}"), styles::text_primary()),
            Span::styled(
                "█".repeat(filled),
                ratatui::style::Style::default().fg(palette::BAR_FILLED),
            ),
            Span::styled(
                "░".repeat(BAR_WIDTH - filled),
                ratatui::style::Style::default().fg(palette::BAR_EMPTY),
            ),
            Span::styled(format!(" {level:>3}%"), styles::text_muted()),
        ])
    }
}

impl Widget for ProfileView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(Span::styled(
            self.profile.summary.clone(),
            styles::text_secondary(),
        ))];
        if !self.profile.skills.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled("Skills", styles::accent_bold())));
            for skill in &self.profile.skills {
                lines.push(Self::skill_line(&skill.name, skill.level));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
