//! Identity header widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_core::Profile;

use crate::theme::styles;

/// Header bar: name + title on the first row, contact details on the second.
pub struct HeaderBar<'a> {
    profile: &'a Profile,
}

impl<'a> HeaderBar<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    fn contact_line(&self) -> Line<'static> {
        let mut parts = vec![self.profile.location.clone(), self.profile.email.clone()];
        if let Some(phone) = &self.profile.phone {
            parts.push(phone.clone());
        }
        if let Some(linkedin) = &self.profile.linkedin {
            parts.push(linkedin.clone());
        }
        Line::from(Span::styled(parts.join("  │  "), styles::text_muted()))
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(self.profile.name.clone(), styles::accent_bold()),
                Span::raw("  "),
                Span::styled(self.profile.title.clone(), styles::text_secondary()),
            ]),
            self.contact_line(),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
