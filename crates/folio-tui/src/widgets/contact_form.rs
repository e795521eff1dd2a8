//! Contact form section

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_app::state::{ContactFormState, FormFocus};
use folio_core::ContactField;

use crate::theme::styles;

const LABEL_COLUMN: usize = 9;
const FIELDS: [(FormFocus, ContactField); 4] = [
    (FormFocus::Name, ContactField::Name),
    (FormFocus::Email, ContactField::Email),
    (FormFocus::Subject, ContactField::Subject),
    (FormFocus::Message, ContactField::Message),
];

/// The contact form: four labeled inputs, a Send button, and a status line.
pub struct ContactFormView<'a> {
    form: &'a ContactFormState,
    /// Whether form-editing mode is active. Controls the border highlight
    /// and the text cursor on the focused field.
    editing: bool,
}

impl<'a> ContactFormView<'a> {
    pub fn new(form: &'a ContactFormState, editing: bool) -> Self {
        Self { form, editing }
    }

    fn field_line(&self, focus: FormFocus, field: ContactField) -> Line<'static> {
        let focused = self.editing && self.form.focus == focus;
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let marker = if field.is_required() { "*" } else { " " };
        let label = format!("{marker}{:<LABEL_COLUMN$}", field.label());

        let mut value = self.form.draft.field(field).to_string();
        if focused {
            value.push('▌');
        }

        Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(value, styles::text_primary()),
        ])
    }

    fn send_line(&self) -> Line<'static> {
        let focused = self.editing && self.form.focus == FormFocus::Send;
        let style = if focused {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        };
        Line::from(Span::styled("[ Send ]", style))
    }

    fn status_line(&self) -> Option<Line<'static>> {
        if let Some(issue) = self.form.form_error {
            return Some(Line::from(Span::styled(
                issue.hint().to_string(),
                Style::default().fg(crate::theme::palette::STATUS_YELLOW),
            )));
        }
        self.form.status.message().map(|message| {
            Line::from(Span::styled(
                message.to_string(),
                styles::submission_status(&self.form.status),
            ))
        })
    }
}

impl Widget for ContactFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.editing);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = FIELDS
            .iter()
            .map(|(focus, field)| self.field_line(*focus, *field))
            .collect();
        lines.push(Line::raw(""));
        lines.push(self.send_line());
        if let Some(status) = self.status_line() {
            lines.push(Line::raw(""));
            lines.push(status);
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
