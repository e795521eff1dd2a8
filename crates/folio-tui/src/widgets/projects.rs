//! Project gallery section

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_core::Project;

use crate::theme::styles;

pub struct ProjectsView<'a> {
    projects: &'a [Project],
    scroll: u16,
}

impl<'a> ProjectsView<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self { projects, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    fn project_lines(project: &Project) -> Vec<Line<'static>> {
        let mut title_spans = vec![Span::styled(project.title.clone(), styles::accent_bold())];
        if !project.tech.is_empty() {
            title_spans.push(Span::styled(
                format!("  [{}]", project.tech.join(", ")),
                styles::text_muted(),
            ));
        }

        let mut lines = vec![
            Line::from(title_spans),
            Line::from(Span::styled(
                project.description.clone(),
                styles::text_secondary(),
            )),
        ];
        if let Some(link) = &project.link {
            lines.push(Line::from(Span::styled(link.clone(), styles::accent())));
        }
        lines
    }
}

impl Widget for ProjectsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, project) in self.projects.iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }
            lines.extend(Self::project_lines(project));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "No projects listed",
                styles::text_muted(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
