//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use folio_app::state::{AppState, Section, UiMode};

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    ContactFormView, EducationView, ExperienceView, FooterHints, HeaderBar, ProfileView,
    ProjectsView, SectionTabs,
};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering; state is never modified here.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(HeaderBar::new(&state.profile), areas.header);
    frame.render_widget(SectionTabs::new(state.active_section), areas.tabs);

    match state.active_section {
        Section::ProfileSummary => {
            frame.render_widget(
                ProfileView::new(&state.profile).scroll(state.scroll),
                areas.content,
            );
        }
        Section::WorkHistory => {
            frame.render_widget(
                ExperienceView::new(&state.profile.experience).scroll(state.scroll),
                areas.content,
            );
        }
        Section::AcademicHistory => {
            frame.render_widget(
                EducationView::new(&state.profile.education).scroll(state.scroll),
                areas.content,
            );
        }
        Section::ProjectGallery => {
            frame.render_widget(
                ProjectsView::new(&state.profile.projects).scroll(state.scroll),
                areas.content,
            );
        }
        Section::ContactForm => {
            let editing = state.ui_mode == UiMode::ContactForm;
            frame.render_widget(ContactFormView::new(&state.contact, editing), areas.content);
        }
    }

    frame.render_widget(
        FooterHints::new(state.ui_mode, state.active_section),
        areas.footer,
    );
}
