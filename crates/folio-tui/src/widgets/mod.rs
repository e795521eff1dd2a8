//! Reusable TUI widgets

mod contact_form;
mod education;
mod experience;
mod footer;
mod header;
mod profile_view;
mod projects;
mod section_tabs;

pub use contact_form::ContactFormView;
pub use education::EducationView;
pub use experience::ExperienceView;
pub use footer::FooterHints;
pub use header::HeaderBar;
pub use profile_view::ProfileView;
pub use projects::ProjectsView;
pub use section_tabs::SectionTabs;
