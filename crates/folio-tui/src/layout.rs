//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Identity header (name, title, contact line)
    pub header: Rect,

    /// Section tab bar
    pub tabs: Rect,

    /// Active section content
    pub content: Rect,

    /// Key hint footer
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = [
        Constraint::Length(4), // Header (glass container, 2 inner rows)
        Constraint::Length(1), // Tabs
        Constraint::Min(5),    // Content (glass container)
        Constraint::Length(1), // Footer hints
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        content: chunks[2],
        footer: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.tabs.height, 1);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(
            layout.header.height + layout.tabs.height + layout.content.height + layout.footer.height,
            area.height
        );
        assert_eq!(layout.tabs.y, 4);
        assert_eq!(layout.content.y, 5);
    }

    #[test]
    fn test_content_absorbs_extra_height() {
        let small = create(Rect::new(0, 0, 80, 24));
        let large = create(Rect::new(0, 0, 80, 50));
        assert_eq!(large.content.height - small.content.height, 26);
    }
}
