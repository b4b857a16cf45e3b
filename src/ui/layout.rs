use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct BrowseLayout {
    pub header_area: Rect,
    pub level_area: Rect,
    pub cards_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_browse_chunks(area: Rect) -> BrowseLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(area);

    BrowseLayout {
        header_area: chunks[0],
        level_area: chunks[1],
        cards_area: chunks[2],
        help_area: chunks[3],
    }
}

pub struct LoginLayout {
    pub title_area: Rect,
    pub username_area: Rect,
    pub password_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_login_chunks(area: Rect) -> LoginLayout {
    // A narrow column in the middle of the screen.
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(horizontal[1]);

    LoginLayout {
        title_area: chunks[1],
        username_area: chunks[2],
        password_area: chunks[3],
        help_area: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_layout_heights() {
        let layout = calculate_browse_chunks(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.level_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.cards_area.height >= 7);
    }

    #[test]
    fn test_login_layout_field_heights() {
        let layout = calculate_login_chunks(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.username_area.height, 3);
        assert_eq!(layout.password_area.height, 3);
        assert_eq!(layout.username_area.width, 50);
    }
}
