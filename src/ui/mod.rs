pub mod cards;
pub mod detail_popup;
pub mod layout;
pub mod levels;
pub mod login;
pub mod popups;

pub use cards::draw_card_grid;
pub use detail_popup::draw_detail_popup;
pub use levels::draw_level_bar;
pub use login::draw_login;
pub use popups::{draw_alert, draw_logout_confirm};

use crate::models::{App, Focus, Screen};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Top-level renderer: pure function of the app state, no reads from the
/// display.
pub fn draw(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => draw_login(f, app),
        Screen::Browse => draw_browse(f, app),
    }

    if let Some(message) = &app.alert {
        draw_alert(f, message);
    }
}

fn draw_browse(f: &mut Frame, app: &App) {
    let chunks = layout::calculate_browse_chunks(f.area());

    let title = Paragraph::new("Vocabulary Lessons")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks.header_area);

    draw_level_bar(
        f,
        chunks.level_area,
        &app.levels,
        app.level_cursor,
        app.active_level.as_ref(),
        app.focus == Focus::Levels,
    );
    draw_card_grid(f, chunks.cards_area, app);
    draw_help(f, chunks.help_area, app);

    if let Some(detail) = &app.detail {
        draw_detail_popup(f, detail);
    }
    if app.confirm_logout {
        draw_logout_confirm(f);
    }
}

fn draw_help(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let key = |label: &str| {
        Span::styled(
            label.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    let spans = match app.focus {
        Focus::Levels => vec![
            key("←/→"),
            Span::from(" Lessons  "),
            key("Enter"),
            Span::from(" Load  "),
            key("Tab"),
            Span::from(" Cards  "),
            key("Ctrl+L"),
            Span::from(" Log Out  "),
            key("q"),
            Span::from(" Quit"),
        ],
        Focus::Cards => vec![
            key("Arrows"),
            Span::from(" Navigate  "),
            key("Enter"),
            Span::from(" Details  "),
            key("p"),
            Span::from(" Pronounce  "),
            key("Esc"),
            Span::from(" Lessons  "),
            key("q"),
            Span::from(" Quit"),
        ],
    };
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
