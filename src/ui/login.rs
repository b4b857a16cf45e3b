use crate::models::{App, LoginField};
use crate::ui::layout::calculate_login_chunks;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_field(f: &mut Frame, area: Rect, title: &str, content: &str, focused: bool) {
    let field = Paragraph::new(content.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(field_style(focused)),
    );
    f.render_widget(field, area);
    if focused {
        let cursor_x = area.x + 1 + content.width() as u16;
        f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

pub fn draw_login(f: &mut Frame, app: &App) {
    let layout = calculate_login_chunks(f.area());

    let title = Paragraph::new("Vocabulary Lessons")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let focused = app.login.focused();
    draw_field(
        f,
        layout.username_area,
        "Username",
        &app.login.username,
        focused == LoginField::Username,
    );
    let masked = "*".repeat(app.login.password.chars().count());
    draw_field(
        f,
        layout.password_area,
        "Password",
        &masked,
        focused == LoginField::Password,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Tab",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Switch  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Log In  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
