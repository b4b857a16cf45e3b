use crate::api::{LevelDescriptor, LevelNo};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// One entry per level descriptor, labeled with its level number. The bar is
/// rebuilt from the descriptor list on every draw, so a refreshed list fully
/// replaces the previous buttons. The active level keeps its highlight only
/// while it is present in the list (tolerant lookup).
pub fn draw_level_bar(
    f: &mut Frame,
    area: Rect,
    levels: &[LevelDescriptor],
    cursor: usize,
    active: Option<&LevelNo>,
    focused: bool,
) {
    let line = if levels.is_empty() {
        Line::from(Span::styled(
            "No lessons available yet",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let mut spans = Vec::new();
        for (i, descriptor) in levels.iter().enumerate() {
            let is_active = active == Some(&descriptor.level_no);
            let mut style = if is_active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if focused && i == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(
                format!(" Lesson - {} ", descriptor.level_no),
                style,
            ));
            spans.push(Span::from(" "));
        }
        Line::from(spans)
    };

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Lessons ")
            .border_style(if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            }),
    );
    f.render_widget(bar, area);
}
