use crate::api::WordCard;
use crate::models::{App, CardsView, Focus, MEANING_FALLBACK};
use crate::utils::truncate_to_width;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const GRID_COLUMNS: usize = 3;
const TILE_HEIGHT: u16 = 6;

pub fn draw_card_grid(f: &mut Frame, area: Rect, app: &App) {
    match &app.cards {
        CardsView::Placeholder => {
            draw_notice(
                f,
                area,
                &["You have not selected a lesson yet.", "Select a lesson to get started."],
                Style::default().fg(Color::DarkGray),
            );
        }
        CardsView::Loading(level) => {
            let message = format!("Loading lesson {level}...");
            draw_notice(
                f,
                area,
                &[message.as_str()],
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            );
        }
        CardsView::Error(message) => {
            draw_notice(f, area, &[message.as_str()], Style::default().fg(Color::Red));
        }
        CardsView::Loaded { cards, .. } if cards.is_empty() => {
            draw_notice(
                f,
                area,
                &[
                    "No vocabulary has been added to this lesson yet.",
                    "Move on to the next lesson.",
                ],
                Style::default().fg(Color::DarkGray),
            );
        }
        CardsView::Loaded { level, cards } => {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" Lesson {level} "))
                .border_style(if app.focus == Focus::Cards {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                });
            let inner = block.inner(area);
            f.render_widget(block, area);

            draw_tiles(f, inner, cards, app.card_cursor, app.focus == Focus::Cards);
        }
    }
}

fn draw_tiles(f: &mut Frame, area: Rect, cards: &[WordCard], cursor: usize, focused: bool) {
    if area.height < TILE_HEIGHT || area.width < 3 {
        return;
    }
    let total_rows = cards.len().div_ceil(GRID_COLUMNS);
    let visible_rows = (area.height / TILE_HEIGHT).max(1) as usize;
    let selected_row = cursor.min(cards.len().saturating_sub(1)) / GRID_COLUMNS;
    // Scroll just enough to keep the selected row on screen.
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    for (slot, row) in (first_row..total_rows).take(visible_rows).enumerate() {
        let row_area = Rect::new(
            area.x,
            area.y + slot as u16 * TILE_HEIGHT,
            area.width,
            TILE_HEIGHT,
        );
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(row_area);
        for col in 0..GRID_COLUMNS {
            let index = row * GRID_COLUMNS + col;
            if let Some(card) = cards.get(index) {
                draw_tile(f, columns[col], card, focused && index == cursor);
            }
        }
    }
}

fn draw_tile(f: &mut Frame, area: Rect, card: &WordCard, selected: bool) {
    let text_width = area.width.saturating_sub(2).max(4) as usize;
    let meaning = card.meaning.as_deref().unwrap_or(MEANING_FALLBACK);
    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&card.word, text_width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Meaning / Pronunciation",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(truncate_to_width(
            &format!("\"{} / {}\"", meaning, card.pronunciation),
            text_width,
        )),
    ];
    let tile = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                }),
        );
    f.render_widget(tile, area);
}

fn draw_notice(f: &mut Frame, area: Rect, lines: &[&str], style: Style) {
    let mut content = vec![Line::from("")];
    content.extend(lines.iter().map(|l| Line::from(Span::styled(l.to_string(), style))));
    let notice = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(notice, area);
}
