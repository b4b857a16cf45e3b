use crate::api::WordDetail;
use crate::models::MEANING_FALLBACK;
use crate::ui::popups::centered_rect;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Modal with the full word record. Fully re-populated from `detail` on
/// every draw, so nothing from a previously shown word can leak in.
pub fn draw_detail_popup(f: &mut Frame, detail: &WordDetail) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                detail.word.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::from(format!("  ({})", detail.pronunciation)),
        ]),
        Line::from(""),
        heading("Meaning"),
    ];
    match &detail.meaning {
        Some(meaning) => lines.push(Line::from(meaning.clone())),
        None => lines.push(Line::from(Span::styled(
            MEANING_FALLBACK,
            Style::default().fg(Color::Blue),
        ))),
    }
    lines.push(Line::from(""));
    lines.push(heading("Example"));
    lines.push(Line::from(detail.sentence.clone()));
    lines.push(Line::from(""));
    lines.push(heading("Synonyms"));

    // Zero synonyms renders an empty tag row, never an error.
    let mut tags = Vec::new();
    for synonym in &detail.synonyms {
        tags.push(Span::styled(
            format!("[{synonym}]"),
            Style::default().fg(Color::Cyan),
        ));
        tags.push(Span::from(" "));
    }
    lines.push(Line::from(tags));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Close"),
    ]));

    let popup = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Word Details ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(popup, area);
}
