use crate::models::{
    ALERT_EMPTY_FIELDS, ALERT_WELCOME, ALERT_WRONG_PASSWORD, App, CardsView, DEMO_PASSWORD, Focus,
    Screen,
};
use crate::speech::Speaker;
use crate::ui::cards::GRID_COLUMNS;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(app: &mut App, speaker: &mut Speaker, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // A visible alert swallows everything until it is dismissed.
    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.alert = None;
        }
        return;
    }

    match app.screen {
        Screen::Login => handle_login_key(app, key),
        Screen::Browse => {
            if app.confirm_logout {
                handle_logout_confirm_key(app, key);
            } else if app.detail.is_some() {
                handle_detail_key(app, key);
            } else {
                handle_browse_key(app, speaker, key);
            }
        }
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            app.login.focus_password = !app.login.focus_password;
        }
        KeyCode::Enter => submit_login(app),
        KeyCode::Backspace => {
            if app.login.focus_password {
                app.login.password.pop();
            } else {
                app.login.username.pop();
            }
        }
        KeyCode::Char(c) => {
            if app.login.focus_password {
                app.login.password.push(c);
            } else {
                app.login.username.push(c);
            }
        }
        _ => {}
    }
}

/// Demo login. Empty fields are rejected before the password is compared,
/// so a blank form never triggers the wrong-password alert.
pub fn submit_login(app: &mut App) {
    let username = app.login.username.trim();
    let password = app.login.password.trim();
    if username.is_empty() || password.is_empty() {
        app.alert = Some(ALERT_EMPTY_FIELDS.to_string());
        return;
    }
    if password != DEMO_PASSWORD {
        app.alert = Some(ALERT_WRONG_PASSWORD.to_string());
        return;
    }
    app.screen = Screen::Browse;
    app.alert = Some(ALERT_WELCOME.to_string());
    app.request_levels();
}

fn handle_logout_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => app.logout(),
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => app.confirm_logout = false,
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
        app.close_detail();
    }
}

fn handle_browse_key(app: &mut App, speaker: &mut Speaker, key: KeyEvent) {
    if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.confirm_logout = true;
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Levels if has_cards(app) => Focus::Cards,
                Focus::Levels => Focus::Levels,
                Focus::Cards => Focus::Levels,
            };
        }
        _ => match app.focus {
            Focus::Levels => handle_level_bar_key(app, key),
            Focus::Cards => handle_card_grid_key(app, speaker, key),
        },
    }
}

fn has_cards(app: &App) -> bool {
    matches!(&app.cards, CardsView::Loaded { cards, .. } if !cards.is_empty())
}

fn handle_level_bar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Up => {
            app.level_cursor = app.level_cursor.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Down => {
            if app.level_cursor < app.levels.len().saturating_sub(1) {
                app.level_cursor += 1;
            }
        }
        KeyCode::Enter => {
            if let Some(descriptor) = app.levels.get(app.level_cursor) {
                let level = descriptor.level_no.clone();
                app.select_level(level);
            }
        }
        _ => {}
    }
}

fn handle_card_grid_key(app: &mut App, speaker: &mut Speaker, key: KeyEvent) {
    let count = match &app.cards {
        CardsView::Loaded { cards, .. } => cards.len(),
        _ => 0,
    };
    match key.code {
        KeyCode::Esc => app.focus = Focus::Levels,
        KeyCode::Left => {
            app.card_cursor = app.card_cursor.saturating_sub(1);
        }
        KeyCode::Right => {
            if app.card_cursor + 1 < count {
                app.card_cursor += 1;
            }
        }
        KeyCode::Up => {
            app.card_cursor = app.card_cursor.saturating_sub(GRID_COLUMNS);
        }
        KeyCode::Down => {
            if app.card_cursor + GRID_COLUMNS < count {
                app.card_cursor += GRID_COLUMNS;
            }
        }
        KeyCode::Enter => {
            if let Some(card) = app.selected_card() {
                let word_id = card.id;
                app.request_detail(word_id);
            }
        }
        KeyCode::Char('p') => {
            let word = app.selected_card().map(|card| card.word.clone());
            if let Some(word) = word {
                speaker.pronounce(&word);
            }
        }
        _ => {}
    }
}
