#[cfg(test)]
mod ui_integration_tests {
    use crate::api::{LevelDescriptor, LevelNo, WordCard, WordDetail};
    use crate::models::{
        ALERT_EMPTY_FIELDS, App, CardsView, Focus, MEANING_FALLBACK, NetResponse, Screen,
    };
    use crate::{session, ui};
    use crossbeam_channel::unbounded;
    use ratatui::{Terminal, backend::TestBackend};

    fn test_app() -> App {
        // The request receiver is dropped; sends are fire-and-forget.
        let (tx, _rx) = unbounded();
        App::new(tx)
    }

    /// Render the whole app to a test buffer and return its text content.
    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| ui::draw(frame, app)).unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            text.push('\n');
        }
        text
    }

    fn browse_app() -> App {
        let mut app = test_app();
        app.screen = Screen::Browse;
        app
    }

    fn card(id: i64, word: &str, meaning: Option<&str>) -> WordCard {
        WordCard {
            id,
            word: word.to_string(),
            meaning: meaning.map(|m| m.to_string()),
            pronunciation: "heh-loh".to_string(),
        }
    }

    fn detail(synonyms: &[&str]) -> WordDetail {
        WordDetail {
            word: "Hello".to_string(),
            pronunciation: "heh-loh".to_string(),
            meaning: None,
            sentence: "Hello there.".to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_level_bar_renders_one_button_per_descriptor() {
        let mut app = browse_app();
        app.levels = ["1", "2", "3"]
            .iter()
            .map(|n| LevelDescriptor {
                level_no: LevelNo::new(*n),
            })
            .collect();

        let text = render_to_string(&app);
        assert_eq!(text.matches("Lesson - ").count(), 3);
        for n in ["1", "2", "3"] {
            assert!(text.contains(&format!("Lesson - {n}")));
        }
    }

    #[test]
    fn test_tile_shows_fallback_when_meaning_missing() {
        let mut app = browse_app();
        app.cards = CardsView::Loaded {
            level: LevelNo::new("1"),
            cards: vec![card(5, "Hello", None)],
        };
        let text = render_to_string(&app);
        assert!(text.contains(MEANING_FALLBACK));
    }

    #[test]
    fn test_tile_shows_meaning_verbatim() {
        let mut app = browse_app();
        app.cards = CardsView::Loaded {
            level: LevelNo::new("1"),
            cards: vec![card(5, "Hello", Some("a greeting"))],
        };
        let text = render_to_string(&app);
        assert!(text.contains("a greeting"));
        assert!(!text.contains(MEANING_FALLBACK));
    }

    #[test]
    fn test_empty_lesson_renders_placeholder_and_no_tiles() {
        let mut app = browse_app();
        app.cards = CardsView::Loaded {
            level: LevelNo::new("4"),
            cards: vec![],
        };
        let text = render_to_string(&app);
        assert!(text.contains("No vocabulary has been added to this lesson yet."));
        // Zero tiles: the tile label never appears.
        assert_eq!(text.matches("Meaning / Pronunciation").count(), 0);
    }

    #[test]
    fn test_card_loader_end_to_end() {
        // Selecting level "2" shows the loading indicator immediately, then
        // the response renders exactly one tile for "Hello" with the
        // fallback meaning.
        let mut app = browse_app();
        app.select_level(LevelNo::new("2"));
        let text = render_to_string(&app);
        assert!(text.contains("Loading lesson 2"));

        app.handle_net_response(NetResponse::Cards {
            level: LevelNo::new("2"),
            token: app.cards_token,
            result: Ok(vec![card(5, "Hello", None)]),
        });
        let text = render_to_string(&app);
        assert!(!text.contains("Loading lesson 2"));
        assert_eq!(text.matches("Meaning / Pronunciation").count(), 1);
        assert!(text.contains("Hello"));
        assert!(text.contains(MEANING_FALLBACK));
    }

    #[test]
    fn test_detail_fetch_end_to_end_synonym_tags_in_order() {
        let mut app = browse_app();
        app.request_detail(5);
        app.handle_net_response(NetResponse::Detail {
            token: app.detail_token,
            result: Ok(detail(&["Hi", "Hey"])),
        });

        let text = render_to_string(&app);
        assert!(text.contains("Word Details"));
        assert!(text.contains("Hello there."));
        let hi = text.find("[Hi]").expect("first synonym tag missing");
        let hey = text.find("[Hey]").expect("second synonym tag missing");
        assert!(hi < hey);
    }

    #[test]
    fn test_detail_popup_with_zero_synonyms_renders_no_tags() {
        let mut app = browse_app();
        app.detail = Some(detail(&[]));
        let text = render_to_string(&app);
        assert!(text.contains("Synonyms"));
        assert!(!text.contains('['));
    }

    #[test]
    fn test_detail_popup_meaning_fallback() {
        let mut app = browse_app();
        app.detail = Some(detail(&["Hi"]));
        let text = render_to_string(&app);
        assert!(text.contains(MEANING_FALLBACK));
    }

    #[test]
    fn test_cards_error_state_is_visible() {
        let mut app = browse_app();
        app.select_level(LevelNo::new("2"));
        app.handle_net_response(NetResponse::Cards {
            level: LevelNo::new("2"),
            token: app.cards_token,
            result: Err("request failed: timed out".to_string()),
        });
        let text = render_to_string(&app);
        assert!(text.contains("Could not load lesson 2"));
    }

    #[test]
    fn test_default_placeholder_before_any_selection() {
        let app = browse_app();
        let text = render_to_string(&app);
        assert!(text.contains("You have not selected a lesson yet."));
    }

    #[test]
    fn test_login_screen_and_empty_fields_alert() {
        let mut app = test_app();
        let text = render_to_string(&app);
        assert!(text.contains("Username"));
        assert!(text.contains("Password"));

        session::submit_login(&mut app);
        let text = render_to_string(&app);
        assert!(text.contains(ALERT_EMPTY_FIELDS));
        assert!(text.contains("Notice"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = test_app();
        app.login.password = "123456".to_string();
        let text = render_to_string(&app);
        assert!(!text.contains("123456"));
        assert!(text.contains("******"));
    }

    #[test]
    fn test_active_level_highlight_is_tolerant() {
        // An active level missing from the list highlights nothing and does
        // not panic.
        let mut app = browse_app();
        app.levels = vec![LevelDescriptor {
            level_no: LevelNo::new("1"),
        }];
        app.active_level = Some(LevelNo::new("99"));
        let text = render_to_string(&app);
        assert!(text.contains("Lesson - 1"));
    }

    #[test]
    fn test_logout_confirm_popup() {
        let mut app = browse_app();
        app.confirm_logout = true;
        let text = render_to_string(&app);
        assert!(text.contains("Are you sure you want to log out?"));
    }

    #[test]
    fn test_many_cards_keep_selected_row_visible() {
        let mut app = browse_app();
        let cards: Vec<WordCard> = (0..30)
            .map(|i| card(i, &format!("word{i}"), None))
            .collect();
        app.cards = CardsView::Loaded {
            level: LevelNo::new("1"),
            cards,
        };
        app.focus = Focus::Cards;
        app.card_cursor = 29;
        let text = render_to_string(&app);
        assert!(text.contains("word29"));
    }
}
