use crate::api::{LevelDescriptor, LevelNo, WordCard, WordDetail};
use crate::logger;
use crossbeam_channel::Sender;

/// Shown wherever a word has no meaning in the payload.
pub const MEANING_FALLBACK: &str = "Information not available";

/// Hardcoded demo credential; there is no real account backend.
pub const DEMO_PASSWORD: &str = "123456";

pub const ALERT_EMPTY_FIELDS: &str = "Please fill in all fields.";
pub const ALERT_WRONG_PASSWORD: &str = "Invalid password.";
pub const ALERT_WELCOME: &str = "Welcome! You have successfully logged in.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Browse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus_password: bool,
}

impl LoginForm {
    pub fn focused(&self) -> LoginField {
        if self.focus_password {
            LoginField::Password
        } else {
            LoginField::Username
        }
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.focus_password = false;
    }
}

/// State of the main content area. Mirrors what the card pipeline last did:
/// nothing selected yet, waiting on a fetch, a fetched card list, or a fetch
/// failure surfaced to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum CardsView {
    Placeholder,
    Loading(LevelNo),
    Loaded { level: LevelNo, cards: Vec<WordCard> },
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Levels,
    Cards,
}

/// Requests serviced by the network worker thread.
#[derive(Debug)]
pub enum NetRequest {
    FetchLevels,
    FetchCards { level: LevelNo, token: u64 },
    FetchDetail { word_id: i64, token: u64 },
}

/// Responses sent back by the network worker. Errors arrive pre-formatted;
/// cards and detail responses carry the token of the request that produced
/// them so the UI can discard anything superseded by a newer request.
#[derive(Debug)]
pub enum NetResponse {
    Levels(Result<Vec<LevelDescriptor>, String>),
    Cards {
        level: LevelNo,
        token: u64,
        result: Result<Vec<WordCard>, String>,
    },
    Detail {
        token: u64,
        result: Result<WordDetail, String>,
    },
}

#[derive(Debug)]
pub struct App {
    pub screen: Screen,
    pub login: LoginForm,
    pub alert: Option<String>,
    pub confirm_logout: bool,

    pub levels: Vec<LevelDescriptor>,
    pub level_cursor: usize,
    pub active_level: Option<LevelNo>,

    pub cards: CardsView,
    pub card_cursor: usize,
    pub focus: Focus,

    pub detail: Option<WordDetail>,

    pub cards_token: u64,
    pub detail_token: u64,

    pub should_quit: bool,

    net_tx: Sender<NetRequest>,
}

impl App {
    pub fn new(net_tx: Sender<NetRequest>) -> Self {
        Self {
            screen: Screen::Login,
            login: LoginForm::default(),
            alert: None,
            confirm_logout: false,
            levels: Vec::new(),
            level_cursor: 0,
            active_level: None,
            cards: CardsView::Placeholder,
            card_cursor: 0,
            focus: Focus::Levels,
            detail: None,
            cards_token: 0,
            detail_token: 0,
            should_quit: false,
            net_tx,
        }
    }

    /// Kick off the level listing fetch. Called once after a successful
    /// login; a failure leaves the default placeholder in place.
    pub fn request_levels(&self) {
        logger::log("fetching levels");
        let _ = self.net_tx.send(NetRequest::FetchLevels);
    }

    /// Activate a level and ask the worker for its cards. The identifier is
    /// an opaque token: a value not present in the level list still switches
    /// the content area to loading, it just highlights nothing.
    pub fn select_level(&mut self, level: LevelNo) {
        logger::log(&format!("loading cards for level {level}"));
        self.active_level = Some(level.clone());
        self.cards = CardsView::Loading(level.clone());
        self.card_cursor = 0;
        self.cards_token += 1;
        let _ = self.net_tx.send(NetRequest::FetchCards {
            level,
            token: self.cards_token,
        });
    }

    pub fn request_detail(&mut self, word_id: i64) {
        logger::log(&format!("fetching details for word {word_id}"));
        self.detail_token += 1;
        let _ = self.net_tx.send(NetRequest::FetchDetail {
            word_id,
            token: self.detail_token,
        });
    }

    pub fn close_detail(&mut self) {
        // Content is re-populated on the next open, nothing else to tear down.
        self.detail = None;
    }

    pub fn logout(&mut self) {
        self.screen = Screen::Login;
        self.login.clear();
        self.alert = None;
        self.confirm_logout = false;
        self.levels.clear();
        self.level_cursor = 0;
        self.active_level = None;
        self.cards = CardsView::Placeholder;
        self.card_cursor = 0;
        self.focus = Focus::Levels;
        self.detail = None;
        // Anything still in flight was requested before logout; advancing
        // the tokens makes those responses stale on arrival.
        self.cards_token += 1;
        self.detail_token += 1;
    }

    /// The word card currently under the cursor, if the grid is showing any.
    pub fn selected_card(&self) -> Option<&WordCard> {
        match &self.cards {
            CardsView::Loaded { cards, .. } => cards.get(self.card_cursor),
            _ => None,
        }
    }

    pub fn handle_net_response(&mut self, response: NetResponse) {
        match response {
            NetResponse::Levels(Ok(levels)) => {
                if self.screen == Screen::Login {
                    logger::log("discarding level response while logged out");
                    return;
                }
                logger::log(&format!("fetched {} levels", levels.len()));
                self.levels = levels;
                self.level_cursor = self
                    .level_cursor
                    .min(self.levels.len().saturating_sub(1));
            }
            NetResponse::Levels(Err(error)) => {
                logger::log(&format!("error fetching levels: {error}"));
            }
            NetResponse::Cards {
                level,
                token,
                result,
            } => {
                if token != self.cards_token {
                    logger::log(&format!("discarding stale card response for level {level}"));
                    return;
                }
                match result {
                    Ok(cards) => {
                        logger::log(&format!(
                            "fetched {} cards for level {level}",
                            cards.len()
                        ));
                        if !cards.is_empty() {
                            self.focus = Focus::Cards;
                        }
                        self.cards = CardsView::Loaded { level, cards };
                        self.card_cursor = 0;
                    }
                    Err(error) => {
                        logger::log(&format!("error fetching cards for level {level}: {error}"));
                        self.cards = CardsView::Error(format!(
                            "Could not load lesson {level}. See the log for details."
                        ));
                    }
                }
            }
            NetResponse::Detail { token, result } => {
                if token != self.detail_token {
                    logger::log("discarding stale word detail response");
                    return;
                }
                match result {
                    Ok(detail) => {
                        self.detail = Some(detail);
                    }
                    Err(error) => {
                        // Popup simply does not open.
                        logger::log(&format!("error fetching word details: {error}"));
                    }
                }
            }
        }
    }
}
