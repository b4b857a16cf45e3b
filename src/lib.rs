pub mod api;
pub mod config;
pub mod logger;
pub mod models;
pub mod net_worker;
pub mod session;
pub mod speech;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use api::{ApiError, LevelDescriptor, LevelNo, VocabClient, WordCard, WordDetail};
pub use config::Config;
pub use models::{App, CardsView, Focus, NetRequest, NetResponse, Screen};
pub use net_worker::spawn_net_worker;
pub use session::handle_key;
pub use speech::Speaker;
pub use ui::draw;
