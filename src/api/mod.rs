pub mod client;
pub mod types;

// Public API exports
pub use client::{ApiError, VocabClient};
pub use types::{ApiEnvelope, LevelDescriptor, LevelNo, WordCard, WordDetail};
