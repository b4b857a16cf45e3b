/// Base URL of the vocabulary API.
pub const DEFAULT_API_BASE_URL: &str = "https://openapi.programming-hero.com/api";
/// Pause before fetching a lesson's cards so the loading indicator is visible.
pub const DEFAULT_CARD_DELAY_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub card_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url =
            lookup("VOCAB_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let card_delay_ms = lookup("VOCAB_CARD_DELAY_MS")
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_CARD_DELAY_MS);
        Self {
            api_base_url,
            card_delay_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            card_delay_ms: DEFAULT_CARD_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.card_delay_ms, DEFAULT_CARD_DELAY_MS);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = Config::from_lookup(|key| match key {
            "VOCAB_API_BASE_URL" => Some("http://localhost:8080/api".to_string()),
            "VOCAB_CARD_DELAY_MS" => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.card_delay_ms, 0);
    }

    #[test]
    fn test_unparseable_delay_falls_back() {
        let config = Config::from_lookup(|key| match key {
            "VOCAB_CARD_DELAY_MS" => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config.card_delay_ms, DEFAULT_CARD_DELAY_MS);
    }
}
