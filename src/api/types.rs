use serde::{Deserialize, Deserializer, de};
use std::fmt;

/// Every endpoint wraps its payload in a `data` field.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Identifier of a lesson level. The API serves it as a JSON number or a
/// string depending on the endpoint, so both are accepted and normalized to
/// a string. Treated as an opaque token afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelNo(String);

impl LevelNo {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LevelNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LevelNo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(LevelNo(s)),
            serde_json::Value::Number(n) => Ok(LevelNo(n.to_string())),
            other => Err(de::Error::custom(format!(
                "level_no must be a string or number, got {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelDescriptor {
    pub level_no: LevelNo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WordCard {
    pub id: i64,
    pub word: String,
    #[serde(default)]
    pub meaning: Option<String>,
    pub pronunciation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WordDetail {
    pub word: String,
    pub pronunciation: String,
    #[serde(default)]
    pub meaning: Option<String>,
    pub sentence: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}
