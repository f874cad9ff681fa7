use serde::{Deserialize, Serialize};

use crate::csv_field::FieldMode;

/// Alphabetic characters kept per raw token and per canonical word.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 79;
/// Bytes kept from one extracted field.
pub const DEFAULT_MAX_FIELD_LEN: usize = 2999;
/// Distinct words the registry will hold.
pub const DEFAULT_MAX_UNIQUE_WORDS: usize = 200_000;
pub const DEFAULT_MAX_STOPWORDS: usize = 10_000;
pub const DEFAULT_MAX_TOXIC_WORDS: usize = 10_000;

/// Limits and input handling for one analysis run.
///
/// The defaults reproduce the fixed buffer sizes the analyzer has always
/// used, so truncation and capacity behavior stays comparable between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub max_token_len: usize,
    pub max_field_len: usize,
    pub max_unique_words: usize,
    pub max_stopwords: usize,
    pub max_toxic_words: usize,
    pub field_mode: FieldMode,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            max_unique_words: DEFAULT_MAX_UNIQUE_WORDS,
            max_stopwords: DEFAULT_MAX_STOPWORDS,
            max_toxic_words: DEFAULT_MAX_TOXIC_WORDS,
            field_mode: FieldMode::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: AnalyzerConfig = serde_json::from_str(r#"{"max_unique_words": 5}"#).unwrap();
        assert_eq!(cfg.max_unique_words, 5);
        assert_eq!(cfg.max_token_len, DEFAULT_MAX_TOKEN_LEN);
        assert_eq!(cfg.field_mode, FieldMode::Csv);
    }
}
