use unicode_segmentation::UnicodeSegmentation;

use crate::config::{SplitMode, TokenizerConfig};
use crate::models::Feature;

/// Turns raw text into normalized features
///
/// Tokens are lowercased, trimmed, and dropped when shorter than
/// `min_token_length` or longer than `max_token_length` bytes.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize text into a vector of features
    ///
    /// ```
    /// use word_index::tokenizer::Tokenizer;
    ///
    /// let tokens = Tokenizer::default().tokenize("Two-factor, one-time: SMS!");
    /// let tokens: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
    /// assert_eq!(tokens, ["two-factor", "one-time", "sms"]);
    /// ```
    pub fn tokenize(&self, text: &str) -> Vec<Feature> {
        self.split(text)
            .into_iter()
            .filter_map(|word| self.normalize(word))
            .collect()
    }

    /// Tokenize and join back into a single-space separated string
    ///
    /// Useful for feeding the word indexes, which split on a single space.
    pub fn normalize_text(&self, text: &str) -> String {
        self.tokenize(text)
            .iter()
            .map(Feature::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self.config.split_mode {
            SplitMode::Punctuation => text
                .split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '!' | '?' | ':' | ';'))
                .filter(|word| !word.is_empty())
                .collect(),
            SplitMode::UnicodeWords => text.unicode_words().collect(),
        }
    }

    fn normalize(&self, word: &str) -> Option<Feature> {
        let word = word.trim();
        let token = if self.config.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        };

        let len = token.len();
        if len < self.config.min_token_length || len > self.config.max_token_length {
            return None;
        }

        Some(Feature::new(token))
    }
}
