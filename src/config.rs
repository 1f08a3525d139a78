use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index settings configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndexSettings {
    #[serde(default)]
    pub strategy: IndexStrategy,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    #[serde(default)]
    pub vector: VectorIndexConfig,
}

impl IndexSettings {
    /// Select the word index strategy
    pub fn with_strategy(mut self, strategy: IndexStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the tokenizer configuration
    pub fn with_tokenizer(mut self, tokenizer: TokenizerConfig) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Precompute epsilon-neighbourhoods at vector fit time
    pub fn with_neighbors_threshold(mut self, threshold: f64) -> Self {
        self.vector.neighbors_threshold = Some(threshold);
        self
    }
}

/// How raw text is cut into candidate tokens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Whitespace plus `, . ! ? : ;`; hyphenated words stay whole
    #[default]
    Punctuation,
    /// Unicode word boundaries (UAX #29)
    UnicodeWords,
}

/// Tokenizer configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub lowercase: bool,
    /// Shortest kept token, in UTF-8 bytes
    pub min_token_length: usize,
    /// Longest kept token, in UTF-8 bytes; unbounded by default
    pub max_token_length: usize,
    pub split_mode: SplitMode,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_token_length: 2,
            max_token_length: usize::MAX,
            split_mode: SplitMode::Punctuation,
        }
    }
}

/// Strategy backing a [`crate::word::WordIndex`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexStrategy {
    /// Regular expression scan over each raw document
    RegexpScan,
    /// Per-document sorted words, bisection on the leading character
    #[default]
    BinarySearch,
    /// Per-document sorted words, interpolated probe on the leading character
    InterpolationSearch,
    /// Corpus-wide word -> document postings
    Matrix,
}

impl IndexStrategy {
    pub const ALL: [IndexStrategy; 4] = [
        IndexStrategy::RegexpScan,
        IndexStrategy::BinarySearch,
        IndexStrategy::InterpolationSearch,
        IndexStrategy::Matrix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IndexStrategy::RegexpScan => "regexp",
            IndexStrategy::BinarySearch => "binary",
            IndexStrategy::InterpolationSearch => "interpolation",
            IndexStrategy::Matrix => "matrix",
        }
    }
}

impl fmt::Display for IndexStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndexStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regexp" | "regexp-scan" | "regexp_scan" => Ok(IndexStrategy::RegexpScan),
            "binary" | "binary-search" | "binary_search" => Ok(IndexStrategy::BinarySearch),
            "interpolation" | "interpolation-search" | "interpolation_search" => {
                Ok(IndexStrategy::InterpolationSearch)
            }
            "matrix" => Ok(IndexStrategy::Matrix),
            other => Err(format!("unknown index strategy '{}'", other)),
        }
    }
}

/// Vector index configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VectorIndexConfig {
    /// Euclidean radius for precomputed neighbourhoods (O(n^2) at fit time)
    pub neighbors_threshold: Option<f64>,
    /// Multiplier applied to each coordinate before truncation to u64
    pub scale: f64,
}

impl Default for VectorIndexConfig {
    fn default() -> Self {
        Self {
            neighbors_threshold: None,
            scale: 1_000_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let settings = IndexSettings::default();
        assert_eq!(settings.strategy, IndexStrategy::BinarySearch);
        assert!(settings.vector.neighbors_threshold.is_none());
        assert_eq!(settings.vector.scale, 1_000_000.0);

        let tokenizer = TokenizerConfig::default();
        assert!(tokenizer.lowercase);
        assert_eq!(tokenizer.min_token_length, 2);
        assert_eq!(tokenizer.split_mode, SplitMode::Punctuation);
    }

    #[test]
    fn test_settings_builder() {
        let settings = IndexSettings::default()
            .with_strategy(IndexStrategy::Matrix)
            .with_neighbors_threshold(1.5);

        assert_eq!(settings.strategy, IndexStrategy::Matrix);
        assert_eq!(settings.vector.neighbors_threshold, Some(1.5));
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("matrix".parse::<IndexStrategy>(), Ok(IndexStrategy::Matrix));
        assert_eq!("Binary-Search".parse::<IndexStrategy>(), Ok(IndexStrategy::BinarySearch));
        assert_eq!(
            "interpolation_search".parse::<IndexStrategy>(),
            Ok(IndexStrategy::InterpolationSearch)
        );
        assert_eq!("regexp".parse::<IndexStrategy>(), Ok(IndexStrategy::RegexpScan));
        assert!("btree".parse::<IndexStrategy>().is_err());

        for strategy in IndexStrategy::ALL {
            assert_eq!(strategy.name().parse::<IndexStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_settings_json() {
        let json = r#"{ "strategy": "interpolation_search", "vector": { "neighbors_threshold": 2.0, "scale": 1000.0 } }"#;
        let settings: IndexSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.strategy, IndexStrategy::InterpolationSearch);
        assert_eq!(settings.vector.neighbors_threshold, Some(2.0));
        assert_eq!(settings.vector.scale, 1000.0);
        assert_eq!(settings.tokenizer.max_token_length, usize::MAX);
    }
}
