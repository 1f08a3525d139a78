//! In-memory feature and word indexes
//!
//! - [`postings`]: feature catalog, posting lists, and the inverted index
//! - [`query`]: boolean filters over the inverted index, and the
//!   wildcard/alternation query-word syntax
//! - [`word`]: word-position indexes over raw documents, one per
//!   [`IndexStrategy`]
//! - [`vector`]: Z-order vector lookup and distance functions

pub mod config;
pub mod error;
pub mod models;
pub mod postings;
pub mod query;
pub mod tokenizer;
pub mod vector;
pub mod word;

pub use config::{IndexSettings, IndexStrategy, SplitMode, TokenizerConfig, VectorIndexConfig};
pub use error::{IndexError, Result};
pub use models::{Feature, FeatureId, Item, ItemId, Vector, WILDCARD};
pub use postings::{FeatureCatalog, InvertedIndex, PostingList};
pub use query::Filter;
pub use tokenizer::Tokenizer;
pub use vector::VectorIndex;
pub use word::{index_documents, new_index, SyncIndex, WordIndex};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
