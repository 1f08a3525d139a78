//! Word-position indexes
//!
//! Every strategy answers the same questions about an ordered list of
//! documents: which document (by position) matches a query, which ones
//! match, and does a given document match. A query is a space-separated
//! list of words using the syntax in [`crate::query::pattern`]; a document
//! matches when any of the query words matches one of its words.

mod binary;
mod document;
mod interpolation;
mod matrix;
mod regexp;
mod sync;

pub use binary::BinarySearchIndex;
pub use interpolation::InterpolationSearchIndex;
pub use matrix::MatrixIndex;
pub use regexp::RegexpIndex;
pub use sync::SyncIndex;

use crate::config::IndexStrategy;
use crate::tokenizer::Tokenizer;

/// Shared contract of the word-position index strategies
pub trait WordIndex: Send + Sync {
    /// Strategy implemented by this index
    fn strategy(&self) -> IndexStrategy;

    /// Append documents; they get the next positions in input order
    fn add(&mut self, documents: &[&str]);

    /// First matching document at position `from` or later
    fn find_off(&self, query: &str, from: usize) -> Option<usize>;

    /// Whether the document at `index` matches; false when out of range
    fn find_at(&self, index: usize, query: &str) -> bool;

    /// Original text of the document at `index`
    fn document_at(&self, index: usize) -> Option<&str>;

    /// Number of documents
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First matching document
    fn find(&self, query: &str) -> Option<usize> {
        self.find_off(query, 0)
    }

    /// Every matching document, ascending
    fn find_all(&self, query: &str) -> Vec<usize> {
        let mut hits = Vec::new();
        let mut from = 0;
        while let Some(hit) = self.find_off(query, from) {
            hits.push(hit);
            from = hit + 1;
        }
        hits
    }
}

impl<T: WordIndex + ?Sized> WordIndex for Box<T> {
    fn strategy(&self) -> IndexStrategy {
        (**self).strategy()
    }

    fn add(&mut self, documents: &[&str]) {
        (**self).add(documents)
    }

    fn find_off(&self, query: &str, from: usize) -> Option<usize> {
        (**self).find_off(query, from)
    }

    fn find_at(&self, index: usize, query: &str) -> bool {
        (**self).find_at(index, query)
    }

    fn document_at(&self, index: usize) -> Option<&str> {
        (**self).document_at(index)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn find(&self, query: &str) -> Option<usize> {
        (**self).find(query)
    }

    fn find_all(&self, query: &str) -> Vec<usize> {
        (**self).find_all(query)
    }
}

/// Create an empty index for `strategy`
pub fn new_index(strategy: IndexStrategy) -> Box<dyn WordIndex> {
    match strategy {
        IndexStrategy::RegexpScan => Box::new(RegexpIndex::new()),
        IndexStrategy::BinarySearch => Box::new(BinarySearchIndex::new()),
        IndexStrategy::InterpolationSearch => Box::new(InterpolationSearchIndex::new()),
        IndexStrategy::Matrix => Box::new(MatrixIndex::new()),
    }
}

/// Build an index for `strategy` from raw documents
///
/// Each document is passed through [`Tokenizer::normalize_text`] first, so
/// newlines, tabs, and punctuation become the single spaces the indexes
/// split on. [`WordIndex::document_at`] then returns the normalized text.
pub fn index_documents<S: AsRef<str>>(
    strategy: IndexStrategy,
    documents: &[S],
    tokenizer: &Tokenizer,
) -> Box<dyn WordIndex> {
    let normalized: Vec<String> = documents
        .iter()
        .map(|document| tokenizer.normalize_text(document.as_ref()))
        .collect();
    let texts: Vec<&str> = normalized.iter().map(String::as_str).collect();

    let mut index = new_index(strategy);
    index.add(&texts);
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: [&str; 5] = [
        "The container ship left the port",
        "Stack the containers in the yard",
        "Site tests passed",
        "a tested site was contained",
        "",
    ];

    #[test]
    fn test_factory_strategy() {
        for strategy in IndexStrategy::ALL {
            let index = new_index(strategy);
            assert_eq!(index.strategy(), strategy);
            assert!(index.is_empty());
        }
    }

    #[test]
    fn test_strategies_agree() {
        let queries = [
            "container",
            "contai*",
            "contai(ner|ned)",
            "CONTAINERS",
            "site",
            "test(s|ed)",
            "missing",
            "missing yard",
            "*",
            "",
        ];

        let mut indexes: Vec<Box<dyn WordIndex>> =
            IndexStrategy::ALL.iter().map(|s| new_index(*s)).collect();
        for index in &mut indexes {
            index.add(&CORPUS);
        }

        for query in queries {
            let expected = indexes[0].find_all(query);
            for index in &indexes[1..] {
                assert_eq!(
                    index.find_all(query),
                    expected,
                    "{} disagrees on {:?}",
                    index.strategy(),
                    query
                );
            }
        }

        assert_eq!(indexes[1].find_all("contai*"), vec![0, 1, 3]);
        assert_eq!(indexes[1].find_all("contai(ner|ned)"), vec![0, 3]);
        assert_eq!(indexes[1].find_all("missing yard"), vec![1]);
        assert!(indexes[1].find_all("").is_empty());
    }

    #[test]
    fn test_index_documents_splits_lines() {
        let tokenizer = Tokenizer::default();
        for strategy in IndexStrategy::ALL {
            let index = index_documents(strategy, &["alpha beta\ngamma\tdelta\n"], &tokenizer);
            for word in ["alpha", "beta", "gamma", "delta"] {
                assert_eq!(index.find(word), Some(0), "{} on {}", strategy, word);
            }
            assert_eq!(index.document_at(0), Some("alpha beta gamma delta"));
        }
    }

    #[test]
    fn test_default_find_helpers() {
        for strategy in IndexStrategy::ALL {
            let mut index = new_index(strategy);
            index.add(&CORPUS);

            assert_eq!(index.len(), 5);
            assert_eq!(index.find("site"), Some(2));
            assert_eq!(index.find_off("site", 3), Some(3));
            assert_eq!(index.find_off("site", 4), None);
            assert_eq!(index.find_off("site", 99), None);
            assert!(index.find_at(3, "contained"));
            assert!(!index.find_at(2, "contained"));
            assert!(!index.find_at(99, "contained"));
            assert_eq!(index.document_at(2), Some("Site tests passed"));
            assert_eq!(index.document_at(5), None);
        }
    }
}
