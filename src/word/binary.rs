use tracing::debug;

use super::document::{document_matches, scan_documents, WordDocument};
use super::WordIndex;
use crate::config::IndexStrategy;
use crate::query::pattern::leading_char;

/// Word index bisecting each document's sorted words on the leading character
#[derive(Clone, Debug, Default)]
pub struct BinarySearchIndex {
    documents: Vec<WordDocument>,
}

impl BinarySearchIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lower_bound(words: &[String], lead: char) -> usize {
    words.partition_point(|word| leading_char(word) < Some(lead))
}

impl WordIndex for BinarySearchIndex {
    fn strategy(&self) -> IndexStrategy {
        IndexStrategy::BinarySearch
    }

    fn add(&mut self, documents: &[&str]) {
        self.documents
            .extend(documents.iter().map(|text| WordDocument::new(text)));
        debug!(
            added = documents.len(),
            total = self.documents.len(),
            "Added documents to binary search index"
        );
    }

    fn find_off(&self, query: &str, from: usize) -> Option<usize> {
        scan_documents(&self.documents, query, from, lower_bound)
    }

    fn find_at(&self, index: usize, query: &str) -> bool {
        document_matches(&self.documents, index, query, lower_bound)
    }

    fn document_at(&self, index: usize) -> Option<&str> {
        self.documents.get(index).map(WordDocument::text)
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}
