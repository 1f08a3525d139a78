use std::collections::HashMap;

use tracing::debug;

use super::WordIndex;
use crate::config::IndexStrategy;
use crate::postings::{intersection, union};
use crate::query::pattern::{parse_query, split_words, QueryTerm};

/// Query words shorter than this many bytes never match
const MIN_QUERY_WORD_LEN: usize = 2;

/// Corpus-wide word to document postings, sorted by word
#[derive(Clone, Debug, Default)]
pub struct MatrixIndex {
    documents: Vec<String>,
    entries: Vec<(String, Vec<usize>)>,
}

impl MatrixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the corpus and rebuild the postings
    pub fn fit(&mut self, documents: &[&str]) {
        self.documents = documents.iter().map(|text| text.to_string()).collect();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, text) in self.documents.iter().enumerate() {
            for word in split_words(text) {
                let list = postings.entry(word).or_default();
                if list.last() != Some(&position) {
                    list.push(position);
                }
            }
        }

        let mut entries: Vec<_> = postings.into_iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        self.entries = entries;

        debug!(
            documents = self.documents.len(),
            words = self.entries.len(),
            "Rebuilt matrix index"
        );
    }

    /// Number of distinct words
    pub fn vocabulary_len(&self) -> usize {
        self.entries.len()
    }

    /// Documents matching any query word, ascending
    pub fn query(&self, text: &str) -> Vec<usize> {
        self.query_and_or(text, false)
    }

    /// Documents matching every query word (`use_and`) or any of them
    pub fn query_and_or(&self, text: &str, use_and: bool) -> Vec<usize> {
        let lists: Vec<Vec<usize>> = parse_query(text)
            .iter()
            .map(|term| self.term_postings(term))
            .collect();

        if use_and {
            intersection(&lists)
        } else {
            union(&lists)
        }
    }

    fn term_postings(&self, term: &QueryTerm) -> Vec<usize> {
        if term.raw().len() < MIN_QUERY_WORD_LEN {
            return Vec::new();
        }

        // Every word a term can match starts with its key.
        let key = term.key();
        let start = self.entries.partition_point(|(word, _)| word.as_str() < key);
        let matched: Vec<&[usize]> = self.entries[start..]
            .iter()
            .take_while(|(word, _)| word.starts_with(key))
            .filter(|(word, _)| term.matches(word))
            .map(|(_, documents)| documents.as_slice())
            .collect();

        union(&matched)
    }
}

impl WordIndex for MatrixIndex {
    fn strategy(&self) -> IndexStrategy {
        IndexStrategy::Matrix
    }

    fn add(&mut self, documents: &[&str]) {
        self.documents
            .extend(documents.iter().map(|text| text.to_string()));
        self.rebuild();
    }

    fn find_off(&self, query: &str, from: usize) -> Option<usize> {
        let hits = self.query(query);
        let start = hits.partition_point(|&hit| hit < from);
        hits.get(start).copied()
    }

    fn find_at(&self, index: usize, query: &str) -> bool {
        index < self.documents.len() && self.query(query).binary_search(&index).is_ok()
    }

    fn document_at(&self, index: usize) -> Option<&str> {
        self.documents.get(index).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.documents.len()
    }

    fn find_all(&self, query: &str) -> Vec<usize> {
        self.query(query)
    }
}
