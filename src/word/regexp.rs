use regex::Regex;
use tracing::{debug, warn};

use super::WordIndex;
use crate::config::IndexStrategy;
use crate::query::pattern::parse_query;

/// Word index that compiles each query to one regular expression and runs
/// it over the lowercased document text
#[derive(Clone, Debug, Default)]
pub struct RegexpIndex {
    documents: Vec<String>,
    lowered: Vec<String>,
}

impl RegexpIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn compile(query: &str) -> Option<Regex> {
        let terms = parse_query(query);
        if terms.is_empty() {
            return None;
        }

        let source = terms
            .iter()
            .map(|term| term.regex_source())
            .collect::<Vec<_>>()
            .join("|");

        match Regex::new(&source) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!(query, error = %e, "Failed to compile query");
                None
            }
        }
    }
}

impl WordIndex for RegexpIndex {
    fn strategy(&self) -> IndexStrategy {
        IndexStrategy::RegexpScan
    }

    fn add(&mut self, documents: &[&str]) {
        for text in documents {
            self.documents.push(text.to_string());
            self.lowered.push(text.to_lowercase());
        }
        debug!(
            added = documents.len(),
            total = self.documents.len(),
            "Added documents to regexp index"
        );
    }

    fn find_off(&self, query: &str, from: usize) -> Option<usize> {
        let regex = Self::compile(query)?;
        self.lowered
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, text)| regex.is_match(text))
            .map(|(position, _)| position)
    }

    fn find_at(&self, index: usize, query: &str) -> bool {
        match (self.lowered.get(index), Self::compile(query)) {
            (Some(text), Some(regex)) => regex.is_match(text),
            _ => false,
        }
    }

    fn document_at(&self, index: usize) -> Option<&str> {
        self.documents.get(index).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.documents.len()
    }

    fn find_all(&self, query: &str) -> Vec<usize> {
        let Some(regex) = Self::compile(query) else {
            return Vec::new();
        };
        self.lowered
            .iter()
            .enumerate()
            .filter(|(_, text)| regex.is_match(text))
            .map(|(position, _)| position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_matching() {
        let mut index = RegexpIndex::new();
        index.add(&["recontainer bay", "Container bay", "containers"]);

        assert_eq!(index.find("container"), Some(1));
        assert_eq!(index.find_all("contai*"), vec![1, 2]);
        assert_eq!(index.find_all("contai(ner|ners)"), vec![1, 2]);
        assert!(index.find_all("contai").is_empty());
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let mut index = RegexpIndex::new();
        index.add(&["price is 3.50 today", "price is 3x50 today"]);

        assert_eq!(index.find_all("3.50"), vec![0]);
        assert_eq!(index.find_all("3.5*"), vec![0]);
        assert!(index.find("[").is_none());
    }

    #[test]
    fn test_empty_query() {
        let mut index = RegexpIndex::new();
        index.add(&["anything"]);
        assert_eq!(index.find("   "), None);
        assert!(!index.find_at(0, ""));
        assert!(!index.find_at(3, "anything"));
    }
}
