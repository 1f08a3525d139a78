use tracing::debug;

use super::document::{document_matches, scan_documents, WordDocument};
use super::WordIndex;
use crate::config::IndexStrategy;
use crate::query::pattern::leading_char;

/// Below this many candidates the probe loop hands over to a linear scan
const LINEAR_SCAN_THRESHOLD: usize = 8;

/// Word index probing each document's sorted words by interpolating the
/// leading character's code point between the current bounds
#[derive(Clone, Debug, Default)]
pub struct InterpolationSearchIndex {
    documents: Vec<WordDocument>,
}

impl InterpolationSearchIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lead_code(word: &str) -> u32 {
    leading_char(word).map_or(0, u32::from)
}

/// First position whose leading character is not below `lead`
fn lower_bound(words: &[String], lead: char) -> usize {
    let target = u32::from(lead);
    // Everything before `low` is below the target, everything from `high` on is not.
    let mut low = 0;
    let mut high = words.len();

    while high - low > LINEAR_SCAN_THRESHOLD {
        let low_code = lead_code(&words[low]);
        let high_code = lead_code(&words[high - 1]);
        if target <= low_code {
            return low;
        }
        if target > high_code {
            return high;
        }

        let span = (high - 1 - low) as u64;
        let offset = u64::from(target - low_code) * span / u64::from(high_code - low_code);
        let probe = (low + offset as usize).min(high - 1);

        if lead_code(&words[probe]) < target {
            low = probe + 1;
        } else {
            high = probe;
        }
    }

    low + words[low..high]
        .iter()
        .take_while(|word| lead_code(word) < target)
        .count()
}

impl WordIndex for InterpolationSearchIndex {
    fn strategy(&self) -> IndexStrategy {
        IndexStrategy::InterpolationSearch
    }

    fn add(&mut self, documents: &[&str]) {
        self.documents
            .extend(documents.iter().map(|text| WordDocument::new(text)));
        debug!(
            added = documents.len(),
            total = self.documents.len(),
            "Added documents to interpolation search index"
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
