//! Feature -> item inverted index
//!
//! Items are added in batches; each batch interns new features, splices
//! the item id into every feature's posting list, and re-sorts the
//! feature list used for wildcard resolution. Queries resolve features to
//! ids and OR the matching posting lists together.

use std::collections::HashMap;

use tracing::debug;

use super::catalog::FeatureCatalog;
use super::merge;
use super::posting_list::PostingList;
use crate::models::{FeatureId, Item, ItemId};
use crate::tokenizer::Tokenizer;

/// Inverted index from features to ascending item ids
///
/// Grown only through [`InvertedIndex::add`]; it never shrinks. Not
/// internally synchronized: wrap it in a lock if it is shared with a writer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    pub(super) catalog: FeatureCatalog,
    pub(super) postings: HashMap<FeatureId, PostingList>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index raw documents, numbering them `1..=n` in input order
    pub fn from_documents<S: AsRef<str>>(documents: &[S], tokenizer: &Tokenizer) -> Self {
        let items: Vec<Item> = documents
            .iter()
            .enumerate()
            .map(|(i, document)| Item::new(i as ItemId + 1, tokenizer.tokenize(document.as_ref())))
            .collect();

        let mut index = Self::new();
        index.add(&items);
        index
    }

    /// Add a batch of items
    pub fn add(&mut self, items: &[Item]) {
        let features_before = self.catalog.len();

        for item in items {
            for feature in &item.features {
                let id = self.catalog.intern(feature);
                self.postings.entry(id).or_default().insert(item.id);
            }
        }

        self.catalog.rebuild();

        debug!(
            items = items.len(),
            new_features = self.catalog.len() - features_before,
            features = self.catalog.len(),
            "indexed item batch"
        );
    }

    /// Items carrying any of `features`, ascending and deduplicated
    ///
    /// Each feature is either a literal or a `prefix*` wildcard; features
    /// that resolve to nothing contribute nothing.
    pub fn find<F: AsRef<str>>(&self, features: &[F]) -> Vec<ItemId> {
        let lists: Vec<&[ItemId]> = features
            .iter()
            .flat_map(|feature| self.catalog.resolve(feature.as_ref()))
            .filter_map(|id| self.postings.get(&id))
            .map(PostingList::item_ids)
            .collect();

        merge::union(&lists)
    }

    /// Posting list of an exact feature
    pub fn postings(&self, feature: &str) -> Option<&PostingList> {
        self.catalog
            .get(feature)
            .and_then(|id| self.postings.get(&id))
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    /// Number of distinct features
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
