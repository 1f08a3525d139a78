use serde::{Deserialize, Serialize};

use crate::models::ItemId;

/// Item ids carrying one feature, ascending at all times
///
/// Inserting the same id twice keeps both entries; deduplication happens
/// when postings are merged at query time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingList {
    item_ids: Vec<ItemId>,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splice `id` in at its ascending position
    pub fn insert(&mut self, id: ItemId) {
        let index = self.item_ids.partition_point(|&existing| existing < id);
        self.item_ids.insert(index, id);
    }

    pub fn item_ids(&self) -> &[ItemId] {
        &self.item_ids
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.item_ids.binary_search(&id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.item_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }

    /// Whether no two consecutive entries are out of order
    pub(crate) fn is_sorted(&self) -> bool {
        self.item_ids.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

impl AsRef<[ItemId]> for PostingList {
    fn as_ref(&self) -> &[ItemId] {
        &self.item_ids
    }
}

impl FromIterator<ItemId> for PostingList {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        let mut list = PostingList::new();
        for id in iter {
            list.insert(id);
        }
        list
    }
}
