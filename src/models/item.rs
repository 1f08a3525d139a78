use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// Caller-assigned item identifier
pub type ItemId = i64;

/// Dense feature identifier, assigned from 1 in first-seen order
pub type FeatureId = u64;

/// An item and the features describing it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub features: Vec<Feature>,
}

impl Item {
    pub fn new<I, F>(id: ItemId, features: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Feature>,
    {
        Self {
            id,
            features: features.into_iter().map(Into::into).collect(),
        }
    }
}
