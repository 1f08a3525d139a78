use std::collections::HashMap;

use crate::error::{IndexError, Result};
use crate::models::{Feature, FeatureId, WILDCARD};

/// Bidirectional feature <-> id mapping
///
/// Ids are dense and handed out from 1 in first-seen order; they are never
/// reused. A lexicographically sorted copy of the feature set backs wildcard
/// resolution and is rebuilt by [`FeatureCatalog::rebuild`] after each batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureCatalog {
    ids: HashMap<Feature, FeatureId>,
    sorted: Vec<Feature>,
}

impl FeatureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `feature`, assigning the next one if it is new
    ///
    /// This is the only mutation path for the id space.
    pub fn intern(&mut self, feature: &Feature) -> FeatureId {
        if let Some(&id) = self.ids.get(feature) {
            return id;
        }

        let id = self.ids.len() as FeatureId + 1;
        self.ids.insert(feature.clone(), id);
        id
    }

    /// Exact lookup
    pub fn get(&self, feature: &str) -> Option<FeatureId> {
        self.ids.get(feature).copied()
    }

    /// Re-sort the feature list used for prefix scans
    pub fn rebuild(&mut self) {
        let mut features: Vec<Feature> = self.ids.keys().cloned().collect();
        features.sort_unstable();
        self.sorted = features;
    }

    /// Ids of the features reachable from `prefix`
    ///
    /// Starts at the first feature `>= prefix` and scans forward while the
    /// candidate contains `prefix`, stopping at the first one that does not.
    /// An empty prefix resolves to nothing.
    pub fn resolve_wildcard(&self, prefix: &str) -> Vec<FeatureId> {
        if prefix.is_empty() {
            return Vec::new();
        }

        let start = self.sorted.partition_point(|f| f.as_str() < prefix);
        self.sorted[start..]
            .iter()
            .take_while(|f| f.as_str().contains(prefix))
            .filter_map(|f| self.get(f.as_str()))
            .collect()
    }

    /// Resolve a query feature to the ids it stands for
    ///
    /// An exact entry always wins. Otherwise a wildcard feature expands via
    /// [`FeatureCatalog::resolve_wildcard`]; a bare `*` resolves to nothing.
    pub fn resolve(&self, feature: &str) -> Vec<FeatureId> {
        if let Some(id) = self.get(feature) {
            return vec![id];
        }

        match feature.strip_suffix(WILDCARD) {
            Some(prefix) => self.resolve_wildcard(prefix),
            None => Vec::new(),
        }
    }

    /// Features in lexicographic order
    pub fn sorted_features(&self) -> &[Feature] {
        &self.sorted
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All entries ordered by id
    pub(crate) fn entries(&self) -> Vec<(Feature, FeatureId)> {
        let mut entries: Vec<(Feature, FeatureId)> = self
            .ids
            .iter()
            .map(|(feature, &id)| (feature.clone(), id))
            .collect();
        entries.sort_unstable_by_key(|(_, id)| *id);
        entries
    }

    /// Rebuild a catalog from persisted entries
    ///
    /// Entries must carry the dense ids `1..=n`, each feature exactly once.
    pub(crate) fn from_entries(entries: Vec<(Feature, FeatureId)>) -> Result<Self> {
        let count = entries.len() as FeatureId;
        let mut ids = HashMap::with_capacity(entries.len());
        let mut seen = vec![false; entries.len()];

        for (feature, id) in entries {
            if id == 0 || id > count {
                return Err(IndexError::InvalidSnapshot(format!(
                    "feature id {} outside 1..={}",
                    id, count
                )));
            }
            if std::mem::replace(&mut seen[(id - 1) as usize], true) {
                return Err(IndexError::InvalidSnapshot(format!(
                    "feature id {} assigned twice",
                    id
                )));
            }
            if ids.insert(feature.clone(), id).is_some() {
                return Err(IndexError::InvalidSnapshot(format!(
                    "feature '{}' listed twice",
                    feature
                )));
            }
        }

        let mut catalog = Self {
            ids,
            sorted: Vec::new(),
        };
        catalog.rebuild();
        Ok(catalog)
    }
}
