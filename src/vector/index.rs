use std::collections::HashMap;

use tracing::debug;

use super::zorder::z_order_curve_scaled;
use crate::config::VectorIndexConfig;
use crate::error::{IndexError, Result};
use crate::models::Vector;

/// Vectors sorted by Morton code
///
/// Rebuilt wholesale by [`VectorIndex::fit`]; lookups never mutate.
#[derive(Clone, Debug)]
pub struct VectorIndex<T = ()> {
    config: VectorIndexConfig,
    vectors: Vec<Vector<T>>,
    /// (code, position in `vectors`), ascending by code
    order: Vec<(u64, usize)>,
    by_id: HashMap<u32, usize>,
    neighbors: HashMap<u32, Vec<u32>>,
}

impl<T> Default for VectorIndex<T> {
    fn default() -> Self {
        Self::new(VectorIndexConfig::default())
    }
}

impl<T> VectorIndex<T> {
    pub fn new(config: VectorIndexConfig) -> Self {
        Self {
            config,
            vectors: Vec::new(),
            order: Vec::new(),
            by_id: HashMap::new(),
            neighbors: HashMap::new(),
        }
    }

    pub fn config(&self) -> &VectorIndexConfig {
        &self.config
    }

    fn code(&self, values: &[f64]) -> u64 {
        z_order_curve_scaled(values, self.config.scale)
    }

    /// Replace the indexed vectors
    ///
    /// All vectors must share the first vector's dimensionality; on error
    /// the index keeps its previous contents. A later vector with an id
    /// already seen shadows the earlier one for [`VectorIndex::get`] and
    /// neighbourhoods, though both stay searchable.
    pub fn fit(&mut self, vectors: Vec<Vector<T>>) -> Result<()> {
        if let Some(first) = vectors.first() {
            let expected = first.dimensions();
            if let Some(bad) = vectors.iter().find(|v| v.dimensions() != expected) {
                return Err(IndexError::DimensionMismatch {
                    id: bad.id,
                    expected,
                    actual: bad.dimensions(),
                });
            }
        }

        let mut order: Vec<(u64, usize)> = vectors
            .iter()
            .enumerate()
            .map(|(position, v)| (self.code(&v.values), position))
            .collect();
        // Stable so equal codes keep input order
        order.sort_by_key(|&(code, _)| code);

        let by_id: HashMap<u32, usize> = vectors
            .iter()
            .enumerate()
            .map(|(position, v)| (v.id, position))
            .collect();

        let neighbors = match self.config.neighbors_threshold {
            Some(threshold) => Self::compute_neighbors(&vectors, &by_id, threshold),
            None => HashMap::new(),
        };

        debug!(
            vectors = vectors.len(),
            neighborhoods = neighbors.len(),
            "Fitted vector index"
        );

        self.vectors = vectors;
        self.order = order;
        self.by_id = by_id;
        self.neighbors = neighbors;
        Ok(())
    }

    /// Pairwise epsilon-neighbourhoods, O(n^2)
    fn compute_neighbors(
        vectors: &[Vector<T>],
        by_id: &HashMap<u32, usize>,
        threshold: f64,
    ) -> HashMap<u32, Vec<u32>> {
        by_id
            .iter()
            .map(|(&id, &position)| {
                let origin = &vectors[position];
                let mut close: Vec<u32> = by_id
                    .iter()
                    .filter(|&(&other, _)| other != id)
                    .filter(|&(_, &other)| origin.dist_euclidean(&vectors[other]) <= threshold)
                    .map(|(&other, _)| other)
                    .collect();
                close.sort_unstable();
                (id, close)
            })
            .collect()
    }

    /// Vectors whose code equals the query's code
    pub fn search(&self, query: &[f64]) -> Vec<&Vector<T>> {
        let code = self.code(query);
        self.scan(code, code)
    }

    /// Vectors whose code lies within `query ± radius` in code space
    ///
    /// The window is one contiguous range of the curve, so the result can
    /// both miss Euclidean neighbours and include distant points.
    pub fn search_neighborhood(&self, query: &[f64], radius: &[f64]) -> Vec<&Vector<T>> {
        let code = self.code(query);
        let radius = self.code(radius);
        self.scan(code.saturating_sub(radius), code.saturating_add(radius))
    }

    fn scan(&self, low: u64, high: u64) -> Vec<&Vector<T>> {
        let start = self.order.partition_point(|&(code, _)| code < low);
        self.order[start..]
            .iter()
            .take_while(|&&(code, _)| code <= high)
            .map(|&(_, position)| &self.vectors[position])
            .collect()
    }

    pub fn get(&self, id: u32) -> Option<&Vector<T>> {
        self.by_id.get(&id).map(|&position| &self.vectors[position])
    }

    /// Ids within the configured threshold of `id`, ascending
    ///
    /// Empty when no threshold is configured or `id` is unknown.
    pub fn neighbors(&self, id: u32) -> &[u32] {
        self.neighbors.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Vec<Vector> {
        [1.0, 1.0, 2.0, 101.0, 101.0]
            .iter()
            .zip(1..)
            .map(|(&x, id)| Vector::point(id, vec![x]))
            .collect()
    }

    fn plane() -> Vec<Vector> {
        [[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [101.0, 100.0], [101.0, 102.0]]
            .iter()
            .zip(1..)
            .map(|(xy, id)| Vector::point(id, xy.to_vec()))
            .collect()
    }

    fn ids(found: &[&Vector]) -> Vec<u32> {
        found.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_search_exact_code() {
        let mut index = VectorIndex::default();
        index.fit(line()).unwrap();

        assert_eq!(ids(&index.search(&[1.0])), vec![1, 2]);
        assert_eq!(ids(&index.search(&[2.0])), vec![3]);
        assert!(index.search(&[3.0]).is_empty());
    }

    #[test]
    fn test_search_neighborhood() {
        let mut index = VectorIndex::default();
        index.fit(line()).unwrap();
        assert_eq!(index.search_neighborhood(&[1.0], &[0.0]).len(), 2);
        assert_eq!(index.search_neighborhood(&[1.0], &[2f64.sqrt()]).len(), 3);

        index.fit(plane()).unwrap();
        assert_eq!(ids(&index.search_neighborhood(&[1.0, 1.0], &[])), vec![1]);
        assert_eq!(index.search_neighborhood(&[1.0, 1.0], &[2.0, 2.0]).len(), 3);
    }

    #[test]
    fn test_dimension_mismatch_keeps_index() {
        let mut index = VectorIndex::default();
        index.fit(line()).unwrap();

        let mut bad = plane();
        bad.push(Vector::point(9, vec![1.0]));
        let err = index.fit(bad).unwrap_err();
        assert!(matches!(
            err,
            IndexError::DimensionMismatch {
                id: 9,
                expected: 2,
                actual: 1
            }
        ));
        assert_eq!(index.len(), 5);
        assert_eq!(ids(&index.search(&[1.0])), vec![1, 2]);
    }

    #[test]
    fn test_neighbors_threshold() {
        let config = VectorIndexConfig {
            neighbors_threshold: Some(1.5),
            ..Default::default()
        };
        let mut index = VectorIndex::new(config);
        index.fit(plane()).unwrap();

        assert_eq!(index.neighbors(1), &[2, 3]);
        assert_eq!(index.neighbors(3), &[1, 2]);
        assert!(index.neighbors(4).is_empty());
        assert!(index.neighbors(42).is_empty());
    }

    #[test]
    fn test_get_and_payload() {
        let mut index = VectorIndex::default();
        index
            .fit(vec![
                Vector::new(7, vec![0.5, 0.5], "seven"),
                Vector::new(8, vec![0.25, 0.75], "eight"),
            ])
            .unwrap();

        assert_eq!(index.get(8).map(|v| v.data), Some("eight"));
        assert!(index.get(9).is_none());
        assert!(index.neighbors(7).is_empty());

        index.fit(Vec::new()).unwrap();
        assert!(index.is_empty());
    }
}
