use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vector::distance;

/// Fixed-length point with an opaque caller payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector<T = ()> {
    pub id: u32,
    pub values: Vec<f64>,
    pub data: T,
}

impl Vector<()> {
    /// A vector without payload
    pub fn point(id: u32, values: Vec<f64>) -> Self {
        Self {
            id,
            values,
            data: (),
        }
    }

    /// A zero vector of `size` dimensions
    pub fn zeros(id: u32, size: usize) -> Self {
        Self::point(id, vec![0.0; size])
    }
}

impl<T> Vector<T> {
    pub fn new(id: u32, values: Vec<f64>, data: T) -> Self {
        Self { id, values, data }
    }

    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    pub fn dist_cos<U>(&self, other: &Vector<U>) -> f64 {
        distance::cosine_similarity(&other.values, &self.values)
    }

    pub fn dist_euclidean<U>(&self, other: &Vector<U>) -> f64 {
        distance::euclidean_distance(&other.values, &self.values)
    }

    pub fn dist_monte_carlo<U>(&self, other: &Vector<U>) -> Result<f64> {
        distance::monte_carlo_distance(&other.values, &self.values)
    }
}
