//! Distance functions between raw coordinate slices

use crate::error::{IndexError, Result};

/// Compute cosine similarity between two vectors
///
/// # Arguments
/// * `a` - First vector
/// * `b` - Second vector
///
/// # Returns
/// Cosine of the angle between `a` and `b` in [-1, 1]; 0 when the lengths
/// differ or either vector has zero norm
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Compute Euclidean distance between two vectors
///
/// # Returns
/// The L2 distance; 0 when the lengths differ
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Monte Carlo distance estimate
///
/// Reserved; always fails with [`IndexError::Unimplemented`].
pub fn monte_carlo_distance(_a: &[f64], _b: &[f64]) -> Result<f64> {
    Err(IndexError::Unimplemented("monte carlo distance"))
}
