//! Approximate vector lookup over a Z-order (Morton) curve
//!
//! Points are mapped to one 64-bit code by interleaving the bits of their
//! scaled coordinates and kept sorted by that code. Lookups are a lower
//! bound followed by a linear scan, so they act as a cheap pre-filter
//! rather than an exact nearest-neighbour oracle.

pub mod distance;
mod index;
pub mod zorder;

pub use distance::{cosine_similarity, euclidean_distance, monte_carlo_distance};
pub use index::VectorIndex;
pub use zorder::{z_order_curve, z_order_curve_f64, z_order_curve_scaled};
