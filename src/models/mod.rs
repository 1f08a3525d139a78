pub mod feature;
pub mod item;
pub mod vector;

pub use feature::{Feature, WILDCARD};
pub use item::{FeatureId, Item, ItemId};
pub use vector::Vector;
