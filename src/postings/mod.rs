//! Feature-based inverted index and the set algebra behind every query
//!
//! - [`merge`]: ordered union / intersection
//! - [`FeatureCatalog`]: feature <-> dense id mapping with prefix resolution
//! - [`PostingList`]: ascending item ids per feature
//! - [`InvertedIndex`]: the composed index, with save/load in [`snapshot`]

mod catalog;
mod inverted;
pub mod merge;
mod posting_list;
pub mod snapshot;

pub use catalog::FeatureCatalog;
pub use inverted::InvertedIndex;
pub use merge::{intersection, union};
pub use posting_list::PostingList;
pub use snapshot::{IndexSnapshot, SNAPSHOT_VERSION};
