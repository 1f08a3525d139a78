//! Boolean filter expressions over an inverted index
//!
//! A filter is a pure tree; it holds no reference to the index and is
//! evaluated fresh against whatever index is passed in.
//!
//! # Example
//!
//! ```
//! use word_index::models::Item;
//! use word_index::postings::InvertedIndex;
//! use word_index::query::Filter;
//!
//! let mut index = InvertedIndex::new();
//! index.add(&[
//!     Item::new(3001, ["trial", "assassination"]),
//!     Item::new(4001, ["trial", "held"]),
//! ]);
//!
//! let filter = Filter::features_in(["trial"])
//!     .and(Filter::features_in(["held"]).or(Filter::features_in(["march"])));
//! assert_eq!(filter.evaluate(&index), vec![4001]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Feature, ItemId};
use crate::postings::{intersection, union, InvertedIndex};

/// Boolean expression tree
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Items present in both sides
    And(Box<Filter>, Box<Filter>),
    /// Items present in either side
    Or(Box<Filter>, Box<Filter>),
    /// Items carrying any of the features
    In(Vec<Feature>),
}

impl Filter {
    /// Leaf matching any of `features`
    pub fn features_in<I, F>(features: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Feature>,
    {
        Filter::In(features.into_iter().map(Into::into).collect())
    }

    pub fn and(self, other: Filter) -> Self {
        Filter::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Filter) -> Self {
        Filter::Or(Box::new(self), Box::new(other))
    }

    /// Left-fold `filters` with AND; `None` when there are none
    pub fn all_of<I: IntoIterator<Item = Filter>>(filters: I) -> Option<Self> {
        filters.into_iter().reduce(Filter::and)
    }

    /// Left-fold `filters` with OR; `None` when there are none
    pub fn any_of<I: IntoIterator<Item = Filter>>(filters: I) -> Option<Self> {
        filters.into_iter().reduce(Filter::or)
    }

    /// Evaluate against `index`, returning ascending item ids
    pub fn evaluate(&self, index: &InvertedIndex) -> Vec<ItemId> {
        match self {
            Filter::And(left, right) => {
                intersection(&[left.evaluate(index), right.evaluate(index)])
            }
            Filter::Or(left, right) => union(&[left.evaluate(index), right.evaluate(index)]),
            Filter::In(features) => index.find(features),
        }
    }

    /// Every leaf feature, left to right
    pub fn features(&self) -> Vec<&Feature> {
        let mut features = Vec::new();
        self.collect_features(&mut features);
        features
    }

    fn collect_features<'a>(&'a self, out: &mut Vec<&'a Feature>) {
        match self {
            Filter::And(left, right) | Filter::Or(left, right) => {
                left.collect_features(out);
                right.collect_features(out);
            }
            Filter::In(features) => out.extend(features.iter()),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::And(left, right) => write!(f, "({} AND {})", left, right),
            Filter::Or(left, right) => write!(f, "({} OR {})", left, right),
            Filter::In(features) => {
                write!(f, "IN(")?;
                for (i, feature) in features.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", feature)?;
                }
                write!(f, ")")
            }
        }
    }
}
