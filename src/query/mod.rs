//! Query composition
//!
//! - [`Filter`]: boolean AND / OR / IN trees evaluated against an
//!   [`crate::postings::InvertedIndex`]
//! - [`QueryTerm`]: wildcard (`term*`) and alternation (`term(a|b)`) syntax
//!   shared by the word indexes

pub mod filter;
pub mod pattern;

pub use filter::Filter;
pub use pattern::{parse_query, QueryTerm, TermKind};
