//! Query-word syntax shared by the word indexes
//!
//! A query word is one of:
//! - a literal: `container`
//! - a prefix: `contai*`, matching any word starting with `contai`
//! - an alternation: `contai(ner|ned)`, matching `container` or `contained`
//!
//! Malformed syntax (a bare `*`, an unterminated or base-less group)
//! degrades to literal matching instead of failing.

use tracing::debug;

use crate::models::WILDCARD;

const GROUP_OPEN: char = '(';
const GROUP_CLOSE: char = ')';
const GROUP_SEPARATOR: char = '|';

/// How a query word compares against indexed words
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermKind {
    Literal,
    Prefix,
    Alternation,
}

/// A parsed query word
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryTerm {
    raw: String,
    key: String,
    kind: TermKind,
    variants: Vec<String>,
}

impl QueryTerm {
    /// Parse one (already lowercased) query word
    pub fn parse(word: &str) -> Self {
        if let Some(prefix) = word.strip_suffix(WILDCARD) {
            if !prefix.is_empty() {
                return Self::new(word, prefix, TermKind::Prefix, Vec::new());
            }
            debug!(word, "empty wildcard prefix, matching literally");
            return Self::literal(word);
        }

        if let Some(inner_end) = word.strip_suffix(GROUP_CLOSE) {
            if let Some(open) = inner_end.rfind(GROUP_OPEN) {
                let base = &inner_end[..open];
                let group = &inner_end[open + GROUP_OPEN.len_utf8()..];
                if !base.is_empty() && !group.contains(GROUP_CLOSE) {
                    let variants = group
                        .split(GROUP_SEPARATOR)
                        .map(|alt| format!("{}{}", base, alt))
                        .collect();
                    return Self::new(word, base, TermKind::Alternation, variants);
                }
            }
        }

        if word.contains(GROUP_OPEN) {
            debug!(word, "malformed alternation group, matching literally");
        }
        Self::literal(word)
    }

    fn literal(word: &str) -> Self {
        Self::new(word, word, TermKind::Literal, Vec::new())
    }

    fn new(raw: &str, key: &str, kind: TermKind, variants: Vec<String>) -> Self {
        Self {
            raw: raw.to_string(),
            key: key.to_string(),
            kind,
            variants,
        }
    }

    /// The word as written in the query
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Text every match starts with: the literal, the prefix, or the group base
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> TermKind {
        self.kind
    }

    /// Literal expansions of an alternation group
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Leading character of [`QueryTerm::key`]
    pub fn lead(&self) -> Option<char> {
        leading_char(&self.key)
    }

    /// Whether an indexed word satisfies this term
    pub fn matches(&self, word: &str) -> bool {
        if word == self.raw {
            return true;
        }

        match self.kind {
            TermKind::Literal => false,
            TermKind::Prefix => word.starts_with(&self.key),
            TermKind::Alternation => self.variants.iter().any(|variant| variant == word),
        }
    }

    /// Regular expression source matching this term as a whole word
    ///
    /// Words are delimited by single spaces, as in the indexed documents.
    pub fn regex_source(&self) -> String {
        let mut alternatives = vec![regex::escape(&self.raw)];
        match self.kind {
            TermKind::Literal => {}
            TermKind::Prefix => alternatives.push(format!("{}[^ ]*", regex::escape(&self.key))),
            TermKind::Alternation => {
                alternatives.extend(self.variants.iter().map(|variant| regex::escape(variant)))
            }
        }
        format!("(?:^| )(?:{})(?: |$)", alternatives.join("|"))
    }
}

/// Lowercase `query`, split on single spaces, and parse each non-empty word
pub fn parse_query(query: &str) -> Vec<QueryTerm> {
    query
        .to_lowercase()
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(QueryTerm::parse)
        .collect()
}

/// Lowercase `text` and split it into non-empty words on single spaces
pub(crate) fn split_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn leading_char(word: &str) -> Option<char> {
    word.chars().next()
}
