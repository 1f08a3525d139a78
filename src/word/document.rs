use crate::query::pattern::{leading_char, parse_query, split_words, QueryTerm};

/// A document with its words lowercased and sorted for bucket lookups
#[derive(Clone, Debug)]
pub(crate) struct WordDocument {
    text: String,
    words: Vec<String>,
}

impl WordDocument {
    pub(crate) fn new(text: &str) -> Self {
        let mut words = split_words(text);
        words.sort_unstable();
        Self {
            text: text.to_string(),
            words,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether any term matches a word of this document
    ///
    /// `lower_bound` returns the first position whose leading character is
    /// not below the given one; the scan then covers that leading-character
    /// bucket.
    pub(crate) fn matches<L>(&self, terms: &[QueryTerm], lower_bound: L) -> bool
    where
        L: Fn(&[String], char) -> usize,
    {
        terms.iter().any(|term| {
            let Some(lead) = term.lead() else {
                return false;
            };
            let start = lower_bound(&self.words, lead);
            self.words[start..]
                .iter()
                .take_while(|word| leading_char(word) == Some(lead))
                .any(|word| term.matches(word))
        })
    }
}

/// First document at `from` or later matching `query`
pub(crate) fn scan_documents<L>(
    documents: &[WordDocument],
    query: &str,
    from: usize,
    lower_bound: L,
) -> Option<usize>
where
    L: Fn(&[String], char) -> usize,
{
    let terms = parse_query(query);
    if terms.is_empty() {
        return None;
    }

    documents
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, document)| document.matches(&terms, &lower_bound))
        .map(|(position, _)| position)
}

/// Whether the document at `index` matches `query`
pub(crate) fn document_matches<L>(
    documents: &[WordDocument],
    index: usize,
    query: &str,
    lower_bound: L,
) -> bool
where
    L: Fn(&[String], char) -> usize,
{
    documents
        .get(index)
        .is_some_and(|document| document.matches(&parse_query(query), lower_bound))
}
