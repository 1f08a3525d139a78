use parking_lot::{RwLock, RwLockReadGuard};

use super::WordIndex;
use crate::config::IndexStrategy;

/// Read/write locked word index
///
/// Any number of lookups run concurrently; `add` waits for them and
/// excludes everything else while it runs.
#[derive(Debug, Default)]
pub struct SyncIndex<I> {
    inner: RwLock<I>,
}

impl<I: WordIndex> SyncIndex<I> {
    pub fn new(index: I) -> Self {
        Self {
            inner: RwLock::new(index),
        }
    }

    pub fn strategy(&self) -> IndexStrategy {
        self.inner.read().strategy()
    }

    pub fn add(&self, documents: &[&str]) {
        self.inner.write().add(documents);
    }

    pub fn find(&self, query: &str) -> Option<usize> {
        self.inner.read().find(query)
    }

    pub fn find_off(&self, query: &str, from: usize) -> Option<usize> {
        self.inner.read().find_off(query, from)
    }

    pub fn find_all(&self, query: &str) -> Vec<usize> {
        self.inner.read().find_all(query)
    }

    pub fn find_at(&self, index: usize, query: &str) -> bool {
        self.inner.read().find_at(index, query)
    }

    /// Owned copy of the document text, since the lock is released on return
    pub fn document_at(&self, index: usize) -> Option<String> {
        self.inner.read().document_at(index).map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Hold the read lock for several lookups against one state
    pub fn read(&self) -> RwLockReadGuard<'_, I> {
        self.inner.read()
    }

    pub fn into_inner(self) -> I {
        self.inner.into_inner()
    }
}
