use std::{
    cmp::Ordering,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard},
};

use rayon::prelude::*;

use crate::vectorizer::{document::Document, evaluate::Hits, term::TermVector};

#[derive(Debug)]
struct Entry {
    vector: TermVector,
    document: Arc<Document>,
}

/// インデックス
/// Trained `(TermVector, Document)` pairs in insertion order.
///
/// One lock guards the entries: `insert` takes it for writing, lookups for
/// reading, so a lookup never sees a half-inserted entry and lookups never
/// block each other.
#[derive(Debug)]
pub struct VectorIndex {
    entries: RwLock<Vec<Entry>>,
    /// minimum entries per rayon split
    parallel_threshold: usize,
}

impl Default for VectorIndex {
    fn default() -> Self {
        Self::new(usize::MAX)
    }
}

impl VectorIndex {
    pub fn new(parallel_threshold: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            parallel_threshold: parallel_threshold.max(1),
        }
    }

    /// Appends a trained document. Entries are never removed.
    pub fn insert(&self, vector: TermVector, document: Document) -> Arc<Document> {
        let document = Arc::new(document);
        let entry = Entry {
            vector,
            document: Arc::clone(&document),
        };
        // an entry is pushed whole, so a poisoned lock still holds a consistent Vec
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
        document
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Document with the highest cosine similarity to `query`.
    ///
    /// Equal scores keep the earlier-inserted document.
    /// Returns `None` unless the best similarity is strictly positive, so a
    /// query sharing no term with any trained document matches nothing.
    pub fn best_match(&self, query: &TermVector) -> Option<Arc<Document>> {
        if query.is_empty() {
            return None;
        }
        let entries = self.read();
        let (best_idx, best_score) = entries
            .par_iter()
            .with_min_len(self.parallel_threshold)
            .enumerate()
            .map(|(idx, entry)| (idx, query.cosine_similarity(&entry.vector)))
            .reduce(|| (usize::MAX, 0.0), prefer);
        if best_score > 0.0 {
            entries.get(best_idx).map(|entry| Arc::clone(&entry.document))
        } else {
            None
        }
    }

    /// Every document with a positive similarity to `query`, best first.
    /// Ties keep insertion order.
    pub fn scores(&self, query: &TermVector) -> Hits {
        if query.is_empty() {
            return Hits::new(Vec::new());
        }
        let entries = self.read();
        let list: Vec<(Arc<Document>, f64)> = entries
            .par_iter()
            .with_min_len(self.parallel_threshold)
            .filter_map(|entry| {
                let score = query.cosine_similarity(&entry.vector);
                (score > 0.0).then(|| (Arc::clone(&entry.document), score))
            })
            .collect();
        let mut hits = Hits::new(list);
        hits.sort_by_score();
        hits
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Higher score wins; on equal scores the lower insertion index wins.
/// A total order, so the rayon reduction gives the same answer as a
/// sequential first-to-last scan.
#[inline]
fn prefer(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    match a.1.total_cmp(&b.1) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal => {
            if a.0 <= b.0 {
                a
            } else {
                b
            }
        }
    }
}
