pub mod context;
pub mod document;
pub mod evaluate;
pub mod index;
pub mod normalizer;
pub mod term;
pub mod train;

use std::{fmt, sync::Arc};

use crate::{
    config::VsmConfig,
    error::VsmError,
    vectorizer::{
        document::Document,
        evaluate::Hits,
        index::VectorIndex,
        normalizer::{normalize_with, Normalizer},
        term::TermVector,
    },
};

/// Vector space model classifier.
///
/// Cloning is cheap and every clone shares the same trained index, so one
/// clone can feed [`Vsm::train`] while others call [`Vsm::search`].
#[derive(Clone)]
pub struct Vsm {
    inner: Arc<Inner>,
}

struct Inner {
    normalizer: Option<Box<dyn Normalizer>>,
    index: VectorIndex,
    config: VsmConfig,
}

impl Default for Vsm {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Vsm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vsm")
            .field("normalizer", &self.inner.normalizer.is_some())
            .field("documents", &self.inner.index.len())
            .field("config", &self.inner.config)
            .finish()
    }
}

impl Vsm {
    /// Classifier without a normalizer: text is only case-folded and split.
    pub fn new() -> Self {
        Self::with_config(None, VsmConfig::default())
    }

    pub fn with_normalizer<N>(normalizer: N) -> Self
    where
        N: Normalizer + 'static,
    {
        Self::with_config(Some(Box::new(normalizer)), VsmConfig::default())
    }

    pub fn with_config(normalizer: Option<Box<dyn Normalizer>>, config: VsmConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                normalizer,
                index: VectorIndex::new(config.parallel_threshold),
                config,
            }),
        }
    }

    pub fn config(&self) -> &VsmConfig {
        &self.inner.config
    }

    /// number of trained documents
    pub fn len(&self) -> usize {
        self.inner.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.index.is_empty()
    }

    /// normalize -> tokenize -> count
    fn vectorize(&self, text: &str) -> Result<TermVector, VsmError> {
        let normalized = normalize_with(self.inner.normalizer.as_deref(), text)?;
        Ok(TermVector::from_text(&normalized))
    }

    /// Trains a single document.
    ///
    /// A normalization failure is returned and nothing is inserted.
    /// Training the same document twice stores it twice.
    pub fn train_document(&self, doc: Document) -> Result<(), VsmError> {
        let vector = self.vectorize(&doc.sentence)?;
        tracing::debug!(class = %doc.class, terms = vector.len(), "document trained");
        self.inner.index.insert(vector, doc);
        Ok(())
    }

    /// Trained document most similar to `text`.
    ///
    /// `Ok(None)` when no trained document shares a term with the query.
    /// The returned document is shared with the index.
    pub fn search(&self, text: &str) -> Result<Option<Arc<Document>>, VsmError> {
        let query = self.vectorize(text)?;
        let found = self.inner.index.best_match(&query);
        tracing::debug!(
            query = text,
            class = found.as_ref().map(|d| d.class.as_str()),
            "search"
        );
        Ok(found)
    }

    /// Up to `top_n` trained documents similar to `text`, best first.
    /// Only positive similarities are listed.
    pub fn rank(&self, text: &str, top_n: usize) -> Result<Hits, VsmError> {
        let query = self.vectorize(text)?;
        let mut hits = self.inner.index.scores(&query);
        hits.truncate(top_n);
        Ok(hits)
    }
}
