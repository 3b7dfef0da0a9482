//! This crate is a document classifier built on the Vector Space Model.

pub mod config;
pub mod error;
pub mod utils;
pub mod vectorizer;

/// VSM Classifier
/// The top-level struct of this crate.
/// Training documents are streamed in through [`Vsm::train`] and queries are
/// answered by [`Vsm::search`] with the trained document whose term-frequency
/// vector has the highest cosine similarity to the query's.
///
/// Internally, it holds:
/// - An optional normalizer applied to every text before tokenization
/// - The vector index of trained documents, guarded by a read/write lock
/// - The configuration
///
/// `Vsm` is a cheap handle: clones share one index, so searches can run on
/// any number of threads while a training worker is still inserting.
///
/// ```
/// use std::sync::mpsc;
/// use vsm_classifier::{Context, Document, Vsm};
///
/// let vsm = Vsm::new();
/// let (tx, rx) = mpsc::channel();
/// tx.send(Document::new("Shipment of gold damaged in a fire.", "d1")).unwrap();
/// tx.send(Document::new("Delivery of silver arrived in a silver truck.", "d2")).unwrap();
/// drop(tx);
///
/// for result in vsm.train(Context::background(), rx) {
///     result.unwrap();
/// }
///
/// let doc = vsm.search("gold silver truck.").unwrap().unwrap();
/// assert_eq!(doc.class, "d2");
/// ```
pub use vectorizer::Vsm;

/// Labeled training example, `{ "sentence": ..., "class": ... }`.
pub use vectorizer::document::Document;

/// Text normalization plugin
/// Any `Fn(&str) -> Result<String, NormalizeError> + Send + Sync` is a normalizer.
pub use vectorizer::normalizer::Normalizer;

/// Term Frequency Vector
/// Tokenizer output: case-folded, whitespace-split terms and their counts.
pub use vectorizer::term::{tokenize, TermVector};

/// Vector index of trained documents, searched by cosine similarity.
pub use vectorizer::index::VectorIndex;

/// Ranked search results returned by [`Vsm::rank`].
pub use vectorizer::evaluate::Hits;

/// Cancellation and deadline for a training run.
pub use vectorizer::context::{CancelHandle, Context};

/// Per-document training outcome.
pub use vectorizer::train::TrainResult;

pub use config::VsmConfig;
pub use error::{NormalizeError, VsmError};
