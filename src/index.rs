//! SimilarityIndex: the corpus matrix plus an id↔label map, answering
//! top-k nearest-neighbour queries.
//!
//! One `build`, then any number of read-only `query` calls. The index never
//! mutates after construction, so it is freely shareable across threads;
//! each query only reads shared state and allocates its own score buffer.
//!
//! Scores are computed row-by-row against the reference document — the full
//! N×N similarity matrix is never materialized. The per-document loop fans
//! out over rayon, and because each row's dot product accumulates
//! sequentially in column order, parallel results are bit-identical to a
//! sequential pass.

use std::cmp::Ordering;
use std::collections::HashMap;

use log::{debug, info, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{CorpusMatrix, DocId, WeightingMode};
use crate::error::IndexError;

/// Bijection between document ids and human-readable labels.
///
/// Every id maps to exactly one label, but labels may repeat; a repeated
/// label resolves to its **last** occurring id (last-write-wins). This is a
/// deliberate, tested policy rather than an accident of map insertion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelMap {
    labels: Vec<String>,
    by_label: HashMap<String, DocId>,
}

impl LabelMap {
    /// Builds from labels in document-id order.
    pub fn from_labels(labels: Vec<String>) -> Self {
        let mut by_label = HashMap::with_capacity(labels.len());
        for (id, label) in labels.iter().enumerate() {
            // later ids overwrite earlier ones for the same label
            by_label.insert(label.clone(), id);
        }
        Self { labels, by_label }
    }

    /// Number of labelled documents.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if the map holds no labels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Document id for a label, if present. Duplicated labels resolve to
    /// the last occurrence.
    #[inline]
    pub fn resolve(&self, label: &str) -> Option<DocId> {
        self.by_label.get(label).copied()
    }

    /// Label of a document id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn label(&self, id: DocId) -> &str {
        &self.labels[id]
    }
}

/// Content-based similarity index over an immutable corpus.
///
/// Built once from a [`CorpusMatrix`] and its labels; adding documents
/// means rebuilding. The similarity kernel follows the weighting mode:
/// TF-IDF rows are already unit-norm, so the kernel is the plain dot
/// product; raw-count rows use true cosine similarity, defined as 0 when
/// either norm is 0.
///
/// # Examples
///
/// ```
/// use termspace::{Document, SimilarityIndex, Vectorizer};
///
/// let docs: Vec<Document> = vec!["red mars dust".into(), "red mars rover".into()];
/// let (_, matrix) = Vectorizer::new().fit(&docs).unwrap();
/// let index = SimilarityIndex::build(matrix, vec!["Dust".into(), "Rover".into()]).unwrap();
///
/// let hits = index.query("Dust", 1).unwrap();
/// assert_eq!(hits[0].0, "Rover");
/// ```
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    corpus: CorpusMatrix,
    labels: LabelMap,
    norms: Vec<f64>,
}

impl SimilarityIndex {
    /// Stores the corpus matrix and label map, precomputing per-row norms.
    ///
    /// # Errors
    ///
    /// - [`IndexError::EmptyCorpus`] on a zero-document corpus.
    /// - [`IndexError::Shape`] if `labels` length differs from the corpus
    ///   document count.
    pub fn build(corpus: CorpusMatrix, labels: Vec<String>) -> Result<Self, IndexError> {
        if corpus.ndocs() == 0 {
            return Err(IndexError::EmptyCorpus);
        }
        if labels.len() != corpus.ndocs() {
            return Err(IndexError::Shape {
                labels: labels.len(),
                documents: corpus.ndocs(),
            });
        }

        info!(
            "Building similarity index over {} documents × {} terms ({:?} kernel)",
            corpus.ndocs(),
            corpus.nterms(),
            corpus.mode()
        );
        let norms: Vec<f64> = (0..corpus.ndocs()).map(|d| corpus.row_norm(d)).collect();
        debug!(
            "Precomputed {} row norms, {} zero rows",
            norms.len(),
            norms.iter().filter(|&&n| n == 0.0).count()
        );

        Ok(Self {
            corpus,
            labels: LabelMap::from_labels(labels),
            norms,
        })
    }

    /// Number of indexed documents.
    #[inline]
    pub fn len(&self) -> usize {
        self.corpus.ndocs()
    }

    /// True if the index holds no documents. Unreachable through `build`,
    /// which rejects empty corpora.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.corpus.ndocs() == 0
    }

    /// The label map backing label resolution.
    #[inline]
    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    /// Similarity between two documents under the index kernel.
    ///
    /// Symmetric in its arguments. 1.0 (within floating-point tolerance)
    /// for any non-zero document against itself.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of bounds.
    pub fn similarity(&self, a: DocId, b: DocId) -> f64 {
        match self.corpus.mode() {
            WeightingMode::TfIdf => self.corpus.dot(a, b),
            WeightingMode::RawCount => {
                let denom = self.norms[a] * self.norms[b];
                if denom > 0.0 {
                    self.corpus.dot(a, b) / denom
                } else {
                    0.0
                }
            }
        }
    }

    /// Top-k nearest neighbours of the document named by `label`.
    ///
    /// Scores every corpus document against the reference (self included),
    /// orders descending by score with ties broken by ascending document
    /// id, drops the single entry for the reference id, and returns the
    /// next `k` as `(label, score)` pairs. Fewer than `k` come back when
    /// the corpus minus the reference is smaller than `k`.
    ///
    /// # Errors
    ///
    /// - [`IndexError::InvalidArgument`] if `k == 0`.
    /// - [`IndexError::UnknownLabel`] if `label` is not in the label map.
    pub fn query(&self, label: &str, k: usize) -> Result<Vec<(String, f64)>, IndexError> {
        if k == 0 {
            return Err(IndexError::InvalidArgument(
                "k must be at least 1".to_string(),
            ));
        }
        let reference = self
            .labels
            .resolve(label)
            .ok_or_else(|| IndexError::UnknownLabel(label.to_string()))?;
        trace!("Query label {label:?} resolved to document {reference}");

        let mut scored = self.scores(reference);
        scored.sort_unstable_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        // ids are unique, so this removes exactly the reference entry
        scored.retain(|&(id, _)| id != reference);
        scored.truncate(k);

        debug!(
            "Query {label:?}: returning {} of k={k} requested neighbours",
            scored.len()
        );
        Ok(scored
            .into_iter()
            .map(|(id, score)| (self.labels.label(id).to_string(), score))
            .collect())
    }

    /// Kernel scores of every corpus document against the reference.
    ///
    /// Parallel over documents only; each row's accumulation is sequential
    /// in column order, keeping results identical to a sequential loop.
    fn scores(&self, reference: DocId) -> Vec<(DocId, f64)> {
        (0..self.corpus.ndocs())
            .into_par_iter()
            .map(|id| (id, self.similarity(reference, id)))
            .collect()
    }
}
