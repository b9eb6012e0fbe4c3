//! Core data model: documents, vocabulary, and the sparse corpus matrix.
//!
//! This module provides the structures everything else is built on:
//!
//! - [`Document`]: one ingested item, either free text (tokenized later) or
//!   a pre-assembled token list (the metadata-"soup" path).
//! - [`Vocabulary`]: the token → column-index map, assigned once from the
//!   full corpus in lexicographic ascending order so index assignment is
//!   deterministic across builds.
//! - [`CorpusMatrix`]: a CSR sparse matrix (documents × terms) tagged with
//!   the [`WeightingMode`] that produced it, with zero-copy row views and
//!   row-level dot/cosine kernels.
//!
//! Design goals:
//! - Immutable after construction: adding documents means rebuilding.
//! - Zero-copy row access for the per-query score loop.
//! - Deterministic layout: same input order, same matrix, bit for bit.
//!
//! # Examples
//!
//! Documents convert from plain strings or token lists:
//!
//! ```
//! use termspace::Document;
//!
//! let free_text: Document = "a toy story about toys".into();
//! let soup: Document = vec!["tomhanks".to_string(), "pixar".to_string()].into();
//! let missing: Document = Document::from(None::<String>);
//! assert_eq!(missing, Document::Text(String::new()));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sprs::{CsMat, CsVecView, TriMat};

/// Stable integer id of a document, assigned in ingestion order.
pub type DocId = usize;

/// One ingested document.
///
/// `Text` goes through the free-text tokenizer; `Tokens` is taken as-is
/// (normalized tags, never re-split). A missing upstream document maps to
/// empty text rather than an error, so sparse datasets vectorize cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// Raw free text, tokenized during `fit`.
    Text(String),
    /// Pre-assembled token multiset (the metadata-"soup" path).
    Tokens(Vec<String>),
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::Text(text.to_string())
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::Text(text)
    }
}

impl From<Option<String>> for Document {
    fn from(text: Option<String>) -> Self {
        Document::Text(text.unwrap_or_default())
    }
}

impl From<Vec<String>> for Document {
    fn from(tokens: Vec<String>) -> Self {
        Document::Tokens(tokens)
    }
}

/// How document vectors are weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightingMode {
    /// Raw term frequency within the document.
    RawCount,
    /// Smoothed TF-IDF with L2 row normalization, so the dot product of two
    /// rows is already their cosine similarity.
    TfIdf,
}

/// Token → column-index map, built once from the full corpus.
///
/// Indices are assigned in lexicographic ascending order over the set of
/// surviving tokens. This is independent of hash-map iteration order and of
/// the order tokens were first seen, so two fits over the same input agree
/// exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Builds from terms already in ascending order (a `BTreeSet` iterator).
    pub(crate) fn from_sorted<I>(sorted_terms: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let terms: Vec<String> = sorted_terms.into_iter().collect();
        debug_assert!(
            terms.windows(2).all(|w| w[0] < w[1]),
            "terms must be sorted and unique"
        );
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { terms, index }
    }

    /// Number of distinct terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the vocabulary holds no terms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column index of a term, if present.
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at a column index, if within bounds.
    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// All terms, ascending by column index (and therefore lexicographic).
    #[inline]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Sparse documents × terms matrix, aligned by [`DocId`], tagged with the
/// weighting mode that produced it.
///
/// The matrix is owned exclusively by the [`crate::SimilarityIndex`] once
/// built and never mutated afterwards. Rows of documents with no surviving
/// tokens are legal all-zero rows: their similarity with anything is 0.
///
/// # Panics
///
/// Row accessors panic on out-of-bounds document ids.
#[derive(Debug, Clone)]
pub struct CorpusMatrix {
    weights: CsMat<f64>,
    mode: WeightingMode,
}

impl CorpusMatrix {
    /// Assembles the matrix from per-document sparse `(column, weight)`
    /// entry lists. Entries within a row must not repeat a column.
    pub(crate) fn from_rows(
        rows: Vec<Vec<(usize, f64)>>,
        nterms: usize,
        mode: WeightingMode,
    ) -> Self {
        let mut tri = TriMat::new((rows.len(), nterms));
        for (doc, entries) in rows.iter().enumerate() {
            for &(term, weight) in entries {
                tri.add_triplet(doc, term, weight);
            }
        }
        Self {
            weights: tri.to_csr(),
            mode,
        }
    }

    /// Number of documents (rows).
    #[inline]
    pub fn ndocs(&self) -> usize {
        self.weights.rows()
    }

    /// Dimensionality of every row (vocabulary size).
    #[inline]
    pub fn nterms(&self) -> usize {
        self.weights.cols()
    }

    /// Number of stored non-zero weights.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.weights.nnz()
    }

    /// The weighting mode the rows were produced with.
    #[inline]
    pub fn mode(&self) -> WeightingMode {
        self.mode
    }

    /// Zero-copy view of one document row.
    ///
    /// # Panics
    ///
    /// Panics if `doc >= ndocs`.
    #[inline]
    pub(crate) fn row(&self, doc: DocId) -> CsVecView<'_, f64> {
        assert!(doc < self.ndocs(), "document id out of bounds: {doc}");
        self.weights.outer_view(doc).expect("CSR row within bounds")
    }

    /// Owned `(column, weight)` entries of one document row.
    ///
    /// # Panics
    ///
    /// Panics if `doc >= ndocs`.
    pub fn row_entries(&self, doc: DocId) -> Vec<(usize, f64)> {
        self.row(doc).iter().map(|(i, &w)| (i, w)).collect()
    }

    /// L2 norm of one document row. Zero rows have norm 0.
    #[inline]
    pub fn row_norm(&self, doc: DocId) -> f64 {
        self.row(doc)
            .iter()
            .map(|(_, &w)| w * w)
            .sum::<f64>()
            .sqrt()
    }

    /// Sparse dot product between two document rows.
    ///
    /// Accumulation runs in ascending column order for both rows, so the
    /// result does not depend on where the call happens (sequential loop or
    /// parallel fan-out).
    #[inline]
    pub fn dot(&self, a: DocId, b: DocId) -> f64 {
        self.row(a).dot(&self.row(b))
    }

    /// True cosine similarity between two document rows, defined as 0 when
    /// either norm is 0.
    #[inline]
    pub fn cosine(&self, a: DocId, b: DocId) -> f64 {
        let denom = self.row_norm(a) * self.row_norm(b);
        if denom > 0.0 {
            self.dot(a, b) / denom
        } else {
            0.0
        }
    }
}

/// Self-describing serialized form: per-document sparse entry lists.
#[derive(Serialize, Deserialize)]
struct SparseRows {
    mode: WeightingMode,
    docs: usize,
    terms: usize,
    rows: Vec<Vec<(usize, f64)>>,
}

impl Serialize for CorpusMatrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let rows = (0..self.ndocs()).map(|d| self.row_entries(d)).collect();
        SparseRows {
            mode: self.mode,
            docs: self.ndocs(),
            terms: self.nterms(),
            rows,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CorpusMatrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = SparseRows::deserialize(deserializer)?;
        if raw.rows.len() != raw.docs {
            return Err(serde::de::Error::custom(format!(
                "row count {} does not match declared document count {}",
                raw.rows.len(),
                raw.docs
            )));
        }
        Ok(CorpusMatrix::from_rows(raw.rows, raw.terms, raw.mode))
    }
}
