//! Vectorizer: documents in, vocabulary and weighted sparse matrix out.
//!
//! `fit` is a pure function of its configuration and inputs: it never keeps
//! state between calls, and the same documents in the same order produce a
//! bit-identical vocabulary and matrix every time.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use log::{debug, info, trace};
use rust_stemmers::{Algorithm, Stemmer};

use crate::core::{CorpusMatrix, Document, Vocabulary, WeightingMode};
use crate::error::IndexError;
use crate::tokenize::{normalize_token, tokenize};

/// Converts a collection of documents into sparse numeric vectors in a
/// shared vocabulary space.
///
/// Configuration follows the builder convention: construct with [`new`],
/// chain `with_*` calls, then [`fit`].
///
/// - Free-text documents are lowercased and split on non-alphanumeric
///   boundaries; token-list documents are normalized but never re-split.
/// - Tokens found in the stopword set are excluded from the vocabulary
///   entirely (checked before stemming).
/// - With [`WeightingMode::TfIdf`], weights are
///   `tf × (ln((1 + N) / (1 + df)) + 1)` followed by L2 row normalization,
///   so the dot product of two rows is their cosine similarity and
///   self-similarity is 1.0 for any non-zero row.
///
/// [`new`]: Vectorizer::new
/// [`fit`]: Vectorizer::fit
///
/// # Examples
///
/// ```
/// use termspace::{Document, Vectorizer, WeightingMode};
///
/// let docs: Vec<Document> = vec!["a toy story".into(), "a war story".into()];
/// let (vocab, matrix) = Vectorizer::new()
///     .with_mode(WeightingMode::RawCount)
///     .with_stopwords(["a"])
///     .fit(&docs)
///     .unwrap();
///
/// let terms: Vec<&str> = vocab.terms().iter().map(String::as_str).collect();
/// assert_eq!(terms, ["story", "toy", "war"]);
/// assert_eq!(matrix.ndocs(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Vectorizer {
    mode: WeightingMode,
    stopwords: HashSet<String>,
    stem: bool,
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self {
            mode: WeightingMode::TfIdf,
            stopwords: HashSet::new(),
            stem: false,
        }
    }
}

impl Vectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select raw-count or TF-IDF weighting. Defaults to TF-IDF.
    pub fn with_mode(mut self, mode: WeightingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Tokens to exclude from the vocabulary entirely. Lowercased on entry
    /// to match the tokenizer's output.
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(|w| w.into().to_lowercase()).collect();
        self
    }

    /// Fold English inflections ("toys"/"toy", "stories"/"story") onto a
    /// shared stem in free-text documents. Off by default; token-list
    /// documents are never stemmed.
    pub fn with_stemming(mut self, stem: bool) -> Self {
        self.stem = stem;
        self
    }

    /// Learn the vocabulary and weight every document into a corpus matrix.
    ///
    /// The matrix has one row per input document, in input order; documents
    /// whose tokens are all filtered away become legal all-zero rows.
    ///
    /// # Errors
    ///
    /// [`IndexError::EmptyCorpus`] if `documents` is empty.
    pub fn fit(&self, documents: &[Document]) -> Result<(Vocabulary, CorpusMatrix), IndexError> {
        if documents.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }
        info!(
            "Fitting vectorizer over {} documents ({:?}, {} stopwords, stemming={})",
            documents.len(),
            self.mode,
            self.stopwords.len(),
            self.stem
        );

        let stemmer = self.stem.then(|| Stemmer::create(Algorithm::English));
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| self.surviving_tokens(d, stemmer.as_ref()))
            .collect();

        trace!("Collecting vocabulary from surviving tokens");
        let terms: BTreeSet<String> = tokenized.iter().flatten().cloned().collect();
        let vocab = Vocabulary::from_sorted(terms);
        debug!("Vocabulary built: {} terms", vocab.len());

        let mut rows: Vec<Vec<(usize, f64)>> = Vec::with_capacity(tokenized.len());
        for tokens in &tokenized {
            let mut tf: BTreeMap<usize, f64> = BTreeMap::new();
            for token in tokens {
                let column = vocab
                    .index_of(token)
                    .expect("surviving token present in vocabulary");
                *tf.entry(column).or_insert(0.0) += 1.0;
            }
            rows.push(tf.into_iter().collect());
        }

        if self.mode == WeightingMode::TfIdf {
            self.apply_tfidf(&mut rows, vocab.len(), documents.len());
        }

        let empty_rows = rows.iter().filter(|r| r.is_empty()).count();
        if empty_rows > 0 {
            debug!("{empty_rows} documents have no surviving tokens (all-zero rows)");
        }

        let matrix = CorpusMatrix::from_rows(rows, vocab.len(), self.mode);
        info!(
            "Corpus matrix built: {} docs × {} terms, {} non-zeros",
            matrix.ndocs(),
            matrix.nterms(),
            matrix.nnz()
        );
        Ok((vocab, matrix))
    }

    /// Reweight raw counts in place: smoothed IDF then L2 row normalization.
    fn apply_tfidf(&self, rows: &mut [Vec<(usize, f64)>], nterms: usize, ndocs: usize) {
        let mut df = vec![0usize; nterms];
        for row in rows.iter() {
            for &(column, _) in row {
                df[column] += 1;
            }
        }

        let n = ndocs as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        for row in rows.iter_mut() {
            for (column, weight) in row.iter_mut() {
                *weight *= idf[*column];
            }
            let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, weight) in row.iter_mut() {
                    *weight /= norm;
                }
            }
        }
        trace!("Applied smoothed IDF and L2 normalization to {} rows", rows.len());
    }

    /// Tokens of one document after lowercasing, stopword filtering and
    /// (free-text only) optional stemming.
    fn surviving_tokens(&self, document: &Document, stemmer: Option<&Stemmer>) -> Vec<String> {
        match document {
            Document::Text(text) => tokenize(text)
                .into_iter()
                .filter(|t| !self.stopwords.contains(t))
                .map(|t| match stemmer {
                    Some(s) => s.stem(&t).into_owned(),
                    None => t,
                })
                .collect(),
            Document::Tokens(tokens) => tokens
                .iter()
                .map(|t| normalize_token(t))
                .filter(|t| !t.is_empty() && !self.stopwords.contains(t))
                .collect(),
        }
    }
}
