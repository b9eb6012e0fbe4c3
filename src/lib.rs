//! Termspace: content-based similarity index over sparse weighted term vectors.
//!
//! The crate turns a corpus of documents — free text or pre-assembled tag
//! lists — into sparse vectors in a shared vocabulary space, and answers
//! "which items are most similar to this one?" with a top-k cosine query.
//!
//! Two components, evaluated leaf-first:
//!
//! - [`Vectorizer`]: tokenizes documents, builds a deterministic
//!   [`Vocabulary`], and weights each document into a sparse row of a
//!   [`CorpusMatrix`] — raw term counts or L2-normalized TF-IDF.
//! - [`SimilarityIndex`]: owns the corpus matrix and an id↔label map; on
//!   query it scores the reference row against the whole corpus row-by-row
//!   and returns the nearest labels, never including the reference itself.
//!
//! The index is immutable once built: one `build`, then any number of
//! read-only `query` calls, safely shareable across threads.
//!
//! # Examples
//!
//! ```
//! use termspace::{Document, SimilarityIndex, Vectorizer, WeightingMode};
//!
//! let docs: Vec<Document> = vec![
//!     "dusty red plains of mars".into(),
//!     "a rover crossing the red plains of mars".into(),
//!     "a quiet courtroom drama".into(),
//! ];
//!
//! let (_vocab, matrix) = Vectorizer::new()
//!     .with_mode(WeightingMode::TfIdf)
//!     .fit(&docs)
//!     .unwrap();
//!
//! let index = SimilarityIndex::build(
//!     matrix,
//!     vec!["Dust".into(), "Rover".into(), "Verdict".into()],
//! )
//! .unwrap();
//!
//! let hits = index.query("Dust", 2).unwrap();
//! assert_eq!(hits[0].0, "Rover");
//! assert_eq!(hits.len(), 2);
//! ```

pub mod core;
pub mod error;
pub mod index;
pub mod soup;
pub mod tokenize;
pub mod vectorizer;

#[cfg(test)]
mod tests;

pub use crate::core::{CorpusMatrix, DocId, Document, Vocabulary, WeightingMode};
pub use crate::error::IndexError;
pub use crate::index::{LabelMap, SimilarityIndex};
pub use crate::soup::{SoupBuilder, TagRecord};
pub use crate::vectorizer::Vectorizer;
