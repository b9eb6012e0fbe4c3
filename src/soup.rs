//! Metadata-"soup" assembly: structured tags into token-list documents.
//!
//! The soup path vectorizes items by their metadata (cast, director,
//! keywords, genres) instead of free text. Upstream sources deliver those
//! as loosely nested records; here they are decoded once into [`TagRecord`]
//! and concatenated into a [`Document::Tokens`]. Names are collapsed to
//! single tokens ("Sam Mendes" → "sammendes") so the vectorizer treats a
//! whole name as one term.

use serde::{Deserialize, Serialize};

use crate::core::Document;

/// One cast/crew/keyword/genre entry as decoded from upstream metadata.
///
/// `job` is present only for crew entries; a missing director is an
/// explicit `None`, not a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
}

impl TagRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: None,
        }
    }

    pub fn with_job(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: Some(job.into()),
        }
    }

    /// Single-token form: lowercased with all whitespace removed, so
    /// multi-word names survive tokenization as one term.
    pub fn token(&self) -> String {
        self.name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase()
    }

    /// True for the crew entry credited as director.
    pub fn is_director(&self) -> bool {
        self.job.as_deref() == Some("Director")
    }
}

/// Assembles per-item tag soups.
///
/// Keeps a leading slice of the cast (top billing carries the signal),
/// the first credited director, and every keyword and genre.
///
/// # Examples
///
/// ```
/// use termspace::{Document, SoupBuilder, TagRecord};
///
/// let cast = vec![TagRecord::new("Tom Hanks"), TagRecord::new("Tim Allen")];
/// let crew = vec![TagRecord::with_job("John Lasseter", "Director")];
/// let keywords = vec![TagRecord::new("toy")];
/// let genres = vec![TagRecord::new("Animation")];
///
/// let doc = SoupBuilder::new().document(&cast, &crew, &keywords, &genres);
/// assert_eq!(
///     doc,
///     Document::Tokens(vec![
///         "tomhanks".into(),
///         "timallen".into(),
///         "johnlasseter".into(),
///         "toy".into(),
///         "animation".into(),
///     ])
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SoupBuilder {
    cast_cap: usize,
}

impl Default for SoupBuilder {
    fn default() -> Self {
        Self { cast_cap: 3 }
    }
}

impl SoupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many leading cast entries contribute tokens. Defaults to 3.
    pub fn with_cast_cap(mut self, cap: usize) -> Self {
        self.cast_cap = cap;
        self
    }

    /// Concatenates normalized tags into one token-list document.
    pub fn document(
        &self,
        cast: &[TagRecord],
        crew: &[TagRecord],
        keywords: &[TagRecord],
        genres: &[TagRecord],
    ) -> Document {
        let mut tokens: Vec<String> = Vec::new();
        tokens.extend(cast.iter().take(self.cast_cap).map(TagRecord::token));
        if let Some(director) = crew.iter().find(|r| r.is_director()) {
            tokens.push(director.token());
        }
        tokens.extend(keywords.iter().map(TagRecord::token));
        tokens.extend(genres.iter().map(TagRecord::token));
        tokens.retain(|t| !t.is_empty());
        Document::Tokens(tokens)
    }
}
