//! Free-text tokenization and tag normalization.
//!
//! The free-text rule is fixed for reproducibility: lowercase, split on
//! non-alphanumeric boundaries, drop empty tokens. Stopword filtering and
//! optional stemming live in the [`crate::vectorizer`], which owns that
//! configuration.

/// Tokenize free text: lowercase, split on non-alphanumeric boundaries,
/// drop empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a pre-assembled tag token: trim surrounding whitespace and
/// lowercase. Tag tokens are never re-split; a multi-word tag that was
/// collapsed upstream stays a single token.
pub fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}
