use crate::core::{CorpusMatrix, Vocabulary, WeightingMode};
use crate::index::{LabelMap, SimilarityIndex};
use crate::tests::test_data::toy_corpus;
use crate::tests::STOPWORDS;
use crate::vectorizer::Vectorizer;

fn fitted() -> (Vocabulary, CorpusMatrix, Vec<String>) {
    let (docs, labels) = toy_corpus();
    let (vocab, matrix) = Vectorizer::new()
        .with_mode(WeightingMode::TfIdf)
        .with_stopwords(STOPWORDS.iter().copied())
        .fit(&docs)
        .unwrap();
    (vocab, matrix, labels)
}

#[test]
fn vocabulary_roundtrips_through_json() {
    let (vocab, _, _) = fitted();
    let encoded = serde_json::to_string(&vocab).unwrap();
    let decoded: Vocabulary = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.terms(), vocab.terms());
    for term in vocab.terms() {
        assert_eq!(decoded.index_of(term), vocab.index_of(term));
    }
}

#[test]
fn corpus_matrix_roundtrips_through_json() {
    let (_, matrix, _) = fitted();
    let encoded = serde_json::to_string(&matrix).unwrap();
    let decoded: CorpusMatrix = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.ndocs(), matrix.ndocs());
    assert_eq!(decoded.nterms(), matrix.nterms());
    assert_eq!(decoded.mode(), matrix.mode());
    for doc in 0..matrix.ndocs() {
        assert_eq!(decoded.row_entries(doc), matrix.row_entries(doc));
    }
}

#[test]
fn rebuilt_index_answers_identically() {
    let (_, matrix, labels) = fitted();
    let original = SimilarityIndex::build(matrix.clone(), labels.clone()).unwrap();

    let encoded = serde_json::to_string(&matrix).unwrap();
    let decoded: CorpusMatrix = serde_json::from_str(&encoded).unwrap();
    let rebuilt = SimilarityIndex::build(decoded, labels).unwrap();

    assert_eq!(
        original.query("ToyMovie", 3).unwrap(),
        rebuilt.query("ToyMovie", 3).unwrap()
    );
}

#[test]
fn label_map_roundtrips_through_json() {
    let map = LabelMap::from_labels(
        ["X", "Y", "X"].iter().map(|l| l.to_string()).collect(),
    );
    let encoded = serde_json::to_string(&map).unwrap();
    let decoded: LabelMap = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded.resolve("X"), Some(2));
    assert_eq!(decoded.label(1), "Y");
}

#[test]
fn corpus_matrix_rejects_mismatched_row_count() {
    let raw = r#"{"mode":"TfIdf","docs":3,"terms":2,"rows":[[[0,1.0]],[[1,0.5]]]}"#;
    let result: Result<CorpusMatrix, _> = serde_json::from_str(raw);
    assert!(result.is_err());
}
