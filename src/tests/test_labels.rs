use crate::core::{Document, WeightingMode};
use crate::index::{LabelMap, SimilarityIndex};
use crate::vectorizer::Vectorizer;

#[test]
fn duplicate_label_resolves_to_last_occurrence() {
    let map = LabelMap::from_labels(
        ["X", "Y", "X"].iter().map(|l| l.to_string()).collect(),
    );
    assert_eq!(map.len(), 3);
    assert_eq!(map.resolve("X"), Some(2));
    assert_eq!(map.resolve("Y"), Some(1));
    assert_eq!(map.resolve("Z"), None);

    // id → label stays total even when labels repeat
    assert_eq!(map.label(0), "X");
    assert_eq!(map.label(1), "Y");
    assert_eq!(map.label(2), "X");
}

#[test]
fn duplicate_label_query_uses_last_id_and_may_return_the_label() {
    // two documents share the label "X"; querying "X" references id 2,
    // so id 0 (also labelled "X") is a legitimate neighbour
    let docs: Vec<Document> = vec![
        Document::Tokens(vec!["alpha".to_string()]),
        Document::Tokens(vec!["beta".to_string()]),
        Document::Tokens(vec!["alpha".to_string()]),
    ];
    let labels: Vec<String> = ["X", "Y", "X"].iter().map(|l| l.to_string()).collect();

    let (_, matrix) = Vectorizer::new()
        .with_mode(WeightingMode::TfIdf)
        .fit(&docs)
        .unwrap();
    let index = SimilarityIndex::build(matrix, labels).unwrap();

    let hits = index.query("X", 2).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].0, "X");
    assert!(hits[0].1 > hits[1].1, "identical twin must outrank beta: {hits:?}");
    assert_eq!(hits[1].0, "Y");
}

#[test]
fn empty_label_map_resolves_nothing() {
    let map = LabelMap::from_labels(Vec::new());
    assert!(map.is_empty());
    assert_eq!(map.resolve("anything"), None);
}
