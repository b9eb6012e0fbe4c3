use crate::core::Document;

/// Four-document corpus with overlapping title vocabulary.
pub fn toy_corpus() -> (Vec<Document>, Vec<String>) {
    let docs = vec![
        "a toy story about toys".into(),
        "a story about a war".into(),
        "toys and war stories".into(),
        "a quiet drama".into(),
    ];
    let labels = ["ToyMovie", "WarMovie", "ToyWar", "Drama"]
        .iter()
        .map(|l| l.to_string())
        .collect();
    (docs, labels)
}

/// Six overview-style documents with a mix of shared and unique terms.
pub fn overview_corpus() -> (Vec<Document>, Vec<String>) {
    let docs = vec![
        "a stranded astronaut grows potatoes on mars".into(),
        "an astronaut crew drifts home from mars orbit".into(),
        "a detective hunts a serial killer through the rain".into(),
        "the detective retires after one last killer case".into(),
        "two robots fall in love while cleaning an empty earth".into(),
        "a chef opens a tiny restaurant by the sea".into(),
    ];
    let labels = [
        "Stranded", "Drift", "Hunt", "LastCase", "Robots", "SeaChef",
    ]
    .iter()
    .map(|l| l.to_string())
    .collect();
    (docs, labels)
}
