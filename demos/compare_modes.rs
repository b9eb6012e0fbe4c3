/// Fit the same overview corpus under both weighting modes and compare the
/// neighbours each one returns for a single title.
use termspace::{SimilarityIndex, Vectorizer, WeightingMode};

#[path = "./common/lib.rs"]
mod common;

const OVERVIEWS: &str = r#"
SpaceFarm; a stranded astronaut grows potatoes alone on the red plains of mars
RedOrbit; an astronaut crew drifts home from mars orbit after a failed mission
RainCity; a weary detective hunts a serial killer through endless city rain
LastCase; the detective comes back from retirement for one last killer case
TinRomance; two small robots fall in love while cleaning an abandoned earth
SaltKitchen; a stubborn chef opens a tiny restaurant by the winter sea
DeepDive; a salvage crew dives for a wreck and finds something alive below
QuietCourt; a juror holds out alone against eleven votes in a quiet courtroom
StarFreight; a freight crew hauls ore between stations and picks up a stowaway
GreenPlate; a street cook turns a food truck into the city's favourite kitchen
"#;

fn main() {
    env_logger::init();

    let (labels, docs) = common::parse_labelled_corpus(OVERVIEWS);
    let stopwords: Vec<String> = stop_words::get(stop_words::LANGUAGE::English);
    let query_label = "SpaceFarm";
    let k = 3;

    for mode in [WeightingMode::RawCount, WeightingMode::TfIdf] {
        let (vocab, matrix) = Vectorizer::new()
            .with_mode(mode)
            .with_stopwords(stopwords.iter().cloned())
            .with_stemming(true)
            .fit(&docs)
            .expect("corpus is non-empty");

        let index =
            SimilarityIndex::build(matrix, labels.clone()).expect("labels match corpus");

        println!("\n{mode:?} ({} terms) top-{k} for {query_label}:", vocab.len());
        let hits = index.query(query_label, k).expect("label is present");
        for (rank, (label, score)) in hits.iter().enumerate() {
            println!("  {}. {label} score={score:.6}", rank + 1);
        }
    }
}
