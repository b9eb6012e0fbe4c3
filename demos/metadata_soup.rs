/// Decode structured metadata into tag soups and query the resulting index.
///
/// This is the second ingestion path: instead of free text, each item is
/// represented by its normalized cast/director/keyword/genre tags, weighted
/// by raw counts and compared with true cosine similarity.
use serde::Deserialize;
use termspace::{SimilarityIndex, SoupBuilder, TagRecord, Vectorizer, WeightingMode};

const ITEMS_JSON: &str = r#"[
  {
    "title": "ToyTown",
    "cast": [{"name": "Tom Hanks"}, {"name": "Tim Allen"}, {"name": "Don Rickles"}],
    "crew": [{"name": "John Lasseter", "job": "Director"}],
    "keywords": [{"name": "toy"}, {"name": "friendship"}],
    "genres": [{"name": "Animation"}, {"name": "Comedy"}]
  },
  {
    "title": "RoadHome",
    "cast": [{"name": "Tom Hanks"}],
    "crew": [{"name": "Sam Mendes", "job": "Director"}],
    "keywords": [{"name": "father son relationship"}],
    "genres": [{"name": "Drama"}, {"name": "Crime"}]
  },
  {
    "title": "SpyCase",
    "cast": [{"name": "Daniel Craig"}, {"name": "Judi Dench"}],
    "crew": [{"name": "Sam Mendes", "job": "Director"}],
    "keywords": [{"name": "secret agent"}],
    "genres": [{"name": "Thriller"}, {"name": "Crime"}]
  },
  {
    "title": "DeepFields",
    "cast": [{"name": "Sam Worthington"}],
    "crew": [{"name": "A Writer", "job": "Writer"}],
    "keywords": [{"name": "farm"}, {"name": "drought"}],
    "genres": [{"name": "Drama"}]
  }
]"#;

#[derive(Debug, Deserialize)]
struct ItemMeta {
    title: String,
    #[serde(default)]
    cast: Vec<TagRecord>,
    #[serde(default)]
    crew: Vec<TagRecord>,
    #[serde(default)]
    keywords: Vec<TagRecord>,
    #[serde(default)]
    genres: Vec<TagRecord>,
}

fn main() {
    env_logger::init();

    let items: Vec<ItemMeta> = serde_json::from_str(ITEMS_JSON).expect("valid item metadata");

    let soup = SoupBuilder::new().with_cast_cap(3);
    let labels: Vec<String> = items.iter().map(|i| i.title.clone()).collect();
    let docs: Vec<_> = items
        .iter()
        .map(|i| soup.document(&i.cast, &i.crew, &i.keywords, &i.genres))
        .collect();

    let (vocab, matrix) = Vectorizer::new()
        .with_mode(WeightingMode::RawCount)
        .fit(&docs)
        .expect("corpus is non-empty");
    println!("soup vocabulary: {} tags", vocab.len());

    let index = SimilarityIndex::build(matrix, labels.clone()).expect("labels match corpus");

    for label in &labels {
        let hits = index.query(label, 2).expect("label is present");
        let line: Vec<String> = hits
            .iter()
            .map(|(l, s)| format!("{l} ({s:.4})"))
            .collect();
        println!("{label:>10} -> {}", line.join(", "));
    }
}
