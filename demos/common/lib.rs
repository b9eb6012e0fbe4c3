use termspace::Document;

/// Parse `Label; free text` lines into labels and documents.
#[allow(dead_code)]
pub fn parse_labelled_corpus(block: &str) -> (Vec<String>, Vec<Document>) {
    let mut labels = Vec::new();
    let mut docs = Vec::new();

    for line in block.lines() {
        let l = line.trim();
        if l.is_empty() {
            continue;
        }
        let mut parts = l.splitn(2, ';');
        let label = parts.next().unwrap().trim().to_string();
        let text = parts.next().unwrap_or("").trim();

        labels.push(label);
        docs.push(Document::from(text));
    }

    (labels, docs)
}
