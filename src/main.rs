use std::env;
use std::error::Error;

use simrank::{Document, SimrankConfig, rank_text};
use tracing_subscriber::EnvFilter;

const SAMPLE_QUERY: &str = "This is a test with the quick brown fox running";

const SAMPLE_CORPUS: [(u64, &str); 3] = [
    (1, "The quick brown fox jumps over the lazy dog"),
    (2, "A fox fled from danger to safety"),
    (3, "The lazy dog sleeps while the fox jumps"),
];

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Optional first argument: path to a YAML config.
    let cfg = match env::args().nth(1) {
        Some(path) => SimrankConfig::from_file(path)?,
        None => SimrankConfig::default(),
    };

    let documents = if cfg.corpus.is_empty() {
        let tokenize_cfg = cfg.tokenize_config();
        SAMPLE_CORPUS
            .iter()
            .map(|&(id, text)| Document::with_config(id, text, &tokenize_cfg))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        cfg.documents()?
    };
    let query = cfg.query.as_deref().unwrap_or(SAMPLE_QUERY);

    let results = rank_text(query, &documents, &cfg)?;

    println!("Top matching documents:");
    for hit in &results {
        println!("Doc ID: {}, Similarity: {:.6}", hit.id, hit.score);
    }

    Ok(())
}
