use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::dataset::sample::Sample;
use crate::error::{Error, Result};

/// Decodes one JSON value per non-blank line.
pub fn parse_jsonl<T: DeserializeOwned>(input: &str) -> Result<Vec<T>> {
    let mut records = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|source| Error::InvalidRecord {
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

pub(crate) async fn load_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    debug!("Reading {}", path.display());
    let content = tokio::fs::read_to_string(path).await?;
    parse_jsonl(&content)
}

/// Load the sample manifest at `path`.
pub async fn load_samples(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let samples: Vec<Sample> = load_jsonl(path).await?;
    info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
