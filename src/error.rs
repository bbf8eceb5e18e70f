use std::io;

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid language tag: {0:?}")]
    InvalidLanguage(String),

    #[error("invalid record on line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
