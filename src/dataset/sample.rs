use serde::{Deserialize, Serialize};

/// One benchmark sample: a short snippet exercising a pinned library version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub sample_id: String,

    /// Package name, e.g. "numpy"
    pub library: String,

    /// Version the sample targets, e.g. "1.21.0"
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Sample {
    pub fn new(sample_id: String, library: String, version: String) -> Self {
        Self {
            sample_id,
            library,
            version,
            description: None,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}
