pub mod loader;
pub mod sample;
pub mod stats;

pub use loader::{load_samples, parse_jsonl};
pub use sample::Sample;
pub use stats::{LibraryCounts, count_by_library};
