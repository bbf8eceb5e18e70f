pub mod completion;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod utils;

pub use error::{Error, Result};
pub use extract::{CodeBlockExtractor, ExtractorConfig, extract_first_python_code_block};
