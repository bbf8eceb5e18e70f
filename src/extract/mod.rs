pub mod extractor;

pub use extractor::{
    CodeBlock, CodeBlockExtractor, DEFAULT_LANGUAGE, ExtractorConfig, MatchKind,
    default_extractor, extract_first_code_block, extract_first_python_code_block,
};
