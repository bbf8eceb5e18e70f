use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

/// Tag matched by the tagged pass of the default extractor.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Any fence, followed by a candidate tag token (no whitespace, no backticks).
const ANY_FENCE_PATTERN: &str = r"(?s)```([^\s`]*)(.*?)```";

static DEFAULT_EXTRACTOR: Lazy<Option<CodeBlockExtractor>> =
    Lazy::new(|| match CodeBlockExtractor::new(ExtractorConfig::default()) {
        Ok(extractor) => Some(extractor),
        Err(e) => {
            warn!("Failed to build default code block extractor: {}", e);
            None
        }
    });

/// Extractor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Tag preferred by the first pass, compared case-sensitively.
    pub language: String,
    /// Whether to fall back to the first fenced block of any tag.
    pub fallback_to_any_fence: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_owned(),
            fallback_to_any_fence: true,
        }
    }
}

impl ExtractorConfig {
    pub fn for_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    pub fn without_fallback(mut self) -> Self {
        self.fallback_to_any_fence = false;
        self
    }
}

/// Which pass produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The opening fence carried the configured language tag.
    Tagged,
    /// No tagged fence existed; the first fence of any tag was used.
    Fallback,
}

/// A fenced block found in a piece of text. All slices borrow the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    /// Everything between the opening fence (after its tag) and the closing fence.
    pub body: &'a str,
    pub tag: Option<&'a str>,
    /// Byte range of `body` within the input.
    pub span: Range<usize>,
    pub kind: MatchKind,
}

/// Finds the first fenced code block in free text, preferring blocks tagged
/// with the configured language.
#[derive(Debug, Clone)]
pub struct CodeBlockExtractor {
    config: ExtractorConfig,
    tagged: Regex,
    any: Regex,
}

impl CodeBlockExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        validate_language(&config.language)?;

        let tagged = Regex::new(&format!(
            r"(?s)```{}(.*?)```",
            regex::escape(&config.language)
        ))?;
        let any = Regex::new(ANY_FENCE_PATTERN)?;

        Ok(Self { config, tagged, any })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Returns the body of the first matching block, or `None`.
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.extract_block(text).map(|block| block.body)
    }

    pub fn extract_block<'a>(&self, text: &'a str) -> Option<CodeBlock<'a>> {
        if let Some(body) = self.tagged.captures(text).and_then(|caps| caps.get(1)) {
            debug!(
                "Found `{}` block at bytes {}..{}",
                self.config.language,
                body.start(),
                body.end()
            );
            return Some(CodeBlock {
                body: body.as_str(),
                tag: Some(&text[body.start() - self.config.language.len()..body.start()]),
                span: body.range(),
                kind: MatchKind::Tagged,
            });
        }

        if !self.config.fallback_to_any_fence {
            trace!("No `{}` block and fallback disabled", self.config.language);
            return None;
        }

        let caps = self.any.captures(text)?;
        let token = caps.get(1)?;
        let rest = caps.get(2)?;

        // A token only counts as a tag when the line ends right after it;
        // otherwise it is the start of an inline body.
        let (tag, span) = if !token.is_empty() && rest.as_str().starts_with(['\n', '\r']) {
            (Some(token.as_str()), rest.range())
        } else {
            (None, token.start()..rest.end())
        };
        debug!(
            "Falling back to block tagged {:?} at bytes {}..{}",
            tag, span.start, span.end
        );

        Some(CodeBlock {
            body: &text[span.clone()],
            tag,
            span,
            kind: MatchKind::Fallback,
        })
    }
}

/// Shared Python extractor, or `None` if its patterns failed to compile.
pub fn default_extractor() -> Option<&'static CodeBlockExtractor> {
    DEFAULT_EXTRACTOR.as_ref()
}

fn validate_language(language: &str) -> Result<()> {
    if language.is_empty() || language.chars().any(|c| c.is_whitespace() || c == '`') {
        return Err(Error::InvalidLanguage(language.to_owned()));
    }
    Ok(())
}

/// Returns the body of the first ```` ```python ```` block, or of the first
/// fenced block of any tag when no such block exists.
///
/// The body is returned verbatim, including the newline after the tag.
/// Unterminated fences and text without fences yield `None`.
pub fn extract_first_python_code_block(text: &str) -> Option<&str> {
    default_extractor().and_then(|extractor| extractor.extract(text))
}

/// One-shot extraction preferring `language` instead of `python`.
pub fn extract_first_code_block<'a>(text: &'a str, language: &str) -> Result<Option<&'a str>> {
    if language == DEFAULT_LANGUAGE {
        return Ok(extract_first_python_code_block(text));
    }
    let extractor = CodeBlockExtractor::new(ExtractorConfig::for_language(language))?;
    Ok(extractor.extract(text))
}
