use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dataset::loader::load_jsonl;
use crate::error::Result;
use crate::extract::CodeBlockExtractor;

/// Raw model output for one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub sample_id: String,
    pub text: String,
}

/// Code pulled out of a completion; `code` is `None` when no fenced block was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSolution {
    pub sample_id: String,
    pub code: Option<String>,
}

pub fn extract_solutions(
    extractor: &CodeBlockExtractor,
    completions: &[Completion],
) -> Vec<ExtractedSolution> {
    let solutions: Vec<ExtractedSolution> = completions
        .iter()
        .map(|completion| {
            let code = extractor.extract(&completion.text).map(str::to_owned);
            if code.is_none() {
                debug!("No code block in completion for {}", completion.sample_id);
            }
            ExtractedSolution {
                sample_id: completion.sample_id.clone(),
                code,
            }
        })
        .collect();

    let missing = solutions.iter().filter(|s| s.code.is_none()).count();
    info!(
        "Extracted code from {}/{} completions",
        solutions.len() - missing,
        solutions.len()
    );
    solutions
}

pub async fn load_completions(path: impl AsRef<Path>) -> Result<Vec<Completion>> {
    load_jsonl(path.as_ref()).await
}

/// Write solutions as JSONL, one object per line.
pub async fn write_solutions(path: impl AsRef<Path>, solutions: &[ExtractedSolution]) -> Result<()> {
    let mut out = String::new();
    for solution in solutions {
        out.push_str(&serde_json::to_string(solution)?);
        out.push('\n');
    }
    tokio::fs::write(path, out).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ExtractorConfig;

    fn completion(id: &str, text: &str) -> Completion {
        Completion {
            sample_id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_extract_solutions_keeps_order() {
        let extractor = CodeBlockExtractor::new(ExtractorConfig::default()).unwrap();
        let completions = vec![
            completion("a", "```python\nimport numpy\n```"),
            completion("b", "I cannot help with that."),
            completion("c", "```\nprint(2)\n```"),
        ];

        let solutions = extract_solutions(&extractor, &completions);

        assert_eq!(solutions.len(), 3);
        assert_eq!(solutions[0].sample_id, "a");
        assert_eq!(solutions[0].code.as_deref(), Some("\nimport numpy\n"));
        assert_eq!(solutions[1].code, None);
        assert_eq!(solutions[2].code.as_deref(), Some("\nprint(2)\n"));
    }

    #[tokio::test]
    async fn test_write_then_load() {
        let dir = std::env::temp_dir().join(format!(
            "verbench-completion-{}-write-then-load",
            std::process::id()
        ));
        tokio::fs::create_dir_all(&dir).await.unwrap();

        let input = dir.join("completions.jsonl");
        tokio::fs::write(
            &input,
            "{\"sample_id\": \"s1\", \"text\": \"```python\\nx = 1\\n```\"}\n",
        )
        .await
        .unwrap();

        let completions = load_completions(&input).await.unwrap();
        assert_eq!(completions.len(), 1);

        let extractor = CodeBlockExtractor::new(ExtractorConfig::default()).unwrap();
        let solutions = extract_solutions(&extractor, &completions);
        let output = dir.join("solutions.jsonl");
        write_solutions(&output, &solutions).await.unwrap();

        let written = tokio::fs::read_to_string(&output).await.unwrap();
        assert_eq!(written, "{\"sample_id\":\"s1\",\"code\":\"\\nx = 1\\n\"}\n");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
