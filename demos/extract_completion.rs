use tracing::info;
use tracing_subscriber::EnvFilter;
use verbench::{
    CodeBlockExtractor, ExtractorConfig, Result,
    completion::{Completion, extract_solutions},
    dataset::{Sample, count_by_library},
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let samples = vec![
        Sample::new("numpy-0".into(), "numpy".into(), "1.21.0".into()),
        Sample::new("scipy-0".into(), "scipy".into(), "1.8.0".into()),
        Sample::new("numpy-1".into(), "numpy".into(), "2.0.0".into()),
    ];
    println!("{}", count_by_library(&samples).render_table());

    let completions = vec![
        Completion {
            sample_id: "numpy-0".into(),
            text: "Here is the code:\n```python\nimport numpy as np\nnp.ones(3)\n```".into(),
        },
        Completion {
            sample_id: "scipy-0".into(),
            text: "```\nfrom scipy import signal\n```".into(),
        },
        Completion {
            sample_id: "numpy-1".into(),
            text: "I am not sure which version you mean.".into(),
        },
    ];

    let extractor = CodeBlockExtractor::new(ExtractorConfig::default())?;
    for solution in extract_solutions(&extractor, &completions) {
        info!("{}", serde_json::to_string(&solution)?);
    }

    Ok(())
}
