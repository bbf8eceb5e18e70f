#[cfg(test)]
mod dataset_tests {
    use verbench::{
        Error,
        dataset::{Sample, count_by_library, load_samples},
    };

    const MANIFEST: &str = r#"{"sample_id": "numpy-0", "library": "numpy", "version": "1.21.0"}
{"sample_id": "numpy-1", "library": "numpy", "version": "1.25.0"}
{"sample_id": "lightgbm-0", "library": "lightgbm", "version": "3.3.5", "description": "train a booster"}
{"sample_id": "sympy-0", "library": "sympy", "version": "1.12"}
{"sample_id": "numpy-2", "library": "numpy", "version": "2.0.0"}
"#;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("verbench-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_load_and_count() {
        let path = temp_path("manifest.jsonl");
        tokio::fs::write(&path, MANIFEST).await.unwrap();

        let samples = load_samples(&path).await.unwrap();
        assert_eq!(samples.len(), 5);
        assert_eq!(
            samples[2],
            Sample::new(
                "lightgbm-0".to_string(),
                "lightgbm".to_string(),
                "3.3.5".to_string()
            )
            .with_description("train a booster".to_string())
        );

        let counts = count_by_library(&samples);
        assert_eq!(counts.total(), 5);
        assert_eq!(
            counts.ranked(),
            vec![("numpy", 3), ("lightgbm", 1), ("sympy", 1)]
        );

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_bad_line_is_reported() {
        let path = temp_path("broken.jsonl");
        let content = format!("{MANIFEST}{{\"sample_id\": 7}}\n");
        tokio::fs::write(&path, content).await.unwrap();

        let err = load_samples(&path).await.unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { line: 6, .. }));
        assert!(err.to_string().starts_with("invalid record on line 6"));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
