use std::collections::BTreeMap;

use crate::dataset::sample::Sample;

/// Number of samples per library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryCounts {
    counts: BTreeMap<String, usize>,
}

impl LibraryCounts {
    pub fn get(&self, library: &str) -> usize {
        self.counts.get(library).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct libraries
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Most sampled first; ties broken by library name.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(library, count)| (library.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    pub fn render_table(&self) -> String {
        const LIBRARY: &str = "library";
        const SAMPLES: &str = "samples";

        let ranked = self.ranked();
        let width = ranked
            .iter()
            .map(|(library, _)| library.len())
            .chain(std::iter::once(LIBRARY.len()))
            .max()
            .unwrap_or(LIBRARY.len());

        let mut table = format!("{:<width$}  {}\n", LIBRARY, SAMPLES, width = width);
        for (library, count) in ranked {
            table.push_str(&format!(
                "{:<width$}  {:>samples$}\n",
                library,
                count,
                width = width,
                samples = SAMPLES.len()
            ));
        }
        table
    }
}

pub fn count_by_library(samples: &[Sample]) -> LibraryCounts {
    let mut counts = BTreeMap::new();
    for sample in samples {
        *counts.entry(sample.library.clone()).or_insert(0) += 1;
    }
    LibraryCounts { counts }
}
