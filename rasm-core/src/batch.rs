//! Parallel Batch Normalization
//!
//! Normalizes whole corpora across threads. Texts are independent, so the
//! work splits into chunks with no coordination beyond the final collect.

use rayon::prelude::*;

use crate::normalizer::Normalizer;

/// Configuration for batch normalization
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Upper bound on worker fan-out, used to size chunks
    pub max_parallelism: usize,
    /// Minimum number of texts per chunk
    pub chunk_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            max_parallelism: num_cpus::get(),
            chunk_size: 32,
        }
    }
}

/// Batch executor applying one [`Normalizer`] to many texts
pub struct BatchNormalizer<'a> {
    normalizer: &'a Normalizer,
    config: BatchConfig,
}

impl<'a> BatchNormalizer<'a> {
    pub fn new(normalizer: &'a Normalizer) -> Self {
        Self {
            normalizer,
            config: BatchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Normalize every text in parallel, preserving input order.
    pub fn run(&self, texts: &[String]) -> Vec<String> {
        let per_worker = texts.len() / self.config.max_parallelism.max(1);
        let chunk_size = self.config.chunk_size.max(per_worker).max(1);

        texts
            .par_chunks(chunk_size)
            .flat_map(|chunk| {
                chunk
                    .iter()
                    .map(|text| self.normalizer.normalize(text))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::NormalizerConfig;

    #[test]
    fn matches_sequential_output_in_order() {
        let normalizer = Normalizer::default();
        let texts: Vec<String> = [
            "جـــمـــيـــل",
            "بِسْمِ",
            "Hello مرحبا 123",
            "",
            "مدرسة",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let sequential: Vec<String> = texts.iter().map(|t| normalizer.normalize(t)).collect();
        let parallel = BatchNormalizer::new(&normalizer).run(&texts);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn empty_batch() {
        let normalizer = Normalizer::new(NormalizerConfig::strip_only());
        let out = BatchNormalizer::new(&normalizer).run(&[]);
        assert!(out.is_empty());
    }

    #[test]
    fn respects_custom_chunking() {
        let normalizer = Normalizer::default();
        let texts: Vec<String> = (0..100).map(|i| format!("نصـــ {i}")).collect();

        let config = BatchConfig {
            max_parallelism: 2,
            chunk_size: 3,
        };
        let out = BatchNormalizer::new(&normalizer)
            .with_config(config)
            .run(&texts);

        assert_eq!(out.len(), texts.len());
        assert_eq!(out[0], "نص 0");
        assert_eq!(out[99], "نص 99");
    }
}
