use std::sync::Arc;

use anyhow::Error;
use log::debug;

use crate::models::{
    config::Config,
    detection_result::{DetectionResult, MIN_CONFIDENCE},
    language::Language,
};
use crate::repos::reference_tables::ReferenceTables;
use crate::strategies::{
    diacritic_strategy::DiacriticStrategy, ngram_strategy::NgramStrategy,
    stopword_strategy::StopwordStrategy, DetectionStrategy,
};
use crate::utils::text_utils::TextNormalizer;

pub struct LanguageDetector {
    normalizer: TextNormalizer,
    strategies: Vec<Box<dyn DetectionStrategy>>,
    default_language: Language,
    fallback_confidence: f64,
}

impl LanguageDetector {
    pub fn new(config: &Config, tables: Arc<ReferenceTables>) -> Result<LanguageDetector, Error> {
        config.validate()?;

        let languages = config.languages_by_priority();

        let mut strategies: Vec<Box<dyn DetectionStrategy>> = vec![
            Box::new(StopwordStrategy::new(
                tables.clone(),
                languages.clone(),
                config.stopword_threshold,
                config.stopword_margin,
            )),
            Box::new(DiacriticStrategy::new(
                tables,
                languages.clone(),
                config.diacritic_threshold,
            )),
        ];

        if config.enable_ngram {
            strategies.push(Box::new(NgramStrategy::new(
                &languages,
                config.ngram_threshold,
            )));
        }

        Ok(LanguageDetector {
            normalizer: TextNormalizer::new(config.max_input_chars)?,
            strategies,
            default_language: config.default_language,
            fallback_confidence: config.fallback_confidence,
        })
    }

    pub fn with_defaults() -> Result<LanguageDetector, Error> {
        LanguageDetector::new(&Config::default(), Arc::new(ReferenceTables::load()))
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn detect(&self, text: &str) -> DetectionResult {
        let normalized = self.normalizer.normalize(text);

        if normalized.is_empty() {
            debug!("No words to classify, using {}", self.default_language);
            return DetectionResult::fallback(self.default_language, MIN_CONFIDENCE);
        }

        for strategy in &self.strategies {
            if let Some(result) = strategy.classify(&normalized) {
                debug!(
                    "Detected {} with {:?} ({:.3})",
                    result.language,
                    strategy.method(),
                    result.confidence
                );

                return result;
            }
        }

        debug!(
            "No strategy was confident, falling back to {}",
            self.default_language
        );

        DetectionResult::fallback(self.default_language, self.fallback_confidence)
    }
}
