use std::sync::Arc;

use log::debug;

use super::{rank, DetectionStrategy};
use crate::models::{
    detection_result::{DetectionMethod, DetectionResult},
    language::Language,
};
use crate::repos::reference_tables::ReferenceTables;
use crate::utils::{consts::DIACRITIC_SATURATION, text_utils::NormalizedText};

pub struct DiacriticStrategy {
    tables: Arc<ReferenceTables>,
    languages: Vec<Language>,
    threshold: f64,
}

impl DiacriticStrategy {
    pub fn new(
        tables: Arc<ReferenceTables>,
        languages: Vec<Language>,
        threshold: f64,
    ) -> DiacriticStrategy {
        DiacriticStrategy {
            tables,
            languages,
            threshold,
        }
    }
}

impl DetectionStrategy for DiacriticStrategy {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Diacritic
    }

    fn classify(&self, text: &NormalizedText) -> Option<DetectionResult> {
        let scores: Vec<(Language, f64)> = self
            .languages
            .iter()
            .map(|language| (*language, self.tables.diacritics.score(*language, &text.text)))
            .collect();

        let ranking = rank(&scores)?;

        debug!(
            "Diacritic ranking: {} {:.2} of {:.2}",
            ranking.best, ranking.best_score, ranking.total_score
        );

        if ranking.best_score <= 0.0 || ranking.best_score < self.threshold {
            return None;
        }

        let share = ranking.best_score / ranking.total_score;
        let saturation = (ranking.best_score / DIACRITIC_SATURATION).min(1.0);
        let confidence = 0.3 + 0.5 * share * saturation;

        Some(DetectionResult::new(
            ranking.best,
            confidence,
            DetectionMethod::Diacritic,
        ))
    }
}
