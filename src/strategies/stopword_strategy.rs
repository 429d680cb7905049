use std::sync::Arc;

use log::debug;

use super::{rank, DetectionStrategy};
use crate::models::{
    detection_result::{DetectionMethod, DetectionResult},
    language::Language,
};
use crate::repos::reference_tables::ReferenceTables;
use crate::utils::{consts::SHORT_INPUT_TOKENS, text_utils::NormalizedText};

pub struct StopwordStrategy {
    tables: Arc<ReferenceTables>,
    languages: Vec<Language>,
    threshold: f64,
    margin: f64,
}

impl StopwordStrategy {
    pub fn new(
        tables: Arc<ReferenceTables>,
        languages: Vec<Language>,
        threshold: f64,
        margin: f64,
    ) -> StopwordStrategy {
        StopwordStrategy {
            tables,
            languages,
            threshold,
            margin,
        }
    }

    fn scores(&self, tokens: &[String]) -> Vec<(Language, f64)> {
        let token_count = tokens.len() as f64;

        self.languages
            .iter()
            .map(|language| {
                let hits = self.tables.stopwords.count_matches(*language, tokens);
                (*language, hits as f64 / token_count)
            })
            .collect()
    }
}

impl DetectionStrategy for StopwordStrategy {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Stopword
    }

    fn classify(&self, text: &NormalizedText) -> Option<DetectionResult> {
        if text.is_empty() {
            return None;
        }

        let ranking = rank(&self.scores(&text.tokens))?;

        debug!(
            "Stopword ranking: {} {:.3} (runner-up {:.3})",
            ranking.best, ranking.best_score, ranking.runner_up_score
        );

        if ranking.best_score <= 0.0
            || ranking.best_score < self.threshold
            || ranking.margin() < self.margin
        {
            return None;
        }

        let confidence = (0.4
            + 0.3 * ranking.best_score
            + 0.3 * ranking.margin() / ranking.best_score)
            * length_factor(text.tokens.len());

        Some(DetectionResult::new(
            ranking.best,
            confidence,
            DetectionMethod::Stopword,
        ))
    }
}

/// Scales confidence down for inputs shorter than a handful of words.
pub fn length_factor(token_count: usize) -> f64 {
    let seen = token_count.min(SHORT_INPUT_TOKENS) as f64;
    0.6 + 0.4 * seen / SHORT_INPUT_TOKENS as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::text_utils::TextNormalizer;

    fn strategy(margin: f64) -> StopwordStrategy {
        StopwordStrategy::new(
            Arc::new(ReferenceTables::load()),
            Language::ALL.to_vec(),
            0.2,
            margin,
        )
    }

    fn normalize(text: &str) -> NormalizedText {
        TextNormalizer::new(1_000).unwrap().normalize(text)
    }

    #[test]
    fn classify_german_sentence() {
        let result = strategy(0.1)
            .classify(&normalize("Ich bin müde und möchte schlafen"))
            .unwrap();

        assert_eq!(result.language, Language::De);
        assert_eq!(result.method, DetectionMethod::Stopword);
        assert!(result.confidence > 0.8);
    }

    #[test]
    fn reject_text_without_function_words() {
        assert!(strategy(0.1)
            .classify(&normalize("Straße Mañana"))
            .is_none());
    }

    #[test]
    fn reject_ambiguous_text_below_margin() {
        assert!(strategy(0.1).classify(&normalize("the der")).is_none());
    }

    #[test]
    fn accept_tie_by_priority_without_margin() {
        let result = strategy(0.0).classify(&normalize("the der")).unwrap();
        assert_eq!(result.language, Language::En);
    }

    #[test]
    fn short_input_degrades_confidence() {
        let strategy = strategy(0.1);
        let short = strategy.classify(&normalize("und")).unwrap();
        let long = strategy
            .classify(&normalize("und ich bin nicht hier"))
            .unwrap();

        assert_eq!(short.language, Language::De);
        assert!(short.confidence < long.confidence);
    }

    #[test]
    fn length_factor_saturates() {
        assert!(length_factor(1) < length_factor(4));
        assert_eq!(length_factor(5), 1.0);
        assert_eq!(length_factor(50), 1.0);
    }
}
