use log::debug;
use whatlang::Detector;

use super::DetectionStrategy;
use crate::models::{
    detection_result::{DetectionMethod, DetectionResult},
    language::Language,
};
use crate::utils::text_utils::NormalizedText;

/// Trigram statistics through whatlang, restricted to the enabled languages.
pub struct NgramStrategy {
    detector: Detector,
    threshold: f64,
}

impl NgramStrategy {
    pub fn new(languages: &[Language], threshold: f64) -> NgramStrategy {
        let allowlist = languages.iter().map(|language| language.to_whatlang()).collect();

        NgramStrategy {
            detector: Detector::with_allowlist(allowlist),
            threshold,
        }
    }
}

impl DetectionStrategy for NgramStrategy {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Ngram
    }

    fn classify(&self, text: &NormalizedText) -> Option<DetectionResult> {
        if text.is_empty() {
            return None;
        }

        let info = self.detector.detect(&text.tokens.join(" "))?;
        let language = Language::from_whatlang(info.lang())?;

        debug!(
            "Ngram guess: {} {:.3} (reliable: {})",
            language,
            info.confidence(),
            info.is_reliable()
        );

        if info.is_reliable() == false || info.confidence() < self.threshold {
            return None;
        }

        Some(DetectionResult::new(
            language,
            info.confidence(),
            DetectionMethod::Ngram,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::text_utils::TextNormalizer;

    fn normalize(text: &str) -> NormalizedText {
        TextNormalizer::new(1_000).unwrap().normalize(text)
    }

    const GERMAN_HEADLINES: &str = "Bundesregierung plant neue Verkehrsregeln fuer \
        Autobahnen, Stadtverwaltung meldet Rekordumsatz beim Wohnungsbau, Feuerwehr \
        bekommt neue Fahrzeuge, Polizei erhaelt mehr Personal";

    #[test]
    fn answer_with_enabled_language() {
        let strategy = NgramStrategy::new(&[Language::En, Language::De], 0.5);
        let result = strategy.classify(&normalize(GERMAN_HEADLINES)).unwrap();

        assert_eq!(result.language, Language::De);
        assert_eq!(result.method, DetectionMethod::Ngram);
        assert!(result.confidence >= 0.5);
    }

    #[test]
    fn reject_unreliable_guess() {
        let strategy = NgramStrategy::new(&Language::ALL, 0.0);
        let text = normalize("Wonderful weather yesterday evening everywhere");

        assert!(strategy.classify(&text).is_none());
    }

    #[test]
    fn skip_empty_text() {
        let strategy = NgramStrategy::new(&Language::ALL, 0.0);
        assert!(strategy.classify(&normalize(" 42 ")).is_none());
    }
}
