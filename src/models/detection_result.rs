use serde::{Deserialize, Serialize};

use super::language::Language;

pub const MIN_CONFIDENCE: f64 = 0.0;
pub const MAX_CONFIDENCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    Stopword,
    Diacritic,
    Ngram,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub language: Language,
    pub confidence: f64,
    pub method: DetectionMethod,
}

impl DetectionResult {
    pub fn new(language: Language, confidence: f64, method: DetectionMethod) -> DetectionResult {
        DetectionResult {
            language,
            confidence: clamp_confidence(confidence),
            method,
        }
    }

    pub fn fallback(language: Language, confidence: f64) -> DetectionResult {
        DetectionResult::new(language, confidence, DetectionMethod::Fallback)
    }
}

pub fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return MIN_CONFIDENCE;
    }

    confidence.max(MIN_CONFIDENCE).min(MAX_CONFIDENCE)
}
