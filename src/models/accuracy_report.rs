use serde::{Deserialize, Serialize};

use super::{detection_result::DetectionResult, language::Language};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub text: String,
    pub expected: Language,
}

impl Sample {
    pub fn new(text: &str, expected: Language) -> Sample {
        Sample {
            text: text.to_string(),
            expected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleOutcome {
    pub text: String,
    pub expected: Language,
    pub result: DetectionResult,
    pub correct: bool,
    pub accepted: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyReport {
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub outcomes: Vec<SampleOutcome>,
}

impl AccuracyReport {
    pub fn from_outcomes(outcomes: Vec<SampleOutcome>) -> AccuracyReport {
        let total = outcomes.len();
        let correct = outcomes.iter().filter(|outcome| outcome.correct).count();

        AccuracyReport {
            total,
            correct,
            accuracy: accuracy_percent(correct, total),
            outcomes,
        }
    }
}

pub fn accuracy_percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    correct as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::detection_result::DetectionMethod;

    fn outcome(expected: Language, detected: Language) -> SampleOutcome {
        SampleOutcome {
            text: "text".to_string(),
            expected,
            result: DetectionResult::new(detected, 0.9, DetectionMethod::Stopword),
            correct: expected == detected,
            accepted: true,
        }
    }

    #[test]
    fn accuracy_of_empty_report_is_zero() {
        let report = AccuracyReport::from_outcomes(vec![]);
        assert_eq!(report.total, 0);
        assert_eq!(report.accuracy, 0.0);
    }

    #[test]
    fn accuracy_is_correct_over_total_in_percent() {
        let report = AccuracyReport::from_outcomes(vec![
            outcome(Language::En, Language::En),
            outcome(Language::Fr, Language::Fr),
            outcome(Language::De, Language::Nl),
            outcome(Language::It, Language::It),
        ]);

        assert_eq!(report.total, 4);
        assert_eq!(report.correct, 3);
        assert_eq!(report.accuracy, 75.0);
    }

    #[test]
    fn serialize_report_in_camel_case() {
        let report = AccuracyReport::from_outcomes(vec![outcome(Language::Es, Language::Es)]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["accuracy"], 100.0);
        assert_eq!(json["outcomes"][0]["expected"], "es");
        assert_eq!(json["outcomes"][0]["result"]["method"], "stopword");
    }
}
