use std::sync::Arc;

use anyhow::Error;
use futures::future::try_join_all;
use log::{info, warn};
use tokio::task;

use crate::models::{
    accuracy_report::{AccuracyReport, Sample, SampleOutcome},
    language::Language,
};
use crate::services::detect_language_service::LanguageDetector;

pub struct AccuracyService {
    detector: Arc<LanguageDetector>,
    acceptance_threshold: f64,
}

impl AccuracyService {
    pub fn new(detector: Arc<LanguageDetector>, acceptance_threshold: f64) -> AccuracyService {
        AccuracyService {
            detector,
            acceptance_threshold,
        }
    }

    pub fn fixture_samples() -> Vec<Sample> {
        vec![
            Sample::new("Hello how are you today", Language::En),
            Sample::new("Hola cómo estás hoy", Language::Es),
            Sample::new("Bonjour comment allez vous", Language::Fr),
            Sample::new("Ich bin müde und möchte schlafen", Language::De),
            Sample::new("Ciao come stai oggi", Language::It),
        ]
    }

    pub async fn evaluate(&self, samples: Vec<Sample>) -> Result<AccuracyReport, Error> {
        let tasks = samples.into_iter().map(|sample| {
            let detector = self.detector.clone();
            let acceptance_threshold = self.acceptance_threshold;

            task::spawn(async move {
                let result = detector.detect(&sample.text);

                SampleOutcome {
                    correct: result.language == sample.expected,
                    accepted: result.confidence >= acceptance_threshold,
                    text: sample.text,
                    expected: sample.expected,
                    result,
                }
            })
        });

        let outcomes = try_join_all(tasks).await?;

        for outcome in &outcomes {
            if outcome.correct {
                info!(
                    "\"{}\" -> {} ({:.2}, {:?})",
                    outcome.text,
                    outcome.result.language,
                    outcome.result.confidence,
                    outcome.result.method
                );
            } else {
                warn!(
                    "\"{}\" -> {} but expected {}",
                    outcome.text, outcome.result.language, outcome.expected
                );
            }
        }

        let report = AccuracyReport::from_outcomes(outcomes);
        info!(
            "Accuracy {:.1}% ({}/{})",
            report.accuracy, report.correct, report.total
        );

        Ok(report)
    }
}
