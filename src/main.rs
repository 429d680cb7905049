use std::env;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::anyhow;
use language_detector::{
    models::{config::Config, detection_result::DetectionResult},
    repos::reference_tables::ReferenceTables,
    services::{accuracy_service::AccuracyService, detect_language_service::LanguageDetector},
    utils::consts::DEVELOPMENT,
};
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;
use tokio::sync::mpsc::{channel, Receiver, Sender};
use tokio::task;

#[tokio::main]
pub async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    let level = LevelFilter::from_str(&config.log_level).ok();
    SimpleLogger::new()
        .with_level(level.unwrap_or(LevelFilter::Info))
        .init()?;

    if level.is_none() {
        warn!("Unknown log level {}, using info", config.log_level);
    }

    info!("Loading reference tables");

    let tables = Arc::new(ReferenceTables::load());
    let detector = Arc::new(LanguageDetector::new(&config, tables)?);

    info!(
        "Language detector ready, default language {}",
        detector.default_language()
    );

    let texts: Vec<String> = env::args().skip(1).collect();

    if texts.is_empty() {
        run_fixture(detector, &config).await
    } else {
        detect_texts(detector, texts).await
    }
}

async fn run_fixture(
    detector: Arc<LanguageDetector>,
    config: &Config,
) -> Result<(), anyhow::Error> {
    let accuracy_service = AccuracyService::new(detector, config.acceptance_threshold);
    let report = accuracy_service
        .evaluate(AccuracyService::fixture_samples())
        .await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if config.environment.eq(DEVELOPMENT) && report.correct < report.total {
        return Err(anyhow!(
            "Fixture accuracy is {:.1}%, expected 100%",
            report.accuracy
        ));
    }

    Ok(())
}

async fn detect_texts(
    detector: Arc<LanguageDetector>,
    texts: Vec<String>,
) -> Result<(), anyhow::Error> {
    let total = texts.len();
    let (tx, mut rx): (Sender<(usize, DetectionResult)>, Receiver<(usize, DetectionResult)>) =
        channel(32);

    let mut tasks = vec![];

    for (index, text) in texts.into_iter().enumerate() {
        let detector = detector.clone();
        let tx = tx.clone();

        tasks.push(task::spawn(async move {
            let result = detector.detect(&text);
            tx.send((index, result)).await
        }));
    }

    drop(tx);

    let mut results: Vec<Option<DetectionResult>> = vec![None; total];
    while let Some((index, result)) = rx.recv().await {
        results[index] = Some(result);
    }

    for task in tasks {
        task.await??;
    }

    for result in results.into_iter().flatten() {
        println!("{}", serde_json::to_string(&result)?);
    }

    Ok(())
}
