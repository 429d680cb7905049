pub mod accuracy_report;
pub mod config;
pub mod detection_result;
pub mod language;
