pub mod models;
pub mod repos;
pub mod services;
pub mod strategies;
pub mod utils;

pub use models::detection_result::{DetectionMethod, DetectionResult};
pub use models::language::Language;
pub use services::detect_language_service::LanguageDetector;
