pub mod accuracy_service;
pub mod detect_language_service;
