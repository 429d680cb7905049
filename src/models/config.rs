use anyhow::{anyhow, Error};
use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use super::language::Language;
use crate::utils::consts::{CONFIG_ENV_PREFIX, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub environment: String,
    pub log_level: String,
    pub default_language: Language,
    pub enabled_languages: Vec<Language>,
    pub max_input_chars: usize,
    pub stopword_threshold: f64,
    pub stopword_margin: f64,
    pub diacritic_threshold: f64,
    pub ngram_threshold: f64,
    pub enable_ngram: bool,
    pub fallback_confidence: f64,
    pub acceptance_threshold: f64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            environment: "production".to_string(),
            log_level: "info".to_string(),
            default_language: Language::En,
            enabled_languages: Language::ALL.to_vec(),
            max_input_chars: 10_000,
            stopword_threshold: 0.2,
            stopword_margin: 0.1,
            diacritic_threshold: 1.0,
            ngram_threshold: 0.5,
            enable_ngram: true,
            fallback_confidence: 0.1,
            acceptance_threshold: 0.5,
        }
    }
}

impl Config {
    pub fn load() -> Result<Config, Error> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        Config::figment(&path).extract().map_err(Error::from)
    }

    pub fn figment(path: &str) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Json::file(path))
            .merge(Env::prefixed(CONFIG_ENV_PREFIX))
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.enabled_languages.is_empty() {
            return Err(anyhow!("At least one language must be enabled"));
        }

        if !self.enabled_languages.contains(&self.default_language) {
            return Err(anyhow!(
                "Default language {} is not among the enabled languages",
                self.default_language
            ));
        }

        if self.max_input_chars == 0 {
            return Err(anyhow!("max_input_chars must be greater than zero"));
        }

        let ratios = [
            ("stopword_threshold", self.stopword_threshold),
            ("stopword_margin", self.stopword_margin),
            ("ngram_threshold", self.ngram_threshold),
            ("fallback_confidence", self.fallback_confidence),
            ("acceptance_threshold", self.acceptance_threshold),
        ];

        for (name, value) in ratios.iter() {
            if !(0.0..=1.0).contains(value) {
                return Err(anyhow!("{} must be within [0, 1], got {}", name, value));
            }
        }

        if !(self.diacritic_threshold >= 0.0) {
            return Err(anyhow!(
                "diacritic_threshold must not be negative, got {}",
                self.diacritic_threshold
            ));
        }

        Ok(())
    }

    /// Enabled languages, deduplicated, in tie-break priority order.
    pub fn languages_by_priority(&self) -> Vec<Language> {
        Language::ALL
            .iter()
            .copied()
            .filter(|language| self.enabled_languages.contains(language))
            .collect()
    }
}
