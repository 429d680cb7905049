use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Nl,
}

impl Language {
    /// Every supported language in tie-break priority order.
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Pt,
        Language::Nl,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Nl => "nl",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
            Language::It => "Italian",
            Language::Pt => "Portuguese",
            Language::Nl => "Dutch",
        }
    }

    pub fn to_whatlang(&self) -> whatlang::Lang {
        match self {
            Language::En => whatlang::Lang::Eng,
            Language::Es => whatlang::Lang::Spa,
            Language::Fr => whatlang::Lang::Fra,
            Language::De => whatlang::Lang::Deu,
            Language::It => whatlang::Lang::Ita,
            Language::Pt => whatlang::Lang::Por,
            Language::Nl => whatlang::Lang::Nld,
        }
    }

    pub fn from_whatlang(lang: whatlang::Lang) -> Option<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.to_whatlang() == lang)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();

        Language::ALL
            .iter()
            .copied()
            .find(|language| {
                language.code() == needle || language.name().to_lowercase() == needle
            })
            .ok_or_else(|| anyhow!("Unsupported language: {}", s))
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
