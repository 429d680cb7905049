use std::collections::{HashMap, HashSet};

use crate::models::language::Language;

const ENGLISH: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "of", "to", "in", "on", "at", "for", "with", "from",
    "by", "about", "as", "is", "are", "was", "were", "be", "been", "am", "do", "does", "did",
    "have", "has", "had", "will", "would", "can", "could", "should", "i", "you", "he", "she",
    "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our",
    "their", "this", "that", "these", "those", "what", "which", "who", "how", "why", "when",
    "where", "not", "yes", "there", "here", "so", "if", "than", "then", "very", "just", "hello",
    "today",
];

const SPANISH: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "y", "o", "pero", "de", "del", "al",
    "a", "en", "con", "por", "para", "sin", "sobre", "que", "qué", "como", "cómo", "es", "son",
    "está", "están", "estás", "estoy", "soy", "eres", "ser", "estar", "hay", "muy", "yo", "tú",
    "él", "ella", "nosotros", "ellos", "usted", "mi", "tu", "su", "sus", "me", "te", "se", "lo",
    "le", "les", "nos", "no", "sí", "este", "esta", "eso", "esto", "cuando", "donde", "dónde",
    "hoy", "hola", "también", "más",
];

const FRENCH: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "et", "ou", "mais", "à", "au", "aux",
    "en", "dans", "sur", "pour", "par", "avec", "sans", "que", "qui", "quoi", "ne", "pas", "je",
    "tu", "il", "elle", "nous", "vous", "ils", "elles", "on", "me", "te", "se", "mon", "ton",
    "son", "ma", "ta", "sa", "mes", "ce", "cette", "ces", "est", "sont", "suis", "être", "avoir",
    "ai", "comment", "allez", "va", "très", "bonjour", "oui", "non", "l", "d", "j", "c", "qu",
    "n", "aujourd", "hui",
];

const GERMAN: &[&str] = &[
    "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem", "einer", "und",
    "oder", "aber", "in", "im", "an", "auf", "mit", "von", "zu", "zum", "zur", "für", "bei",
    "nach", "aus", "über", "ich", "du", "er", "sie", "es", "wir", "ihr", "mich", "mir", "dich",
    "dir", "uns", "sich", "mein", "dein", "sein", "nicht", "kein", "keine", "ist", "bin", "bist",
    "sind", "war", "hat", "habe", "haben", "wird", "werden", "möchte", "kann", "auch", "noch",
    "sehr", "wie", "was", "wer", "wo", "heute", "hallo", "ja", "nein", "schon", "nur",
];

const ITALIAN: &[&str] = &[
    "il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "e", "ed", "o", "ma", "di", "del",
    "della", "dei", "a", "al", "alla", "da", "in", "nel", "nella", "con", "su", "per", "tra",
    "fra", "che", "chi", "come", "cosa", "non", "sì", "io", "tu", "lui", "lei", "noi", "voi",
    "loro", "mi", "ti", "ci", "si", "vi", "mio", "tuo", "suo", "è", "sono", "sei", "siamo", "ha",
    "ho", "hai", "hanno", "stai", "sta", "sto", "molto", "anche", "oggi", "ciao", "questo",
    "questa", "quello", "dove", "quando", "perché",
];

const PORTUGUESE: &[&str] = &[
    "o", "a", "os", "as", "um", "uma", "e", "ou", "mas", "de", "do", "da", "dos", "das", "em",
    "no", "na", "nos", "nas", "com", "por", "para", "sem", "que", "como", "não", "sim", "eu",
    "você", "ele", "ela", "nós", "eles", "meu", "seu", "sua", "é", "são", "está", "estou",
    "estão", "ser", "ter", "tem", "foi", "muito", "também", "hoje", "olá", "isso", "este",
    "esta", "onde", "quando", "mais",
];

const DUTCH: &[&str] = &[
    "de", "het", "een", "en", "of", "maar", "van", "in", "op", "aan", "met", "voor", "naar",
    "bij", "uit", "over", "door", "om", "ik", "jij", "je", "hij", "zij", "ze", "wij", "we",
    "jullie", "mij", "me", "mijn", "jouw", "zijn", "haar", "ons", "niet", "geen", "is", "ben",
    "bent", "was", "waren", "heb", "hebt", "heeft", "hebben", "wordt", "worden", "kan", "wil",
    "ook", "nog", "heel", "hoe", "wat", "wie", "waar", "vandaag", "hallo", "ja", "nee", "dit",
    "dat", "die", "deze", "er", "te", "al",
];

pub struct StopwordRepository {
    stopwords: HashMap<Language, HashSet<&'static str>>,
}

impl StopwordRepository {
    pub fn new() -> StopwordRepository {
        let stopwords = Language::ALL
            .iter()
            .map(|language| {
                let words = StopwordRepository::words_for(*language)
                    .iter()
                    .copied()
                    .collect::<HashSet<&'static str>>();

                (*language, words)
            })
            .collect();

        StopwordRepository { stopwords }
    }

    pub fn is_stopword(&self, language: Language, word: &str) -> bool {
        self.stopwords
            .get(&language)
            .map(|words| words.contains(word))
            .unwrap_or(false)
    }

    pub fn count_matches(&self, language: Language, tokens: &[String]) -> usize {
        tokens
            .iter()
            .filter(|token| self.is_stopword(language, token))
            .count()
    }

    fn words_for(language: Language) -> &'static [&'static str] {
        match language {
            Language::En => ENGLISH,
            Language::Es => SPANISH,
            Language::Fr => FRENCH,
            Language::De => GERMAN,
            Language::It => ITALIAN,
            Language::Pt => PORTUGUESE,
            Language::Nl => DUTCH,
        }
    }
}

impl Default for StopwordRepository {
    fn default() -> StopwordRepository {
        StopwordRepository::new()
    }
}

#[cfg(test)]
mod tests {
    use super::StopwordRepository;
    use crate::models::language::Language;

    #[test]
    fn every_language_has_a_table() {
        let repo = StopwordRepository::new();
        let articles = ["the", "el", "le", "der", "il", "os", "het"];

        for (language, article) in Language::ALL.iter().zip(articles.iter()) {
            assert!(repo.is_stopword(*language, article), "{}", language);
        }
    }

    #[test]
    fn lookups_are_accent_sensitive() {
        let repo = StopwordRepository::new();

        assert!(repo.is_stopword(Language::Es, "cómo"));
        assert!(repo.is_stopword(Language::Pt, "como"));
        assert!(!repo.is_stopword(Language::Pt, "cómo"));
        assert!(repo.is_stopword(Language::De, "möchte"));
    }

    #[test]
    fn count_matching_tokens() {
        let repo = StopwordRepository::new();
        let tokens: Vec<String> = ["ich", "bin", "müde", "und", "möchte", "schlafen"]
            .iter()
            .map(|t| t.to_string())
            .collect();

        assert_eq!(repo.count_matches(Language::De, &tokens), 4);
        assert_eq!(repo.count_matches(Language::Nl, &tokens), 0);
    }
}
