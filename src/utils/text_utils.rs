use anyhow::Error;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedText {
    /// Lower-cased and truncated, punctuation kept.
    pub text: String,
    pub tokens: Vec<String>,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

pub struct TextNormalizer {
    word_regex: Regex,
    max_chars: usize,
}

impl TextNormalizer {
    pub fn new(max_chars: usize) -> Result<TextNormalizer, Error> {
        Ok(TextNormalizer {
            word_regex: Regex::new(r"\p{L}+")?,
            max_chars,
        })
    }

    pub fn normalize(&self, text: &str) -> NormalizedText {
        let sanitized: String = text
            .chars()
            .take(self.max_chars)
            .nfc()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();

        let lowered = sanitized.to_lowercase();
        let tokens = self.tokenize(&lowered);

        NormalizedText {
            text: lowered,
            tokens,
        }
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        self.word_regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::TextNormalizer;

    #[test]
    fn strip_punctuation_and_digits_but_keep_diacritics() {
        let normalizer = TextNormalizer::new(100).unwrap();
        let normalized = normalizer.normalize("¿Cómo ESTÁS? 42 veces, ¡señor!");

        assert_eq!(normalized.tokens, vec!["cómo", "estás", "veces", "señor"]);
        assert!(normalized.text.starts_with("¿cómo"));
    }

    #[test]
    fn split_elided_french_articles() {
        let normalizer = TextNormalizer::new(100).unwrap();
        let normalized = normalizer.normalize("L'homme d'affaires");

        assert_eq!(normalized.tokens, vec!["l", "homme", "d", "affaires"]);
    }

    #[test]
    fn whitespace_only_input_has_no_tokens() {
        let normalizer = TextNormalizer::new(100).unwrap();

        assert!(normalizer.normalize("   \t\n ").is_empty());
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("123 ... !!!").is_empty());
    }

    #[test]
    fn truncate_long_input() {
        let normalizer = TextNormalizer::new(11).unwrap();
        let normalized = normalizer.normalize("hello world and more words");

        assert_eq!(normalized.text, "hello world");
        assert_eq!(normalized.tokens, vec!["hello", "world"]);
    }

    #[test]
    fn compose_decomposed_diacritics() {
        let normalizer = TextNormalizer::new(100).unwrap();
        let decomposed = normalizer.normalize("mu\u{308}de man\u{303}ana");
        let composed = normalizer.normalize("müde mañana");

        assert_eq!(decomposed, composed);
        assert_eq!(decomposed.tokens, vec!["müde", "mañana"]);
    }

    #[test]
    fn replace_control_characters() {
        let normalizer = TextNormalizer::new(100).unwrap();
        let normalized = normalizer.normalize("ich\u{0}bin\u{7}da");

        assert_eq!(normalized.tokens, vec!["ich", "bin", "da"]);
    }
}
