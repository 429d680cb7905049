use crate::models::language::Language;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub pattern: &'static str,
    pub weight: f64,
}

const fn marker(pattern: &'static str, weight: f64) -> Marker {
    Marker { pattern, weight }
}

const ENGLISH: &[Marker] = &[marker("th", 0.1), marker("wh", 0.25)];

const SPANISH: &[Marker] = &[
    marker("ñ", 2.0),
    marker("¿", 2.0),
    marker("¡", 2.0),
    marker("ción", 1.5),
    marker("á", 0.5),
    marker("í", 0.5),
    marker("ó", 0.5),
    marker("ú", 0.5),
];

const FRENCH: &[Marker] = &[
    marker("œ", 2.0),
    marker("ç", 1.0),
    marker("è", 1.0),
    marker("ê", 1.0),
    marker("â", 0.75),
    marker("î", 1.0),
    marker("ô", 1.0),
    marker("û", 1.0),
    marker("ë", 1.0),
    marker("ï", 1.0),
    marker("eau", 1.0),
    marker("é", 0.5),
    marker("à", 0.5),
];

const GERMAN: &[Marker] = &[
    marker("ß", 2.0),
    marker("ä", 1.0),
    marker("ö", 1.0),
    marker("ü", 1.0),
    marker("sch", 0.5),
];

const ITALIAN: &[Marker] = &[
    marker("ò", 1.0),
    marker("ì", 1.0),
    marker("ù", 1.0),
    marker("zz", 0.75),
    marker("cch", 1.0),
    marker("gli", 0.75),
    marker("è", 0.5),
    marker("à", 0.5),
];

const PORTUGUESE: &[Marker] = &[
    marker("ã", 2.0),
    marker("õ", 2.0),
    marker("ção", 1.5),
    marker("ç", 1.0),
    marker("lh", 0.5),
    marker("nh", 0.5),
    marker("ê", 0.5),
    marker("â", 0.5),
];

const DUTCH: &[Marker] = &[
    marker("ij", 1.0),
    marker("uu", 0.75),
    marker("aa", 0.75),
    marker("oe", 0.25),
];

pub struct DiacriticRepository;

impl DiacriticRepository {
    pub fn new() -> DiacriticRepository {
        DiacriticRepository
    }

    pub fn markers(&self, language: Language) -> &'static [Marker] {
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

    /// Sum of marker weights, each marker counted at most once per word.
    pub fn score(&self, language: Language, text: &str) -> f64 {
        let markers = self.markers(language);

        text.split_whitespace()
            .map(|word| {
                markers
                    .iter()
                    .filter(|marker| word.contains(marker.pattern))
                    .map(|marker| marker.weight)
                    .sum::<f64>()
            })
            .sum()
    }
}

impl Default for DiacriticRepository {
    fn default() -> DiacriticRepository {
        DiacriticRepository::new()
    }
}
