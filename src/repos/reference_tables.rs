use super::{diacritic_repo::DiacriticRepository, stopword_repo::StopwordRepository};

/// Static lookup data shared by every detection strategy. Built once, never mutated.
pub struct ReferenceTables {
    pub stopwords: StopwordRepository,
    pub diacritics: DiacriticRepository,
}

impl ReferenceTables {
    pub fn load() -> ReferenceTables {
        ReferenceTables {
            stopwords: StopwordRepository::new(),
            diacritics: DiacriticRepository::new(),
        }
    }
}
