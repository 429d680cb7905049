use crate::models::{
    detection_result::{DetectionMethod, DetectionResult},
    language::Language,
};
use crate::utils::text_utils::NormalizedText;

pub mod diacritic_strategy;
pub mod ngram_strategy;
pub mod stopword_strategy;

/// One tier of the detection cascade. Returns `None` when its evidence does not
/// clear its own threshold.
pub trait DetectionStrategy: Send + Sync {
    fn method(&self) -> DetectionMethod;

    fn classify(&self, text: &NormalizedText) -> Option<DetectionResult>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranking {
    pub best: Language,
    pub best_score: f64,
    pub runner_up_score: f64,
    pub total_score: f64,
}

impl Ranking {
    pub fn margin(&self) -> f64 {
        self.best_score - self.runner_up_score
    }
}

/// Picks the highest score. `scores` must be in priority order: a later entry only
/// replaces the leader with a strictly greater score.
pub fn rank(scores: &[(Language, f64)]) -> Option<Ranking> {
    let (first, rest) = scores.split_first()?;

    let mut ranking = Ranking {
        best: first.0,
        best_score: first.1,
        runner_up_score: 0.0,
        total_score: first.1,
    };

    for (language, score) in rest {
        ranking.total_score += score;

        if *score > ranking.best_score {
            ranking.runner_up_score = ranking.best_score;
            ranking.best = *language;
            ranking.best_score = *score;
        } else if *score > ranking.runner_up_score {
            ranking.runner_up_score = *score;
        }
    }

    Some(ranking)
}

#[cfg(test)]
mod tests {
    use super::rank;
    use crate::models::language::Language;

    #[test]
    fn rank_empty_scores() {
        assert!(rank(&[]).is_none());
    }

    #[test]
    fn rank_picks_highest_and_tracks_runner_up() {
        let ranking = rank(&[
            (Language::En, 0.1),
            (Language::Es, 0.5),
            (Language::Fr, 0.3),
        ])
        .unwrap();

        assert_eq!(ranking.best, Language::Es);
        assert_eq!(ranking.best_score, 0.5);
        assert_eq!(ranking.runner_up_score, 0.3);
        assert!((ranking.total_score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn ties_resolve_to_earlier_language() {
        let ranking = rank(&[
            (Language::En, 0.5),
            (Language::De, 0.5),
            (Language::Nl, 0.5),
        ])
        .unwrap();

        assert_eq!(ranking.best, Language::En);
        assert_eq!(ranking.margin(), 0.0);
    }
}
