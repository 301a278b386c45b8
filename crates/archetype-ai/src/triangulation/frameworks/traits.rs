use crate::triangulation::domain::{AnswerChoice, QuestionnaireAnswers, TraitKind, TraitScores};
use crate::triangulation::questionnaire::trait_question_ids;

/// Scores the five behavioral traits from their question triples.
///
/// Each answer maps through the fixed {0 -> 20, 1 -> 50, 2 -> 80}
/// scale; the triple is averaged, rounded, and clamped to [0, 100].
pub fn score_traits(answers: &QuestionnaireAnswers) -> TraitScores {
    TraitScores {
        openness: trait_score(answers, TraitKind::Openness),
        discipline: trait_score(answers, TraitKind::Discipline),
        social_energy: trait_score(answers, TraitKind::SocialEnergy),
        harmony: trait_score(answers, TraitKind::Harmony),
        resilience: trait_score(answers, TraitKind::Resilience),
    }
}

fn trait_score(answers: &QuestionnaireAnswers, kind: TraitKind) -> u8 {
    let ids = trait_question_ids(kind);
    let total: u16 = ids
        .iter()
        .map(|id| {
            answers
                .get(*id)
                .copied()
                .unwrap_or(AnswerChoice::Neutral)
                .scale_points()
        })
        .sum();

    let average = (total as f64 / ids.len() as f64).round();
    average.clamp(0.0, 100.0) as u8
}
