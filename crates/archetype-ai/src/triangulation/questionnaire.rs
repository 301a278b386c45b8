use super::domain::{MotiveCategory, QuestionnaireAnswers, TraitKind};
use serde::Serialize;

/// Question-id triple backing one behavioral trait.
pub const fn trait_question_ids(kind: TraitKind) -> [&'static str; 3] {
    match kind {
        TraitKind::Openness => ["openness_1", "openness_2", "openness_3"],
        TraitKind::Discipline => ["discipline_1", "discipline_2", "discipline_3"],
        TraitKind::SocialEnergy => ["social_energy_1", "social_energy_2", "social_energy_3"],
        TraitKind::Harmony => ["harmony_1", "harmony_2", "harmony_3"],
        TraitKind::Resilience => ["resilience_1", "resilience_2", "resilience_3"],
    }
}

/// The ten motivational questions and the accumulator each one feeds.
/// `drive_10` deliberately doubles up on the Achiever accumulator so a
/// flat answer sheet still produces a usable near-tie break.
pub const MOTIVATIONAL_QUESTIONS: [(&str, MotiveCategory); 10] = [
    ("drive_1", MotiveCategory::Reformer),
    ("drive_2", MotiveCategory::Helper),
    ("drive_3", MotiveCategory::Achiever),
    ("drive_4", MotiveCategory::Individualist),
    ("drive_5", MotiveCategory::Investigator),
    ("drive_6", MotiveCategory::Loyalist),
    ("drive_7", MotiveCategory::Enthusiast),
    ("drive_8", MotiveCategory::Challenger),
    ("drive_9", MotiveCategory::Peacemaker),
    ("drive_10", MotiveCategory::Achiever),
];

/// Every question id a complete questionnaire must answer, in the
/// order clients render them.
pub fn required_question_ids() -> Vec<&'static str> {
    let mut ids = Vec::with_capacity(25);
    for kind in TraitKind::ordered() {
        ids.extend(trait_question_ids(kind));
    }
    ids.extend(MOTIVATIONAL_QUESTIONS.iter().map(|(id, _)| *id));
    ids
}

/// Completeness report for a (possibly partial) answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub is_complete: bool,
    pub missing_question_ids: Vec<String>,
    pub completion_percentage: u8,
}

/// Checks `answers` against the fixed required-question set.
///
/// This is caller policy, not an engine precondition: the pipeline
/// itself degrades unanswered questions to the neutral option, so a
/// collaborator may choose to run a partial sheet anyway.
pub fn validate_completeness(answers: &QuestionnaireAnswers) -> CompletenessReport {
    let required = required_question_ids();
    let missing_question_ids: Vec<String> = required
        .iter()
        .filter(|id| !answers.contains_key(**id))
        .map(|id| (*id).to_string())
        .collect();

    let answered = required.len() - missing_question_ids.len();
    let completion_percentage =
        ((answered as f64 / required.len() as f64) * 100.0).round() as u8;

    CompletenessReport {
        is_complete: missing_question_ids.is_empty(),
        missing_question_ids,
        completion_percentage,
    }
}
