//! Four-stage cultural-code triangulation pipeline.
//!
//! Stage order: framework scoring, cross-framework pattern detection,
//! category matching, result assembly. Every stage is a pure function
//! over fixed in-memory catalogues; nothing here performs I/O or holds
//! state between invocations.

pub mod domain;
pub mod engine;
pub mod frameworks;
pub mod matching;
pub mod patterns;
pub mod questionnaire;
pub mod report;

pub use domain::{AnswerChoice, QuestionnaireAnswers};
pub use engine::{TriangulationEngine, TriangulationResult};
pub use frameworks::FrameworkScores;
pub use matching::{CategoryMatch, ConfidenceTier, MatchOutcome};
pub use patterns::{DetectedPattern, DetectedPatterns};
pub use questionnaire::{validate_completeness, CompletenessReport};

/// Faults in caller-supplied input, surfaced before the pipeline runs.
///
/// The pipeline itself is infallible: a parsed `NaiveDate` cannot be
/// invalid, unanswered questions degrade to the neutral option, and a
/// malformed cognitive-type code is treated as absent.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("'{raw}' is not a valid calendar date (expected YYYY-MM-DD)")]
    InvalidBirthDate { raw: String },
    #[error("questionnaire incomplete: {} question(s) unanswered", missing.len())]
    IncompleteQuestionnaire { missing: Vec<String> },
}
