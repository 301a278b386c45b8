use super::domain::QuestionnaireAnswers;
use super::frameworks::FrameworkScores;
use super::matching::{self, CategoryMatch, MatchOutcome};
use super::patterns::{self, DetectedPatterns};
use super::report;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Full output of one pipeline run. Created fresh per invocation;
/// nothing in here is shared with or mutated by later runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriangulationResult {
    pub display_name: String,
    pub primary: CategoryMatch,
    pub secondary: CategoryMatch,
    pub tertiary: CategoryMatch,
    pub all_matches: Vec<CategoryMatch>,
    pub frameworks: FrameworkScores,
    pub detected_patterns: DetectedPatterns,
    pub explanation: String,
    pub framework_summary: String,
}

/// Stateless orchestrator for the four-stage pipeline.
///
/// Completeness checking is deliberately not part of [`Self::run`]: the
/// caller decides whether a partial sheet is acceptable (see
/// [`super::validate_completeness`]) and the engine degrades missing
/// answers to the neutral option.
#[derive(Debug, Default)]
pub struct TriangulationEngine;

impl TriangulationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn run(
        &self,
        answers: &QuestionnaireAnswers,
        birth_date: NaiveDate,
        display_name: &str,
        type_code: Option<&str>,
        birth_time: Option<&str>,
    ) -> TriangulationResult {
        let frameworks = FrameworkScores::compute(answers, birth_date, type_code, birth_time);
        debug!(
            motivational_core = frameworks.motivational.core.label(),
            primary_sign = frameworks.calendar.primary.sign.label(),
            has_cognitive = frameworks.cognitive.is_some(),
            "framework scores computed"
        );

        let detected = patterns::detect(&frameworks);
        debug!(pattern_count = detected.len(), "patterns detected");

        let MatchOutcome {
            primary,
            secondary,
            tertiary,
            all_matches,
        } = matching::rank(&detected);

        let explanation = report::build_explanation(display_name, &primary, &detected);
        let framework_summary = report::build_framework_summary(&frameworks.traits);

        TriangulationResult {
            display_name: display_name.to_string(),
            primary,
            secondary,
            tertiary,
            all_matches,
            frameworks,
            detected_patterns: detected,
            explanation,
            framework_summary,
        }
    }
}
