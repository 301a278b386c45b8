mod calendar;
mod cognitive;
mod motivational;
mod traits;

pub use calendar::read_calendar;
pub use cognitive::parse_cognitive_type;
pub use motivational::classify_motivation;
pub use traits::score_traits;

use super::domain::{CalendarReading, CognitiveType, MotivationalType, QuestionnaireAnswers, TraitScores};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four independent framework score sets produced by stage one.
///
/// The cognitive-type framework is the only one that can be entirely
/// absent; downstream predicates must treat `None` as "no support",
/// never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkScores {
    pub traits: TraitScores,
    pub cognitive: Option<CognitiveType>,
    pub motivational: MotivationalType,
    pub calendar: CalendarReading,
}

impl FrameworkScores {
    /// Computes all four framework score sets from the raw inputs.
    ///
    /// `birth_date` is already parsed; rejecting an unparseable date is
    /// the caller's responsibility. Unanswered questions default to the
    /// neutral option, so a partial sheet degrades toward neutral
    /// scores instead of failing.
    pub fn compute(
        answers: &QuestionnaireAnswers,
        birth_date: NaiveDate,
        type_code: Option<&str>,
        birth_time: Option<&str>,
    ) -> Self {
        Self {
            traits: score_traits(answers),
            cognitive: type_code.and_then(parse_cognitive_type),
            motivational: classify_motivation(answers),
            calendar: read_calendar(birth_date, birth_time),
        }
    }
}
