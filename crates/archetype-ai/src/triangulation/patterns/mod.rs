mod catalog;

pub use catalog::{pattern_catalog, PatternDefinition};

use super::frameworks::FrameworkScores;
use serde::Serialize;
use std::collections::BTreeMap;

/// Minimum weighted confidence a pattern needs to be registered at
/// all. A hard cut, not a shaping function.
const CONFIDENCE_FLOOR: f64 = 0.5;

/// Framework weights applied when a cognitive-type code was supplied.
const WEIGHTS_WITH_COGNITIVE: FrameworkWeights = FrameworkWeights {
    traits: 0.45,
    motivational: 0.25,
    cognitive: 0.15,
    calendar: 0.15,
};

/// Weights when no code was supplied: the cognitive share is
/// redistributed across the remaining frameworks, never dropped.
const WEIGHTS_WITHOUT_COGNITIVE: FrameworkWeights = FrameworkWeights {
    traits: 0.50,
    motivational: 0.30,
    cognitive: 0.0,
    calendar: 0.20,
};

struct FrameworkWeights {
    traits: f64,
    motivational: f64,
    cognitive: f64,
    calendar: f64,
}

/// Which framework predicates fired for a detected pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameworkSupport {
    pub traits: bool,
    pub cognitive: bool,
    pub motivational: bool,
    pub calendar: bool,
}

impl FrameworkSupport {
    /// Human-readable names of the frameworks that fired, in a fixed
    /// order.
    pub fn supporting_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.traits {
            names.push("behavioral traits");
        }
        if self.motivational {
            names.push("motivational type");
        }
        if self.cognitive {
            names.push("cognitive type");
        }
        if self.calendar {
            names.push("calendar reading");
        }
        names
    }
}

/// A behavioral pattern that survived the anchor requirement and the
/// confidence floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedPattern {
    pub id: &'static str,
    pub name: &'static str,
    pub confidence: f64,
    pub support: FrameworkSupport,
}

/// Detected patterns keyed by id. A `BTreeMap` keeps iteration order
/// deterministic for downstream scoring and serialization.
pub type DetectedPatterns = BTreeMap<&'static str, DetectedPattern>;

/// Evaluates the full pattern catalogue against the framework scores.
///
/// A pattern is only registered when (1) its trait or motivational
/// predicate fired (the behavioral anchor: calendar and cognitive
/// signals alone are never sufficient evidence) and (2) the weighted
/// confidence of the fired frameworks reaches the floor.
pub fn detect(scores: &FrameworkScores) -> DetectedPatterns {
    let weights = if scores.cognitive.is_some() {
        &WEIGHTS_WITH_COGNITIVE
    } else {
        &WEIGHTS_WITHOUT_COGNITIVE
    };

    let mut detected = DetectedPatterns::new();
    for definition in pattern_catalog() {
        let support = FrameworkSupport {
            traits: (definition.traits)(&scores.traits),
            cognitive: scores
                .cognitive
                .as_ref()
                .map(|cognitive| (definition.cognitive)(cognitive))
                .unwrap_or(false),
            motivational: (definition.motivational)(&scores.motivational),
            calendar: (definition.calendar)(&scores.calendar),
        };

        if !support.traits && !support.motivational {
            continue;
        }

        let mut confidence = 0.0;
        if support.traits {
            confidence += weights.traits;
        }
        if support.motivational {
            confidence += weights.motivational;
        }
        if support.cognitive {
            confidence += weights.cognitive;
        }
        if support.calendar {
            confidence += weights.calendar;
        }

        if confidence >= CONFIDENCE_FLOOR {
            detected.insert(
                definition.id,
                DetectedPattern {
                    id: definition.id,
                    name: definition.name,
                    confidence,
                    support,
                },
            );
        }
    }
    detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulation::domain::{
        AnswerChoice, MotivationalType, MotiveCategory, QuestionnaireAnswers, TraitScores,
    };
    use crate::triangulation::frameworks::{parse_cognitive_type, read_calendar};
    use chrono::NaiveDate;

    fn neutral_traits() -> TraitScores {
        TraitScores {
            openness: 50,
            discipline: 50,
            social_energy: 50,
            harmony: 50,
            resilience: 50,
        }
    }

    fn motivation(core: MotiveCategory) -> MotivationalType {
        let mut accumulators = [0u16; 9];
        accumulators[(core.number() - 1) as usize] = 10;
        let (prev, _) = core.neighbors();
        MotivationalType {
            core,
            wing: prev,
            accumulators,
        }
    }

    fn scores(
        traits: TraitScores,
        cognitive_code: Option<&str>,
        core: MotiveCategory,
        birth: (i32, u32, u32),
    ) -> FrameworkScores {
        let date = NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).expect("valid date");
        FrameworkScores {
            traits,
            cognitive: cognitive_code.and_then(parse_cognitive_type),
            motivational: motivation(core),
            calendar: read_calendar(date, None),
        }
    }

    #[test]
    fn trait_support_alone_meets_the_floor_without_code() {
        let mut traits = neutral_traits();
        traits.discipline = 80;
        // Aquarius primary keeps the structured_execution calendar
        // predicate (Cardinal or Earth) from firing.
        let scores = scores(traits, None, MotiveCategory::Peacemaker, (1991, 2, 10));

        let detected = detect(&scores);
        let pattern = detected
            .get("structured_execution")
            .expect("trait anchor alone registers");
        assert!((pattern.confidence - 0.50).abs() < 1e-9);
        assert!(pattern.support.traits);
        assert!(!pattern.support.calendar);
    }

    #[test]
    fn unanchored_patterns_never_register() {
        // Empathic ESFJ with a watery chart, but neutral traits and a
        // non-matching motivational core: empathic_attunement must not
        // appear no matter how hard cognitive + calendar fire.
        let scores = scores(
            neutral_traits(),
            Some("ESFJ"),
            MotiveCategory::Achiever,
            (1990, 7, 10),
        );
        let detected = detect(&scores);
        assert!(!detected.contains_key("empathic_attunement"));
    }

    #[test]
    fn weights_redistribute_when_code_is_absent() {
        let mut traits = neutral_traits();
        traits.harmony = 80;
        // Cancer primary fires the empathic_attunement calendar
        // predicate; motivational core Helper fires too.
        let with_code = scores(traits, Some("ISTJ"), MotiveCategory::Helper, (1990, 7, 10));
        let without_code = scores(traits, None, MotiveCategory::Helper, (1990, 7, 10));

        let with_code = detect(&with_code);
        let without_code = detect(&without_code);

        // ISTJ's judgment is Analytical, so the cognitive predicate
        // does not fire: 0.45 + 0.25 + 0.15.
        let fired = with_code.get("empathic_attunement").expect("registered");
        assert!((fired.confidence - 0.85).abs() < 1e-9);

        // Without a code the same support set weighs 0.50 + 0.30 + 0.20.
        let fired = without_code.get("empathic_attunement").expect("registered");
        assert!((fired.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sub_floor_confidence_is_silently_excluded() {
        // Motivational support only, no code: 0.30 < 0.50.
        let scores = scores(
            neutral_traits(),
            None,
            MotiveCategory::Reformer,
            (1991, 2, 10), // Aquarius: Air, Fixed, no Earth luminary
        );
        let detected = detect(&scores);
        assert!(!detected.contains_key("perfectionist_edge"));
    }

    #[test]
    fn detection_is_deterministic() {
        let sheet_a: QuestionnaireAnswers = [("openness_1", AnswerChoice::High)]
            .into_iter()
            .map(|(id, c)| (id.to_string(), c))
            .collect();
        let date = NaiveDate::from_ymd_opt(1990, 7, 15).expect("valid date");
        let a = detect(&FrameworkScores::compute(&sheet_a, date, None, None));
        let b = detect(&FrameworkScores::compute(&sheet_a, date, None, None));
        assert_eq!(a, b);
    }
}
