use crate::triangulation::domain::{
    CalendarReading, CognitiveType, Element, EnergyFocus, JudgmentStyle, LifestyleStyle,
    Modality, MotivationalType, MotiveCategory, PerceptionStyle, TraitScores,
};
use std::sync::OnceLock;

/// A fixed behavioral pattern with one predicate per framework.
///
/// The cognitive predicate is only evaluated when a type code was
/// supplied; the detector treats the absent framework as "did not
/// fire" rather than calling through a null.
pub struct PatternDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub traits: fn(&TraitScores) -> bool,
    pub cognitive: fn(&CognitiveType) -> bool,
    pub motivational: fn(&MotivationalType) -> bool,
    pub calendar: fn(&CalendarReading) -> bool,
}

fn core_in(motivation: &MotivationalType, categories: &[MotiveCategory]) -> bool {
    categories.contains(&motivation.core)
}

/// The full pattern catalogue, built once per process.
pub fn pattern_catalog() -> &'static [PatternDefinition] {
    static CATALOG: OnceLock<Vec<PatternDefinition>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

fn build_catalog() -> Vec<PatternDefinition> {
    vec![
        PatternDefinition {
            id: "analytical_depth",
            name: "Analytical Depth",
            traits: |t| t.openness >= 65 && t.social_energy <= 55,
            cognitive: |c| {
                c.perception == PerceptionStyle::Abstract
                    && c.judgment == JudgmentStyle::Analytical
            },
            motivational: |m| core_in(m, &[MotiveCategory::Investigator, MotiveCategory::Reformer]),
            calendar: |r| r.luminary_element(Element::Air) || r.luminary_element(Element::Earth),
        },
        PatternDefinition {
            id: "structured_execution",
            name: "Structured Execution",
            traits: |t| t.discipline >= 70,
            cognitive: |c| {
                c.lifestyle == LifestyleStyle::Structured
                    && c.perception == PerceptionStyle::Concrete
            },
            motivational: |m| core_in(m, &[MotiveCategory::Reformer, MotiveCategory::Achiever]),
            calendar: |r| {
                r.primary_modality(Modality::Cardinal) || r.primary.element == Element::Earth
            },
        },
        PatternDefinition {
            id: "social_magnetism",
            name: "Social Magnetism",
            traits: |t| t.social_energy >= 70,
            cognitive: |c| c.energy == EnergyFocus::Outward,
            motivational: |m| core_in(m, &[MotiveCategory::Enthusiast, MotiveCategory::Helper]),
            calendar: |r| r.luminary_element(Element::Fire) || r.luminary_element(Element::Air),
        },
        PatternDefinition {
            id: "quiet_observation",
            name: "Quiet Observation",
            traits: |t| t.social_energy <= 40,
            cognitive: |c| c.energy == EnergyFocus::Inward,
            motivational: |m| {
                core_in(m, &[MotiveCategory::Investigator, MotiveCategory::Peacemaker])
            },
            calendar: |r| r.luminary_element(Element::Water) || r.luminary_element(Element::Earth),
        },
        PatternDefinition {
            id: "creative_divergence",
            name: "Creative Divergence",
            traits: |t| t.openness >= 75,
            cognitive: |c| {
                c.perception == PerceptionStyle::Abstract && c.lifestyle == LifestyleStyle::Adaptive
            },
            motivational: |m| {
                core_in(m, &[MotiveCategory::Individualist, MotiveCategory::Enthusiast])
            },
            calendar: |r| r.primary_modality(Modality::Mutable),
        },
        PatternDefinition {
            id: "empathic_attunement",
            name: "Empathic Attunement",
            traits: |t| t.harmony >= 70,
            cognitive: |c| c.judgment == JudgmentStyle::Empathic,
            motivational: |m| core_in(m, &[MotiveCategory::Helper, MotiveCategory::Peacemaker]),
            calendar: |r| r.luminary_element(Element::Water),
        },
        PatternDefinition {
            id: "risk_appetite",
            name: "Risk Appetite",
            traits: |t| t.resilience >= 65 && t.openness >= 60,
            cognitive: |c| {
                c.energy == EnergyFocus::Outward && c.lifestyle == LifestyleStyle::Adaptive
            },
            motivational: |m| core_in(m, &[MotiveCategory::Enthusiast, MotiveCategory::Challenger]),
            calendar: |r| r.luminary_element(Element::Fire),
        },
        PatternDefinition {
            id: "steady_loyalty",
            name: "Steady Loyalty",
            traits: |t| t.harmony >= 60 && t.discipline >= 55,
            cognitive: |c| c.lifestyle == LifestyleStyle::Structured,
            motivational: |m| core_in(m, &[MotiveCategory::Loyalist, MotiveCategory::Helper]),
            calendar: |r| {
                r.primary.element == Element::Earth || r.primary_modality(Modality::Fixed)
            },
        },
        PatternDefinition {
            id: "visionary_drive",
            name: "Visionary Drive",
            traits: |t| t.openness >= 70 && t.resilience >= 55,
            cognitive: |c| c.perception == PerceptionStyle::Abstract,
            motivational: |m| {
                core_in(m, &[MotiveCategory::Achiever, MotiveCategory::Individualist])
            },
            calendar: |r| r.luminary_element(Element::Fire) || r.luminary_element(Element::Air),
        },
        PatternDefinition {
            id: "harmonizing_instinct",
            name: "Harmonizing Instinct",
            traits: |t| t.harmony >= 65 && t.social_energy >= 50,
            cognitive: |c| {
                c.judgment == JudgmentStyle::Empathic && c.energy == EnergyFocus::Outward
            },
            motivational: |m| core_in(m, &[MotiveCategory::Peacemaker, MotiveCategory::Helper]),
            calendar: |r| r.luminary_element(Element::Air),
        },
        PatternDefinition {
            id: "independent_streak",
            name: "Independent Streak",
            traits: |t| t.social_energy <= 45 && t.resilience >= 60,
            cognitive: |c| {
                c.energy == EnergyFocus::Inward && c.judgment == JudgmentStyle::Analytical
            },
            motivational: |m| {
                core_in(
                    m,
                    &[
                        MotiveCategory::Individualist,
                        MotiveCategory::Investigator,
                        MotiveCategory::Challenger,
                    ],
                )
            },
            calendar: |r| r.primary_modality(Modality::Fixed),
        },
        PatternDefinition {
            id: "protective_guardianship",
            name: "Protective Guardianship",
            traits: |t| t.harmony >= 60 && t.resilience >= 60,
            cognitive: |c| c.perception == PerceptionStyle::Concrete,
            motivational: |m| core_in(m, &[MotiveCategory::Loyalist, MotiveCategory::Challenger]),
            calendar: |r| r.luminary_element(Element::Water) || r.luminary_element(Element::Earth),
        },
        PatternDefinition {
            id: "playful_spontaneity",
            name: "Playful Spontaneity",
            traits: |t| t.social_energy >= 65 && t.discipline <= 45,
            cognitive: |c| c.lifestyle == LifestyleStyle::Adaptive,
            motivational: |m| core_in(m, &[MotiveCategory::Enthusiast]),
            calendar: |r| {
                r.primary_modality(Modality::Mutable) || r.primary.element == Element::Fire
            },
        },
        PatternDefinition {
            id: "strategic_patience",
            name: "Strategic Patience",
            traits: |t| t.discipline >= 65 && t.social_energy <= 55,
            cognitive: |c| {
                c.judgment == JudgmentStyle::Analytical
                    && c.lifestyle == LifestyleStyle::Structured
            },
            motivational: |m| core_in(m, &[MotiveCategory::Investigator, MotiveCategory::Achiever]),
            calendar: |r| r.luminary_element(Element::Earth),
        },
        PatternDefinition {
            id: "expressive_flair",
            name: "Expressive Flair",
            traits: |t| t.social_energy >= 60 && t.openness >= 60,
            cognitive: |c| {
                c.energy == EnergyFocus::Outward && c.judgment == JudgmentStyle::Empathic
            },
            motivational: |m| {
                core_in(m, &[MotiveCategory::Individualist, MotiveCategory::Enthusiast])
            },
            calendar: |r| r.luminary_element(Element::Fire),
        },
        PatternDefinition {
            id: "grounded_pragmatism",
            name: "Grounded Pragmatism",
            traits: |t| t.discipline >= 60 && t.openness <= 50,
            cognitive: |c| c.perception == PerceptionStyle::Concrete,
            motivational: |m| core_in(m, &[MotiveCategory::Loyalist, MotiveCategory::Reformer]),
            calendar: |r| r.luminary_element(Element::Earth),
        },
        PatternDefinition {
            id: "restless_curiosity",
            name: "Restless Curiosity",
            traits: |t| t.openness >= 65 && t.discipline <= 50,
            cognitive: |c| {
                c.perception == PerceptionStyle::Abstract && c.lifestyle == LifestyleStyle::Adaptive
            },
            motivational: |m| {
                core_in(m, &[MotiveCategory::Enthusiast, MotiveCategory::Investigator])
            },
            calendar: |r| r.luminary_element(Element::Air) || r.primary_modality(Modality::Mutable),
        },
        PatternDefinition {
            id: "commanding_presence",
            name: "Commanding Presence",
            traits: |t| t.resilience >= 70 && t.social_energy >= 60,
            cognitive: |c| {
                c.energy == EnergyFocus::Outward && c.judgment == JudgmentStyle::Analytical
            },
            motivational: |m| core_in(m, &[MotiveCategory::Challenger, MotiveCategory::Achiever]),
            calendar: |r| {
                r.luminary_element(Element::Fire) || r.primary_modality(Modality::Cardinal)
            },
        },
        PatternDefinition {
            id: "reflective_interiority",
            name: "Reflective Interiority",
            traits: |t| t.social_energy <= 40 && t.openness >= 55,
            cognitive: |c| {
                c.energy == EnergyFocus::Inward && c.perception == PerceptionStyle::Abstract
            },
            motivational: |m| {
                core_in(m, &[MotiveCategory::Individualist, MotiveCategory::Investigator])
            },
            calendar: |r| r.luminary_element(Element::Water),
        },
        PatternDefinition {
            id: "service_orientation",
            name: "Service Orientation",
            traits: |t| t.harmony >= 65 && t.discipline >= 50,
            cognitive: |c| {
                c.judgment == JudgmentStyle::Empathic && c.lifestyle == LifestyleStyle::Structured
            },
            motivational: |m| core_in(m, &[MotiveCategory::Helper, MotiveCategory::Loyalist]),
            calendar: |r| r.luminary_element(Element::Earth) || r.luminary_element(Element::Water),
        },
        PatternDefinition {
            id: "perfectionist_edge",
            name: "Perfectionist Edge",
            traits: |t| t.discipline >= 75,
            cognitive: |c| {
                c.judgment == JudgmentStyle::Analytical
                    && c.lifestyle == LifestyleStyle::Structured
            },
            motivational: |m| core_in(m, &[MotiveCategory::Reformer]),
            calendar: |r| r.primary.element == Element::Earth,
        },
        PatternDefinition {
            id: "adaptive_resilience",
            name: "Adaptive Resilience",
            traits: |t| t.resilience >= 65 && t.harmony >= 50,
            cognitive: |c| c.lifestyle == LifestyleStyle::Adaptive,
            motivational: |m| core_in(m, &[MotiveCategory::Peacemaker, MotiveCategory::Enthusiast]),
            calendar: |r| r.primary_modality(Modality::Mutable),
        },
        PatternDefinition {
            id: "intuitive_synthesis",
            name: "Intuitive Synthesis",
            traits: |t| t.openness >= 70 && t.harmony >= 55,
            cognitive: |c| {
                c.perception == PerceptionStyle::Abstract && c.judgment == JudgmentStyle::Empathic
            },
            motivational: |m| {
                core_in(m, &[MotiveCategory::Individualist, MotiveCategory::Peacemaker])
            },
            calendar: |r| r.luminary_element(Element::Water) || r.luminary_element(Element::Air),
        },
        PatternDefinition {
            id: "competitive_fire",
            name: "Competitive Fire",
            traits: |t| t.resilience >= 70 && t.harmony <= 45,
            cognitive: |c| {
                c.judgment == JudgmentStyle::Analytical && c.energy == EnergyFocus::Outward
            },
            motivational: |m| core_in(m, &[MotiveCategory::Challenger, MotiveCategory::Achiever]),
            calendar: |r| r.luminary_element(Element::Fire) || r.primary_modality(Modality::Fixed),
        },
        PatternDefinition {
            id: "contemplative_calm",
            name: "Contemplative Calm",
            traits: |t| t.resilience >= 55 && t.social_energy <= 45 && t.harmony >= 55,
            cognitive: |c| c.energy == EnergyFocus::Inward,
            motivational: |m| {
                core_in(m, &[MotiveCategory::Peacemaker, MotiveCategory::Investigator])
            },
            calendar: |r| r.luminary_element(Element::Water) || r.luminary_element(Element::Earth),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_twenty_five_unique_patterns() {
        let catalog = pattern_catalog();
        assert_eq!(catalog.len(), 25);

        let mut ids: Vec<&str> = catalog.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 25);
    }
}
