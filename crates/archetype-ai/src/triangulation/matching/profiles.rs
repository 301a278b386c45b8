use std::sync::OnceLock;

/// Source record for one of the twenty cultural-code categories.
///
/// The three pattern-role sets are hand-authored and may conflict in
/// the source table; [`CategoryProfile::sanitize`] resolves conflicts
/// at load time with core > supporting > incompatible priority.
struct RawProfile {
    id: &'static str,
    name: &'static str,
    core: &'static [&'static str],
    supporting: &'static [&'static str],
    incompatible: &'static [&'static str],
    minimum_core_match: f64,
}

/// A sanitized category profile: the three pattern-role sets are
/// guaranteed pairwise disjoint.
#[derive(Debug, Clone)]
pub struct CategoryProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub core: Vec<&'static str>,
    pub supporting: Vec<&'static str>,
    pub incompatible: Vec<&'static str>,
    pub minimum_core_match: f64,
}

impl CategoryProfile {
    fn sanitize(raw: &RawProfile) -> Self {
        let core: Vec<&'static str> = raw.core.to_vec();
        let supporting: Vec<&'static str> = raw
            .supporting
            .iter()
            .copied()
            .filter(|id| !core.contains(id))
            .collect();
        let incompatible: Vec<&'static str> = raw
            .incompatible
            .iter()
            .copied()
            .filter(|id| !core.contains(id) && !supporting.contains(id))
            .collect();

        Self {
            id: raw.id,
            name: raw.name,
            core,
            supporting,
            incompatible,
            minimum_core_match: raw.minimum_core_match,
        }
    }
}

/// The twenty sanitized category profiles, built once per process.
pub fn profile_registry() -> &'static [CategoryProfile] {
    static REGISTRY: OnceLock<Vec<CategoryProfile>> = OnceLock::new();
    REGISTRY.get_or_init(|| RAW_PROFILES.iter().map(CategoryProfile::sanitize).collect())
}

const RAW_PROFILES: [RawProfile; 20] = [
    RawProfile {
        id: "sage",
        name: "The Sage",
        core: &["analytical_depth", "reflective_interiority", "strategic_patience"],
        supporting: &["quiet_observation", "intuitive_synthesis", "contemplative_calm"],
        incompatible: &["playful_spontaneity", "competitive_fire"],
        minimum_core_match: 1.1,
    },
    RawProfile {
        id: "explorer",
        name: "The Explorer",
        core: &["restless_curiosity", "risk_appetite", "independent_streak"],
        supporting: &["creative_divergence", "adaptive_resilience"],
        incompatible: &["grounded_pragmatism", "steady_loyalty"],
        minimum_core_match: 1.0,
    },
    RawProfile {
        id: "creator",
        name: "The Creator",
        core: &["creative_divergence", "expressive_flair", "intuitive_synthesis"],
        supporting: &["restless_curiosity", "visionary_drive"],
        incompatible: &["grounded_pragmatism"],
        minimum_core_match: 1.1,
    },
    RawProfile {
        id: "hero",
        name: "The Hero",
        core: &["commanding_presence", "competitive_fire", "risk_appetite"],
        supporting: &["visionary_drive", "protective_guardianship"],
        incompatible: &["contemplative_calm", "quiet_observation"],
        minimum_core_match: 1.2,
    },
    RawProfile {
        id: "caregiver",
        name: "The Caregiver",
        core: &["empathic_attunement", "service_orientation", "protective_guardianship"],
        supporting: &["steady_loyalty", "harmonizing_instinct"],
        incompatible: &["competitive_fire", "independent_streak"],
        minimum_core_match: 1.2,
    },
    RawProfile {
        id: "sovereign",
        name: "The Sovereign",
        core: &["commanding_presence", "structured_execution", "strategic_patience"],
        supporting: &["perfectionist_edge", "visionary_drive"],
        incompatible: &["playful_spontaneity"],
        minimum_core_match: 1.2,
    },
    RawProfile {
        id: "magician",
        name: "The Magician",
        core: &["intuitive_synthesis", "visionary_drive", "creative_divergence"],
        supporting: &["analytical_depth", "adaptive_resilience"],
        incompatible: &["grounded_pragmatism"],
        minimum_core_match: 1.1,
    },
    RawProfile {
        id: "innocent",
        name: "The Innocent",
        core: &["harmonizing_instinct", "steady_loyalty", "contemplative_calm"],
        supporting: &["empathic_attunement", "service_orientation"],
        incompatible: &["competitive_fire", "risk_appetite"],
        minimum_core_match: 1.0,
    },
    RawProfile {
        id: "jester",
        name: "The Jester",
        core: &["playful_spontaneity", "social_magnetism", "expressive_flair"],
        supporting: &["restless_curiosity", "adaptive_resilience"],
        incompatible: &["strategic_patience", "perfectionist_edge"],
        minimum_core_match: 1.1,
    },
    RawProfile {
        id: "companion",
        name: "The Companion",
        core: &["harmonizing_instinct", "social_magnetism", "steady_loyalty"],
        // steady_loyalty is also listed as supporting in the source
        // table; sanitization keeps the core assignment.
        supporting: &["empathic_attunement", "service_orientation", "steady_loyalty"],
        incompatible: &["independent_streak"],
        minimum_core_match: 1.0,
    },
    RawProfile {
        id: "lover",
        name: "The Lover",
        core: &["expressive_flair", "empathic_attunement", "harmonizing_instinct"],
        supporting: &["social_magnetism", "intuitive_synthesis"],
        incompatible: &["analytical_depth"],
        minimum_core_match: 1.1,
    },
    RawProfile {
        id: "maverick",
        name: "The Maverick",
        core: &["independent_streak", "risk_appetite", "competitive_fire"],
        supporting: &["creative_divergence", "commanding_presence"],
        incompatible: &["steady_loyalty", "service_orientation"],
        minimum_core_match: 1.2,
    },
    RawProfile {
        id: "architect",
        name: "The Architect",
        core: &["structured_execution", "analytical_depth", "perfectionist_edge"],
        supporting: &["strategic_patience", "grounded_pragmatism"],
        incompatible: &["playful_spontaneity"],
        minimum_core_match: 1.2,
    },
    RawProfile {
        id: "visionary",
        name: "The Visionary",
        core: &["visionary_drive", "intuitive_synthesis", "restless_curiosity"],
        supporting: &["creative_divergence", "risk_appetite"],
        incompatible: &["grounded_pragmatism", "contemplative_calm"],
        minimum_core_match: 1.1,
    },
    RawProfile {
        id: "guardian",
        name: "The Guardian",
        core: &["protective_guardianship", "steady_loyalty", "grounded_pragmatism"],
        supporting: &["structured_execution", "service_orientation"],
        incompatible: &["restless_curiosity"],
        minimum_core_match: 1.2,
    },
    RawProfile {
        id: "strategist",
        name: "The Strategist",
        core: &["strategic_patience", "analytical_depth", "structured_execution"],
        supporting: &["independent_streak", "perfectionist_edge"],
        incompatible: &["playful_spontaneity", "expressive_flair"],
        minimum_core_match: 1.2,
    },
    RawProfile {
        id: "diplomat",
        name: "The Diplomat",
        core: &["harmonizing_instinct", "empathic_attunement", "quiet_observation"],
        supporting: &["contemplative_calm", "service_orientation"],
        incompatible: &["competitive_fire", "commanding_presence"],
        minimum_core_match: 1.1,
    },
    RawProfile {
        id: "pioneer",
        name: "The Pioneer",
        core: &["risk_appetite", "commanding_presence", "restless_curiosity"],
        supporting: &["visionary_drive", "adaptive_resilience"],
        incompatible: &["quiet_observation", "contemplative_calm"],
        minimum_core_match: 1.2,
    },
    RawProfile {
        id: "scholar",
        name: "The Scholar",
        core: &["analytical_depth", "quiet_observation", "reflective_interiority"],
        supporting: &["strategic_patience", "contemplative_calm"],
        incompatible: &["social_magnetism", "playful_spontaneity"],
        minimum_core_match: 1.1,
    },
    RawProfile {
        id: "catalyst",
        name: "The Catalyst",
        core: &["social_magnetism", "adaptive_resilience", "expressive_flair"],
        supporting: &["risk_appetite", "harmonizing_instinct"],
        incompatible: &["quiet_observation"],
        minimum_core_match: 1.1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulation::patterns::pattern_catalog;

    #[test]
    fn registry_holds_twenty_unique_profiles() {
        let registry = profile_registry();
        assert_eq!(registry.len(), 20);

        let mut ids: Vec<&str> = registry.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn role_sets_are_pairwise_disjoint_after_sanitization() {
        for profile in profile_registry() {
            for id in &profile.supporting {
                assert!(
                    !profile.core.contains(id),
                    "{}: {id} in both core and supporting",
                    profile.id
                );
            }
            for id in &profile.incompatible {
                assert!(
                    !profile.core.contains(id) && !profile.supporting.contains(id),
                    "{}: {id} leaked into incompatible",
                    profile.id
                );
            }
        }
    }

    #[test]
    fn duplicate_source_assignment_resolves_to_core() {
        let companion = profile_registry()
            .iter()
            .find(|p| p.id == "companion")
            .expect("companion profile present");
        assert!(companion.core.contains(&"steady_loyalty"));
        assert!(!companion.supporting.contains(&"steady_loyalty"));
    }

    #[test]
    fn every_referenced_pattern_exists_in_the_catalog() {
        let known: Vec<&str> = pattern_catalog().iter().map(|p| p.id).collect();
        for profile in profile_registry() {
            for id in profile
                .core
                .iter()
                .chain(&profile.supporting)
                .chain(&profile.incompatible)
            {
                assert!(known.contains(id), "{}: unknown pattern {id}", profile.id);
            }
        }
    }
}
