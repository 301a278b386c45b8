mod profiles;

pub use profiles::{profile_registry, CategoryProfile};

use super::patterns::DetectedPatterns;
use serde::Serialize;

/// A supporting pattern counts at this fraction of a core pattern.
const SUPPORT_WEIGHT: f64 = 0.55;
/// An incompatible pattern subtracts this fraction of its confidence.
const PENALTY_WEIGHT: f64 = 0.45;

/// Coverage shaping: profiles with thin core coverage are dampened,
/// profiles with broad coverage are boosted.
const LOW_COVERAGE_CUTOFF: f64 = 0.35;
const HIGH_COVERAGE_CUTOFF: f64 = 0.70;
const DAMPEN_MULTIPLIER: f64 = 0.88;
const BOOST_MULTIPLIER: f64 = 1.08;
/// A boosted profile is less vulnerable to incompatible-pattern noise.
const BOOSTED_PENALTY_SOFTENER: f64 = 0.9;

/// Discrete confidence grade attached to a category match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    Low,
    Moderate,
    High,
}

impl ConfidenceTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

/// Scored match for a single category profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMatch {
    pub id: &'static str,
    pub name: &'static str,
    pub percentage: u8,
    pub tier: ConfidenceTier,
    pub matched_core: Vec<&'static str>,
    pub matched_supporting: Vec<&'static str>,
    pub matched_incompatible: Vec<&'static str>,
}

/// Ranked result of matching all twenty profiles. The top three are
/// always distinct: each profile is scored exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub primary: CategoryMatch,
    pub secondary: CategoryMatch,
    pub tertiary: CategoryMatch,
    pub all_matches: Vec<CategoryMatch>,
}

/// Scores every registered profile against the detected patterns and
/// ranks them. There is no "no match" outcome; an empty detection map
/// simply yields twenty zero-percentage matches.
pub fn rank(detected: &DetectedPatterns) -> MatchOutcome {
    let mut all_matches: Vec<CategoryMatch> = profile_registry()
        .iter()
        .map(|profile| score_profile(profile, detected))
        .collect();

    all_matches.sort_by(|a, b| {
        b.percentage
            .cmp(&a.percentage)
            .then_with(|| b.tier.cmp(&a.tier))
            // Equal on both: order by id so the ranking is total.
            .then_with(|| a.id.cmp(b.id))
    });

    MatchOutcome {
        primary: all_matches[0].clone(),
        secondary: all_matches[1].clone(),
        tertiary: all_matches[2].clone(),
        all_matches,
    }
}

pub(crate) fn score_profile(
    profile: &CategoryProfile,
    detected: &DetectedPatterns,
) -> CategoryMatch {
    let mut core_hit = 0.0;
    let mut matched_core = Vec::new();
    for id in &profile.core {
        if let Some(pattern) = detected.get(id) {
            core_hit += pattern.confidence;
            matched_core.push(*id);
        }
    }
    let core_max = profile.core.len() as f64;

    let mut supporting_contribution = 0.0;
    let mut matched_supporting = Vec::new();
    for id in &profile.supporting {
        if let Some(pattern) = detected.get(id) {
            supporting_contribution += pattern.confidence * SUPPORT_WEIGHT;
            matched_supporting.push(*id);
        }
    }

    // Incompatible patterns only ever reduce the numerator; they are
    // excluded from max_possible so a penalty cannot inflate the
    // denominator.
    let mut penalty = 0.0;
    let mut matched_incompatible = Vec::new();
    for id in &profile.incompatible {
        if let Some(pattern) = detected.get(id) {
            penalty += pattern.confidence * PENALTY_WEIGHT;
            matched_incompatible.push(*id);
        }
    }

    let max_possible = core_max + profile.supporting.len() as f64 * SUPPORT_WEIGHT;

    let core_coverage = if core_max > 0.0 { core_hit / core_max } else { 0.0 };
    let multiplier = if core_coverage < LOW_COVERAGE_CUTOFF {
        DAMPEN_MULTIPLIER
    } else if core_coverage > HIGH_COVERAGE_CUTOFF {
        BOOST_MULTIPLIER
    } else {
        1.0
    };
    if multiplier > 1.0 {
        penalty *= BOOSTED_PENALTY_SOFTENER;
    }

    let score = (core_hit + supporting_contribution) * multiplier - penalty;
    let percentage = if max_possible > 0.0 {
        (score / max_possible * 100.0).round().clamp(0.0, 100.0) as u8
    } else {
        0
    };

    let core_avg = if matched_core.is_empty() {
        0.0
    } else {
        core_hit / matched_core.len() as f64
    };
    let tier = assign_tier(percentage, core_hit, core_coverage, core_avg, profile);

    CategoryMatch {
        id: profile.id,
        name: profile.name,
        percentage,
        tier,
        matched_core,
        matched_supporting,
        matched_incompatible,
    }
}

fn assign_tier(
    percentage: u8,
    core_hit: f64,
    core_coverage: f64,
    core_avg: f64,
    profile: &CategoryProfile,
) -> ConfidenceTier {
    let core_meets = core_hit >= profile.minimum_core_match;
    if percentage >= 78 && core_meets && core_coverage >= 0.55 && core_avg >= 0.65 {
        ConfidenceTier::High
    } else if percentage >= 62 && (core_coverage >= 0.40 || core_meets) {
        ConfidenceTier::Moderate
    } else {
        ConfidenceTier::Low
    }
}
