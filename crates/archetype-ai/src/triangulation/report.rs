use super::domain::{TraitKind, TraitScores};
use super::matching::CategoryMatch;
use super::patterns::{DetectedPattern, DetectedPatterns};

/// Confidence at or above which the explanation names a single
/// standout core pattern.
const STANDOUT_CONFIDENCE: f64 = 0.75;
/// Floor for the softer "several patterns" fallback sentence.
const MODERATE_CONFIDENCE: f64 = 0.5;

/// Builds the deterministic one-sentence explanation for the primary
/// match.
///
/// Wording is fully templated: the percentage band picks the strength
/// phrasing, and the sentence names whichever frameworks supported the
/// top core pattern. No free-form generation happens here.
pub fn build_explanation(
    display_name: &str,
    primary: &CategoryMatch,
    detected: &DetectedPatterns,
) -> String {
    let (strength, opener) = match primary.percentage {
        85..=100 => ("very strong", Some("Unmistakably")),
        75..=84 => ("strong", Some("Clearly")),
        65..=74 => ("clear", None),
        _ => ("moderate", None),
    };

    let lead = match opener {
        Some(opener) => format!(
            "{opener}, {display_name} carries a {strength} {} signature ({}% match)",
            primary.name, primary.percentage
        ),
        None => format!(
            "{display_name} shows a {strength} {} signature ({}% match)",
            primary.name, primary.percentage
        ),
    };

    let best_core = primary
        .matched_core
        .iter()
        .filter_map(|id| detected.get(id))
        .max_by(|a, b| {
            a.confidence
                .partial_cmp(&b.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match best_core {
        Some(pattern) if pattern.confidence >= STANDOUT_CONFIDENCE => {
            format!(
                "{lead}: the {} pattern stood out at {:.0}% confidence, backed by {}.",
                pattern.name,
                pattern.confidence * 100.0,
                join_frameworks(pattern)
            )
        }
        _ => {
            let moderate: Vec<&str> = primary
                .matched_core
                .iter()
                .filter_map(|id| detected.get(id))
                .filter(|p| {
                    p.confidence >= MODERATE_CONFIDENCE && p.confidence < STANDOUT_CONFIDENCE
                })
                .map(|p| p.name)
                .collect();

            if moderate.is_empty() {
                format!("{lead}, based on the overall balance of detected patterns.")
            } else {
                format!(
                    "{lead}, built from moderate signals across {}.",
                    moderate.join(", ")
                )
            }
        }
    }
}

fn join_frameworks(pattern: &DetectedPattern) -> String {
    let names = pattern.support.supporting_names();
    match names.len() {
        0 => "no corroborating framework".to_string(),
        1 => names[0].to_string(),
        _ => format!(
            "{} and {}",
            names[..names.len() - 1].join(", "),
            names[names.len() - 1]
        ),
    }
}

/// Categorical one-line summary of the five trait scores.
///
/// Each trait is thresholded into a short descriptor; traits sitting
/// in the unremarkable middle band are skipped. When nothing crosses a
/// threshold the summary falls back to a generic balanced phrase.
pub fn build_framework_summary(traits: &TraitScores) -> String {
    let mut phrases = Vec::new();
    for kind in TraitKind::ordered() {
        let score = traits.get(kind);
        if let Some(descriptor) = trait_descriptor(kind, score) {
            phrases.push(descriptor);
        }
    }

    if phrases.is_empty() {
        "Balanced across all five behavioral traits".to_string()
    } else {
        phrases.join("; ")
    }
}

fn trait_descriptor(kind: TraitKind, score: u8) -> Option<&'static str> {
    let (strong, leaning, low) = match kind {
        TraitKind::Openness => (
            "strongly drawn to the new and untried",
            "leans toward novelty",
            "prefers the familiar",
        ),
        TraitKind::Discipline => (
            "highly structured and methodical",
            "leans organized",
            "improvises rather than plans",
        ),
        TraitKind::SocialEnergy => (
            "energized by people and attention",
            "socially warm",
            "recharges in solitude",
        ),
        TraitKind::Harmony => (
            "deeply accommodating of others",
            "cooperative by default",
            "direct even at the cost of friction",
        ),
        TraitKind::Resilience => (
            "unshaken under sustained pressure",
            "steady under pressure",
            "feels stress keenly",
        ),
    };

    if score >= 75 {
        Some(strong)
    } else if score >= 60 {
        Some(leaning)
    } else if score <= 40 {
        Some(low)
    } else {
        None
    }
}
