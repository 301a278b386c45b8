use crate::triangulation::domain::{
    CognitiveType, EnergyFocus, JudgmentStyle, LifestyleStyle, PerceptionStyle,
};

/// Parses a self-reported four-letter cognitive-type code.
///
/// Accepts exactly one letter per preference pair, case-insensitive
/// (`[EI][SN][TF][JP]`). Anything else returns `None`: a malformed
/// code is "not provided", never an input error.
pub fn parse_cognitive_type(raw: &str) -> Option<CognitiveType> {
    let trimmed = raw.trim();
    if trimmed.chars().count() != 4 {
        return None;
    }

    let mut letters = trimmed.chars().map(|c| c.to_ascii_uppercase());
    let energy = match letters.next()? {
        'E' => EnergyFocus::Outward,
        'I' => EnergyFocus::Inward,
        _ => return None,
    };
    let perception = match letters.next()? {
        'S' => PerceptionStyle::Concrete,
        'N' => PerceptionStyle::Abstract,
        _ => return None,
    };
    let judgment = match letters.next()? {
        'T' => JudgmentStyle::Analytical,
        'F' => JudgmentStyle::Empathic,
        _ => return None,
    };
    let lifestyle = match letters.next()? {
        'J' => LifestyleStyle::Structured,
        'P' => LifestyleStyle::Adaptive,
        _ => return None,
    };

    Some(CognitiveType {
        code: trimmed.to_ascii_uppercase(),
        energy,
        perception,
        judgment,
        lifestyle,
    })
}
