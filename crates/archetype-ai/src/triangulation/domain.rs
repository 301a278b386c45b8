use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw questionnaire input: question id mapped to the selected option.
/// Missing keys mean "unanswered" and degrade to [`AnswerChoice::Neutral`].
pub type QuestionnaireAnswers = HashMap<String, AnswerChoice>;

/// One of the three selectable options per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AnswerChoice {
    Low,
    Neutral,
    High,
}

impl AnswerChoice {
    /// Trait-scale mapping: option index to the 0-100 scale.
    pub const fn scale_points(self) -> u16 {
        match self {
            Self::Low => 20,
            Self::Neutral => 50,
            Self::High => 80,
        }
    }

    /// Motivational-accumulator weight for this option.
    pub const fn drive_weight(self) -> u16 {
        match self {
            Self::Low => 0,
            Self::Neutral => 2,
            Self::High => 5,
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Neutral => 1,
            Self::High => 2,
        }
    }
}

impl TryFrom<u8> for AnswerChoice {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Low),
            1 => Ok(Self::Neutral),
            2 => Ok(Self::High),
            other => Err(format!("answer option index {other} out of range (0..=2)")),
        }
    }
}

impl From<AnswerChoice> for u8 {
    fn from(value: AnswerChoice) -> Self {
        value.index()
    }
}

/// The five behavioral traits scored by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    Openness,
    Discipline,
    SocialEnergy,
    Harmony,
    Resilience,
}

impl TraitKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Openness,
            Self::Discipline,
            Self::SocialEnergy,
            Self::Harmony,
            Self::Resilience,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Openness => "Openness",
            Self::Discipline => "Discipline",
            Self::SocialEnergy => "Social Energy",
            Self::Harmony => "Harmony",
            Self::Resilience => "Resilience",
        }
    }
}

/// Five continuous behavioral-trait scores, each in 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScores {
    pub openness: u8,
    pub discipline: u8,
    pub social_energy: u8,
    pub harmony: u8,
    pub resilience: u8,
}

impl TraitScores {
    pub const fn get(&self, kind: TraitKind) -> u8 {
        match kind {
            TraitKind::Openness => self.openness,
            TraitKind::Discipline => self.discipline,
            TraitKind::SocialEnergy => self.social_energy,
            TraitKind::Harmony => self.harmony,
            TraitKind::Resilience => self.resilience,
        }
    }
}

/// Energy direction preference pair of the cognitive-type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyFocus {
    Outward,
    Inward,
}

/// Information-gathering preference pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerceptionStyle {
    Concrete,
    Abstract,
}

/// Decision-making preference pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgmentStyle {
    Analytical,
    Empathic,
}

/// Outer-life structuring preference pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleStyle {
    Structured,
    Adaptive,
}

/// Self-reported four-letter cognitive-type code, decomposed into its
/// four binary preference pairs. Only ever constructed from a
/// syntactically valid code; see
/// [`frameworks::parse_cognitive_type`](super::frameworks::parse_cognitive_type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognitiveType {
    pub code: String,
    pub energy: EnergyFocus,
    pub perception: PerceptionStyle,
    pub judgment: JudgmentStyle,
    pub lifestyle: LifestyleStyle,
}

/// The nine motivational categories, arranged on a ring: category 1 is
/// adjacent to both 2 and 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotiveCategory {
    Reformer,
    Helper,
    Achiever,
    Individualist,
    Investigator,
    Loyalist,
    Enthusiast,
    Challenger,
    Peacemaker,
}

impl MotiveCategory {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Reformer,
            Self::Helper,
            Self::Achiever,
            Self::Individualist,
            Self::Investigator,
            Self::Loyalist,
            Self::Enthusiast,
            Self::Challenger,
            Self::Peacemaker,
        ]
    }

    /// One-based position on the ring.
    pub const fn number(self) -> u8 {
        match self {
            Self::Reformer => 1,
            Self::Helper => 2,
            Self::Achiever => 3,
            Self::Individualist => 4,
            Self::Investigator => 5,
            Self::Loyalist => 6,
            Self::Enthusiast => 7,
            Self::Challenger => 8,
            Self::Peacemaker => 9,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Reformer => "Reformer",
            Self::Helper => "Helper",
            Self::Achiever => "Achiever",
            Self::Individualist => "Individualist",
            Self::Investigator => "Investigator",
            Self::Loyalist => "Loyalist",
            Self::Enthusiast => "Enthusiast",
            Self::Challenger => "Challenger",
            Self::Peacemaker => "Peacemaker",
        }
    }

    /// The two ring-adjacent categories, wrapping 1 <-> 9.
    pub fn neighbors(self) -> (Self, Self) {
        let ordered = Self::ordered();
        let idx = (self.number() - 1) as usize;
        let prev = ordered[(idx + 8) % 9];
        let next = ordered[(idx + 1) % 9];
        (prev, next)
    }
}

/// Motivational classification: the winning category, its wing, and
/// the raw accumulators (indexed by `MotiveCategory::number() - 1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationalType {
    pub core: MotiveCategory,
    pub wing: MotiveCategory,
    pub accumulators: [u16; 9],
}

impl MotivationalType {
    pub fn score_of(&self, category: MotiveCategory) -> u16 {
        self.accumulators[(category.number() - 1) as usize]
    }
}

/// The twelve calendar signs, in boundary-table order starting at the
/// spring equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::Aries,
            Self::Taurus,
            Self::Gemini,
            Self::Cancer,
            Self::Leo,
            Self::Virgo,
            Self::Libra,
            Self::Scorpio,
            Self::Sagittarius,
            Self::Capricorn,
            Self::Aquarius,
            Self::Pisces,
        ]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign shifted by `offset` table positions, wrapping.
    pub fn offset(self, offset: usize) -> Self {
        Self::ordered()[(self.index() + offset) % 12]
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// A single calendar placement. Modality is only resolved for the
/// primary and secondary placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub sign: Sign,
    pub element: Element,
    pub modality: Option<Modality>,
}

/// Five-placement symbolic-calendar reading. The primary placement is
/// exact per the boundary table; the other four are deliberately coarse
/// approximations (day-of-year modulo and fixed sign-table offsets),
/// not ephemeris positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarReading {
    pub primary: Placement,
    pub secondary: Placement,
    pub ascendant: Placement,
    pub expression: Placement,
    pub instinct: Placement,
}

impl CalendarReading {
    /// True when the primary or secondary placement carries `element`.
    pub fn luminary_element(&self, element: Element) -> bool {
        self.primary.element == element || self.secondary.element == element
    }

    pub fn primary_modality(&self, modality: Modality) -> bool {
        self.primary.modality == Some(modality)
    }
}
