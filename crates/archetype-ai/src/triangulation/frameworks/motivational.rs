use crate::triangulation::domain::{
    AnswerChoice, MotivationalType, MotiveCategory, QuestionnaireAnswers,
};
use crate::triangulation::questionnaire::MOTIVATIONAL_QUESTIONS;

/// Salt folded into the tie-break hash so the fold never starts from a
/// bare offset basis.
const TIE_BREAK_SALT: &str = "archetype-triangulation-v1";

/// Classifies the motivational type from the ten drive questions.
///
/// Each question feeds its category's accumulator with the answer's
/// {0, 2, 5} weight. The highest accumulator wins; an exact tie is
/// broken by a hash of the full answer set that is independent of map
/// iteration order, so identical answers always break the same way.
pub fn classify_motivation(answers: &QuestionnaireAnswers) -> MotivationalType {
    let mut accumulators = [0u16; 9];
    for (question_id, category) in MOTIVATIONAL_QUESTIONS {
        let choice = answers
            .get(question_id)
            .copied()
            .unwrap_or(AnswerChoice::Neutral);
        accumulators[(category.number() - 1) as usize] += choice.drive_weight();
    }

    let top = accumulators.iter().copied().max().unwrap_or(0);
    let tied: Vec<MotiveCategory> = MotiveCategory::ordered()
        .into_iter()
        .filter(|category| accumulators[(category.number() - 1) as usize] == top)
        .collect();

    let core = if tied.len() == 1 {
        tied[0]
    } else {
        tied[(answer_fingerprint(answers) % tied.len() as u64) as usize]
    };

    let (prev, next) = core.neighbors();
    let prev_score = accumulators[(prev.number() - 1) as usize];
    let next_score = accumulators[(next.number() - 1) as usize];
    // Equal neighbors resolve to the lower-numbered category.
    let wing = if next_score > prev_score {
        next
    } else if prev_score > next_score {
        prev
    } else if prev.number() < next.number() {
        prev
    } else {
        next
    };

    MotivationalType {
        core,
        wing,
        accumulators,
    }
}

/// Order-independent FNV-1a fold over the sorted answer pairs.
///
/// Sorting the keys before folding is what guarantees that two maps
/// with identical contents but different insertion histories hash the
/// same; do not fold in iteration order.
pub(crate) fn answer_fingerprint(answers: &QuestionnaireAnswers) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut pairs: Vec<(&str, u8)> = answers
        .iter()
        .map(|(id, choice)| (id.as_str(), choice.index()))
        .collect();
    pairs.sort_unstable();

    let mut hash = FNV_OFFSET;
    let mut fold = |byte: u8| {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    };

    for byte in TIE_BREAK_SALT.bytes() {
        fold(byte);
    }
    for (id, index) in pairs {
        for byte in id.bytes() {
            fold(byte);
        }
        fold(b'=');
        fold(index);
        fold(b';');
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, AnswerChoice)]) -> QuestionnaireAnswers {
        pairs
            .iter()
            .map(|(id, choice)| (id.to_string(), *choice))
            .collect()
    }

    fn zeroed_sheet() -> QuestionnaireAnswers {
        MOTIVATIONAL_QUESTIONS
            .iter()
            .map(|(id, _)| (id.to_string(), AnswerChoice::Low))
            .collect()
    }

    #[test]
    fn clear_maximum_wins_without_tie_break() {
        let mut sheet = zeroed_sheet();
        sheet.insert("drive_5".to_string(), AnswerChoice::High);
        sheet.insert("drive_6".to_string(), AnswerChoice::Neutral);

        let result = classify_motivation(&sheet);
        assert_eq!(result.core, MotiveCategory::Investigator);
        assert_eq!(result.score_of(MotiveCategory::Investigator), 5);
    }

    #[test]
    fn reinforced_category_accumulates_both_questions() {
        let mut sheet = zeroed_sheet();
        sheet.insert("drive_3".to_string(), AnswerChoice::High);
        sheet.insert("drive_10".to_string(), AnswerChoice::High);

        let result = classify_motivation(&sheet);
        assert_eq!(result.core, MotiveCategory::Achiever);
        assert_eq!(result.score_of(MotiveCategory::Achiever), 10);
    }

    #[test]
    fn wing_is_higher_scoring_ring_neighbor() {
        let mut sheet = zeroed_sheet();
        sheet.insert("drive_3".to_string(), AnswerChoice::High);
        sheet.insert("drive_10".to_string(), AnswerChoice::High);
        // Achiever's neighbors are Helper (2) and Individualist (4).
        sheet.insert("drive_4".to_string(), AnswerChoice::Neutral);

        let result = classify_motivation(&sheet);
        assert_eq!(result.wing, MotiveCategory::Individualist);
    }

    #[test]
    fn wing_tie_resolves_to_lower_numbered_neighbor() {
        let mut sheet = zeroed_sheet();
        sheet.insert("drive_5".to_string(), AnswerChoice::High);

        let result = classify_motivation(&sheet);
        assert_eq!(result.core, MotiveCategory::Investigator);
        // Both neighbors sit at zero; Individualist (4) beats Loyalist (6).
        assert_eq!(result.wing, MotiveCategory::Individualist);
    }

    #[test]
    fn fingerprint_ignores_insertion_order() {
        let forward = answers(&[
            ("drive_1", AnswerChoice::High),
            ("drive_2", AnswerChoice::Low),
            ("openness_1", AnswerChoice::Neutral),
        ]);
        let reversed = answers(&[
            ("openness_1", AnswerChoice::Neutral),
            ("drive_2", AnswerChoice::Low),
            ("drive_1", AnswerChoice::High),
        ]);
        assert_eq!(answer_fingerprint(&forward), answer_fingerprint(&reversed));
    }

    #[test]
    fn fingerprint_distinguishes_contents() {
        let a = answers(&[("drive_1", AnswerChoice::High)]);
        let b = answers(&[("drive_1", AnswerChoice::Low)]);
        assert_ne!(answer_fingerprint(&a), answer_fingerprint(&b));
    }

    #[test]
    fn exact_tie_breaks_identically_across_runs() {
        // drive_1 and drive_2 both at High with everything else zero
        // leaves Reformer and Helper tied at 5.
        let mut sheet = zeroed_sheet();
        sheet.insert("drive_1".to_string(), AnswerChoice::High);
        sheet.insert("drive_2".to_string(), AnswerChoice::High);

        let first = classify_motivation(&sheet);
        let mut entries: Vec<_> = sheet.into_iter().collect();
        entries.reverse();
        let reordered: QuestionnaireAnswers = entries.into_iter().collect();
        let second = classify_motivation(&reordered);
        assert_eq!(first.core, second.core);
        assert!(matches!(
            first.core,
            MotiveCategory::Reformer | MotiveCategory::Helper
        ));
    }
}
