use archetype_ai::triangulation::domain::{Modality, QuestionnaireAnswers, Sign};
use archetype_ai::triangulation::FrameworkScores;
use chrono::NaiveDate;

fn primary_for(year: i32, month: u32, day: u32) -> Sign {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
    FrameworkScores::compute(&QuestionnaireAnswers::new(), date, None, None)
        .calendar
        .primary
        .sign
}

#[test]
fn mid_range_dates_resolve_from_the_boundary_table() {
    assert_eq!(primary_for(1990, 7, 15), Sign::Cancer);
    assert_eq!(primary_for(1985, 4, 2), Sign::Aries);
    assert_eq!(primary_for(2000, 11, 5), Sign::Scorpio);
}

#[test]
fn transitions_flip_on_the_exact_boundary_day() {
    // Cancer ends Jul 22; Leo starts Jul 23.
    assert_eq!(primary_for(1990, 7, 22), Sign::Cancer);
    assert_eq!(primary_for(1990, 7, 23), Sign::Leo);

    // Virgo ends Sep 22; Libra starts Sep 23.
    assert_eq!(primary_for(1992, 9, 22), Sign::Virgo);
    assert_eq!(primary_for(1992, 9, 23), Sign::Libra);
}

#[test]
fn year_end_wrap_belongs_to_the_wrapping_range() {
    assert_eq!(primary_for(1990, 12, 21), Sign::Sagittarius);
    assert_eq!(primary_for(1990, 12, 22), Sign::Capricorn);
    assert_eq!(primary_for(1990, 12, 31), Sign::Capricorn);
    assert_eq!(primary_for(1991, 1, 1), Sign::Capricorn);
    assert_eq!(primary_for(1991, 1, 19), Sign::Capricorn);
    assert_eq!(primary_for(1991, 1, 20), Sign::Aquarius);
}

#[test]
fn auxiliary_placements_follow_the_documented_approximation() {
    let date = NaiveDate::from_ymd_opt(1990, 7, 15).expect("valid date");
    let reading = FrameworkScores::compute(&QuestionnaireAnswers::new(), date, None, None).calendar;

    // Day 196 of the year, mod 12 = 4 positions into the table.
    assert_eq!(reading.secondary.sign, Sign::Leo);
    // Fixed +4 and +8 offsets from Cancer.
    assert_eq!(reading.expression.sign, Sign::Scorpio);
    assert_eq!(reading.instinct.sign, Sign::Pisces);
    // Modality is only resolved for the two luminary placements.
    assert_eq!(reading.primary.modality, Some(Modality::Cardinal));
    assert!(reading.ascendant.modality.is_none());
    assert!(reading.expression.modality.is_none());
    assert!(reading.instinct.modality.is_none());
}

#[test]
fn birth_time_only_shifts_the_ascendant() {
    let date = NaiveDate::from_ymd_opt(1990, 7, 15).expect("valid date");
    let answers = QuestionnaireAnswers::new();

    let midday = FrameworkScores::compute(&answers, date, None, None).calendar;
    let evening = FrameworkScores::compute(&answers, date, None, Some("20:15")).calendar;

    assert_ne!(midday.ascendant.sign, evening.ascendant.sign);
    assert_eq!(midday.primary, evening.primary);
    assert_eq!(midday.secondary, evening.secondary);
    assert_eq!(midday.expression, evening.expression);
    assert_eq!(midday.instinct, evening.instinct);
}
