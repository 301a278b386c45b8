use crate::triangulation::domain::{CalendarReading, Placement, Sign};
use chrono::{Datelike, NaiveDate};

/// Month/day boundary ranges for the primary placement, inclusive on
/// both ends. The Capricorn range wraps the year boundary and is the
/// only one where start > end.
const SIGN_BOUNDARIES: [(u32, u32, u32, u32, Sign); 12] = [
    (3, 21, 4, 19, Sign::Aries),
    (4, 20, 5, 20, Sign::Taurus),
    (5, 21, 6, 20, Sign::Gemini),
    (6, 21, 7, 22, Sign::Cancer),
    (7, 23, 8, 22, Sign::Leo),
    (8, 23, 9, 22, Sign::Virgo),
    (9, 23, 10, 22, Sign::Libra),
    (10, 23, 11, 21, Sign::Scorpio),
    (11, 22, 12, 21, Sign::Sagittarius),
    (12, 22, 1, 19, Sign::Capricorn),
    (1, 20, 2, 18, Sign::Aquarius),
    (2, 19, 3, 20, Sign::Pisces),
];

/// Hour assumed when no birth time is supplied or it fails to parse.
const NEUTRAL_HOUR: u32 = 12;

/// Builds the five-placement reading for a birth date.
///
/// Only the primary placement is exact. The secondary placement is the
/// day-of-year folded into the sign table, the ascendant shifts the
/// primary by half the birth hour, and the last two placements are
/// fixed +4/+8 table offsets. This arithmetic is intentionally coarse;
/// the pattern catalogue is tuned against it, so keep the offsets as
/// they are instead of substituting ephemeris math.
pub fn read_calendar(birth_date: NaiveDate, birth_time: Option<&str>) -> CalendarReading {
    let primary_sign = primary_sign_for(birth_date.month(), birth_date.day());
    let secondary_sign = Sign::ordered()[(birth_date.ordinal() as usize) % 12];

    let hour = birth_time.and_then(parse_hour).unwrap_or(NEUTRAL_HOUR);
    let ascendant_sign = primary_sign.offset((hour / 2) as usize);

    CalendarReading {
        primary: luminary(primary_sign),
        secondary: luminary(secondary_sign),
        ascendant: auxiliary(ascendant_sign),
        expression: auxiliary(primary_sign.offset(4)),
        instinct: auxiliary(primary_sign.offset(8)),
    }
}

fn primary_sign_for(month: u32, day: u32) -> Sign {
    for (start_month, start_day, end_month, end_day, sign) in SIGN_BOUNDARIES {
        let after_start = (month, day) >= (start_month, start_day);
        let before_end = (month, day) <= (end_month, end_day);
        let wraps = (start_month, start_day) > (end_month, end_day);
        if (wraps && (after_start || before_end)) || (!wraps && after_start && before_end) {
            return sign;
        }
    }
    // Every month/day pair falls in exactly one range.
    unreachable!("sign boundary table covers the full year")
}

fn parse_hour(raw: &str) -> Option<u32> {
    let (hour, _minute) = raw.trim().split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    (hour < 24).then_some(hour)
}

fn luminary(sign: Sign) -> Placement {
    Placement {
        sign,
        element: sign.element(),
        modality: Some(sign.modality()),
    }
}

fn auxiliary(sign: Sign) -> Placement {
    Placement {
        sign,
        element: sign.element(),
        modality: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulation::domain::{Element, Modality};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn primary_sign_matches_boundary_table() {
        assert_eq!(read_calendar(date(1990, 7, 15), None).primary.sign, Sign::Cancer);
        assert_eq!(read_calendar(date(1990, 7, 22), None).primary.sign, Sign::Cancer);
        assert_eq!(read_calendar(date(1990, 7, 23), None).primary.sign, Sign::Leo);
        assert_eq!(
            read_calendar(date(1990, 12, 21), None).primary.sign,
            Sign::Sagittarius
        );
    }

    #[test]
    fn wrapping_range_covers_both_sides_of_new_year() {
        assert_eq!(
            read_calendar(date(1990, 12, 22), None).primary.sign,
            Sign::Capricorn
        );
        assert_eq!(
            read_calendar(date(1991, 1, 19), None).primary.sign,
            Sign::Capricorn
        );
        assert_eq!(
            read_calendar(date(1991, 1, 20), None).primary.sign,
            Sign::Aquarius
        );
    }

    #[test]
    fn secondary_folds_day_of_year_into_table() {
        // 1990-07-15 is day 196; 196 % 12 = 4 -> Leo.
        let reading = read_calendar(date(1990, 7, 15), None);
        assert_eq!(reading.secondary.sign, Sign::Leo);
        assert_eq!(reading.secondary.modality, Some(Modality::Fixed));
    }

    #[test]
    fn auxiliary_placements_use_fixed_offsets() {
        let reading = read_calendar(date(1990, 7, 15), None);
        assert_eq!(reading.expression.sign, Sign::Scorpio);
        assert_eq!(reading.instinct.sign, Sign::Pisces);
        assert_eq!(reading.expression.modality, None);
        assert_eq!(reading.instinct.modality, None);
    }

    #[test]
    fn ascendant_shifts_by_half_the_birth_hour() {
        let midday = read_calendar(date(1990, 7, 15), None);
        assert_eq!(midday.ascendant.sign, Sign::Capricorn);

        let morning = read_calendar(date(1990, 7, 15), Some("06:30"));
        assert_eq!(morning.ascendant.sign, Sign::Libra);

        // Garbage times fall back to the neutral hour.
        let garbage = read_calendar(date(1990, 7, 15), Some("late evening"));
        assert_eq!(garbage.ascendant.sign, midday.ascendant.sign);
    }

    #[test]
    fn luminaries_carry_elements() {
        let reading = read_calendar(date(1990, 7, 15), None);
        assert_eq!(reading.primary.element, Element::Water);
        assert!(reading.luminary_element(Element::Water));
        assert!(reading.luminary_element(Element::Fire)); // Leo secondary
        assert!(!reading.luminary_element(Element::Air));
    }
}
