//! Jalaali dates to and from Julian Day Numbers.

use crate::consts::{MARCH, NOWRUZ_YEAR_OFFSET};
use crate::julian_day;
use crate::leap::LeapRule;
use crate::types::{Reckoning, month_length};
use crate::{Calendar, CalendarDate, ConversionError, MonthName};

/// Days in the first six (31-day) months
const FIRST_HALF_DAYS: i64 = 186;
/// Days from Mehr 1 to the next Farvardin 1 in a common year
const SECOND_HALF_OFFSET: i64 = 179;

/// Day number of a Jalaali date; the caller validates the date.
pub(crate) fn to_jdn(year: i32, month: u8, day: u8) -> i64 {
    let rule = LeapRule::compute(year);
    let month = i64::from(month);
    nowruz_jdn(&rule) + (month - 1) * 31 - month / 7 * (month - 7) + i64::from(day) - 1
}

/// Jalaali date of a day number inside the supported band.
pub(crate) fn from_jdn(jdn: i64) -> CalendarDate {
    let gregorian_year = julian_day::from_jdn(jdn, Reckoning::Gregorian).year();
    let mut year = gregorian_year - NOWRUZ_YEAR_OFFSET;
    let rule = LeapRule::compute(year);

    // Days since Farvardin 1 of `year`
    let mut k = jdn - nowruz_jdn(&rule);
    if k >= 0 {
        if k < FIRST_HALF_DAYS {
            return CalendarDate::from_components(i64::from(year), 1 + k / 31, k % 31 + 1);
        }
        k -= FIRST_HALF_DAYS;
    } else {
        // Still in the previous year, which was leap if this one is the
        // first after a leap year.
        year -= 1;
        k += SECOND_HALF_OFFSET;
        if rule.years_since_last_leap == 1 {
            k += 1;
        }
    }
    CalendarDate::from_components(i64::from(year), 7 + k / 30, k % 30 + 1)
}

fn nowruz_jdn(rule: &LeapRule) -> i64 {
    julian_day::to_jdn(
        i64::from(rule.gregorian_nowruz_year),
        i64::from(MARCH),
        i64::from(rule.nowruz_march_day),
        Reckoning::Gregorian,
    )
}

/// Whether Esfand of `year` has 30 days.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` for a year outside the break-point
/// table.
pub fn is_jalaali_leap_year(year: i32) -> Result<bool, ConversionError> {
    LeapRule::for_year(year).map(|rule| rule.is_leap())
}

/// Number of days in `month` of Jalaali `year`.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` for an unsupported year.
pub fn jalaali_days_in_month(year: i32, month: MonthName) -> Result<u8, ConversionError> {
    LeapRule::for_year(year)?;
    Ok(month_length(Calendar::Jalaali, year, month.number()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{
        FIRST_SUPPORTED_JDN, LAST_SUPPORTED_JDN, MAX_JALAALI_YEAR, MIN_JALAALI_YEAR,
    };

    fn jalaali(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day)
    }

    #[test]
    fn test_nowruz_1397() {
        let jdn = to_jdn(1397, 1, 1);
        assert_eq!(
            julian_day::from_jdn(jdn, Reckoning::Gregorian),
            CalendarDate::new(2018, 3, 21)
        );
        assert_eq!(from_jdn(jdn), jalaali(1397, 1, 1));
    }

    #[test]
    fn test_month_offsets() {
        let nowruz = to_jdn(1400, 1, 1);
        assert_eq!(to_jdn(1400, 2, 1) - nowruz, 31);
        assert_eq!(to_jdn(1400, 6, 31) - nowruz, 185);
        assert_eq!(to_jdn(1400, 7, 1) - nowruz, 186);
        assert_eq!(to_jdn(1400, 8, 1) - nowruz, 216);
        assert_eq!(to_jdn(1400, 12, 1) - nowruz, 336);
        assert_eq!(to_jdn(1401, 1, 1) - nowruz, 365);
    }

    #[test]
    fn test_leap_esfand_successor() {
        let esfand_30 = to_jdn(1399, 12, 30);
        assert_eq!(from_jdn(esfand_30), jalaali(1399, 12, 30));
        assert_eq!(from_jdn(esfand_30 + 1), jalaali(1400, 1, 1));
        assert_eq!(from_jdn(to_jdn(1400, 12, 29) + 1), jalaali(1401, 1, 1));
    }

    #[test]
    fn test_days_before_nowruz_belong_to_previous_year() {
        // Gregorian 2024-03-19 is Esfand 29, 1402; 2024-03-20 is Nowruz 1403.
        let day = julian_day::to_jdn(2024, 3, 19, Reckoning::Gregorian);
        assert_eq!(from_jdn(day), jalaali(1402, 12, 29));
        assert_eq!(from_jdn(day + 1), jalaali(1403, 1, 1));
        // Gregorian January dates fall in Dey.
        let day = julian_day::to_jdn(2000, 1, 1, Reckoning::Gregorian);
        assert_eq!(from_jdn(day), jalaali(1378, 10, 11));
    }

    #[test]
    fn test_round_trip_whole_band() {
        let mut previous: Option<CalendarDate> = None;
        for jdn in FIRST_SUPPORTED_JDN..=LAST_SUPPORTED_JDN {
            let date = from_jdn(jdn);
            assert!(date.validate(Calendar::Jalaali).is_ok(), "{date} is not a valid date");
            assert_eq!(to_jdn(date.year(), date.month(), date.day()), jdn, "{date}");
            if let Some(prev) = previous {
                assert!(prev < date, "{prev} !< {date}");
            }
            previous = Some(date);
        }
    }

    #[test]
    fn test_leap_consistency() {
        for year in MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR {
            let leap = is_jalaali_leap_year(year).unwrap();
            let last_day = to_jdn(year, 12, 29) + 1;
            let successor = from_jdn(last_day);
            if leap {
                assert_eq!(successor, jalaali(year, 12, 30), "{year} should be leap");
            } else {
                assert_eq!(successor, jalaali(year + 1, 1, 1), "{year} should be common");
            }
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(jalaali_days_in_month(1399, MonthName::Esfand).unwrap(), 30);
        assert_eq!(jalaali_days_in_month(1400, MonthName::Esfand).unwrap(), 29);
        assert_eq!(jalaali_days_in_month(1400, MonthName::Farvardin).unwrap(), 31);
        assert_eq!(jalaali_days_in_month(1400, MonthName::Mehr).unwrap(), 30);
        assert!(jalaali_days_in_month(3178, MonthName::Mehr).is_err());
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_jalaali_leap_year(1399).unwrap());
        assert!(!is_jalaali_leap_year(1400).unwrap());
        assert!(matches!(
            is_jalaali_leap_year(-62),
            Err(ConversionError::OutOfRange { .. })
        ));
    }
}
