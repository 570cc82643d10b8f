//! Jalaali intercalation by the 33-year break-point rule.
//!
//! The Persian calendar inserts eight leap days per 33 years, but the cycle
//! is realigned at the years listed in [`BREAK_POINTS`]. Walking that table
//! yields how many leap days have accumulated before a given year, which in
//! turn fixes the day of March its Nowruz falls on.

use crate::consts::{BREAK_POINTS, MARCH, NOWRUZ_YEAR_OFFSET};
use crate::types::is_supported_jalaali_year;
use crate::{Calendar, CalendarDate, ConversionError};

/// Length of the regular intercalation cycle in years
const CYCLE_YEARS: i32 = 33;
/// Leap days inserted per full cycle
const LEAP_DAYS_PER_CYCLE: i32 = 8;
/// Jalaali leap days counted before the first break point
const JALAALI_LEAP_OFFSET: i32 = -14;
/// Gregorian leap days counted before year 621
const GREGORIAN_LEAP_OFFSET: i32 = 150;
/// Earliest day of March a Nowruz is counted from
const NOWRUZ_BASE_MARCH_DAY: i32 = 20;

/// Leap status and Nowruz placement of one Jalaali year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeapRule {
    /// Years elapsed since the last leap year (0 to 4); 0 marks a leap year
    pub years_since_last_leap: i32,
    /// Gregorian year in which the Jalaali year begins
    pub gregorian_nowruz_year: i32,
    /// Day of March on which Farvardin 1 falls
    pub nowruz_march_day: i32,
}

impl LeapRule {
    /// Computes the leap rule for a supported Jalaali year.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` if the year is outside the
    /// break-point table.
    pub fn for_year(jalaali_year: i32) -> Result<Self, ConversionError> {
        if !is_supported_jalaali_year(jalaali_year) {
            log::debug!("no leap rule for Jalaali year {jalaali_year}");
            return Err(ConversionError::OutOfRange {
                calendar: Calendar::Jalaali,
                year: jalaali_year,
            });
        }
        Ok(Self::compute(jalaali_year))
    }

    /// Walks the break-point table without checking the year.
    ///
    /// Only meaningful for years in `MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR + 1`;
    /// `/` and `%` truncate toward zero, which the final normalization
    /// relies on.
    pub(crate) const fn compute(jalaali_year: i32) -> Self {
        let mut leap_j = JALAALI_LEAP_OFFSET;
        let mut jp = BREAK_POINTS[0];
        let mut jump = 0;

        let mut j = 1;
        while j < BREAK_POINTS.len() {
            let jm = BREAK_POINTS[j];
            jump = jm - jp;
            if jalaali_year < jm {
                break;
            }
            leap_j += jump / CYCLE_YEARS * LEAP_DAYS_PER_CYCLE + jump % CYCLE_YEARS / 4;
            jp = jm;
            j += 1;
        }

        // Years into the cycle containing `jalaali_year`
        let mut n = jalaali_year - jp;
        leap_j += n / CYCLE_YEARS * LEAP_DAYS_PER_CYCLE + (n % CYCLE_YEARS + 3) / 4;
        if jump % CYCLE_YEARS == 4 && jump - n == 4 {
            leap_j += 1;
        }

        let gregorian_year = jalaali_year + NOWRUZ_YEAR_OFFSET;
        let leap_g =
            gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - GREGORIAN_LEAP_OFFSET;
        let nowruz_march_day = NOWRUZ_BASE_MARCH_DAY + leap_j - leap_g;

        if jump - n < 6 {
            n = n - jump + (jump + 4) / CYCLE_YEARS * CYCLE_YEARS;
        }
        let mut years_since_last_leap = ((n + 1) % CYCLE_YEARS - 1) % 4;
        if years_since_last_leap == -1 {
            years_since_last_leap = 4;
        }

        Self {
            years_since_last_leap,
            gregorian_nowruz_year: gregorian_year,
            nowruz_march_day,
        }
    }

    /// Whether the year is leap, i.e. Esfand has 30 days
    #[inline]
    pub const fn is_leap(&self) -> bool {
        self.years_since_last_leap == 0
    }

    /// Gregorian date of Farvardin 1
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn nowruz(&self) -> CalendarDate {
        // Nowruz always falls between March 18 and March 23.
        CalendarDate::new(
            self.gregorian_nowruz_year,
            MARCH,
            self.nowruz_march_day as u8,
        )
    }
}

/// Gregorian date of Nowruz (Farvardin 1) of a Jalaali year.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` for an unsupported Jalaali year.
pub fn nowruz(jalaali_year: i32) -> Result<CalendarDate, ConversionError> {
    LeapRule::for_year(jalaali_year).map(|rule| rule.nowruz())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_JALAALI_YEAR, MIN_JALAALI_YEAR};

    #[test]
    fn test_known_leap_years() {
        let leap_years: Vec<i32> = (1390..1410)
            .filter(|&year| LeapRule::compute(year).is_leap())
            .collect();
        assert_eq!(leap_years, vec![1391, 1395, 1399, 1403, 1408]);
    }

    #[test]
    fn test_1399_is_leap() {
        let rule = LeapRule::for_year(1399).unwrap();
        assert_eq!(rule.years_since_last_leap, 0);
        assert!(rule.is_leap());
        assert_eq!(rule.gregorian_nowruz_year, 2020);
        assert_eq!(rule.nowruz_march_day, 20);
    }

    #[test]
    fn test_years_since_last_leap() {
        struct TestCase {
            year: i32,
            years_since_last_leap: i32,
        }

        let cases = [
            TestCase {
                year: 1395,
                years_since_last_leap: 0,
            },
            TestCase {
                year: 1396,
                years_since_last_leap: 1,
            },
            TestCase {
                year: 1397,
                years_since_last_leap: 2,
            },
            TestCase {
                year: 1398,
                years_since_last_leap: 3,
            },
            TestCase {
                year: 1404,
                years_since_last_leap: 1,
            },
            TestCase {
                year: 1407,
                years_since_last_leap: 4,
            },
            TestCase {
                year: 3177,
                years_since_last_leap: 4,
            },
        ];

        for case in &cases {
            assert_eq!(
                LeapRule::compute(case.year).years_since_last_leap,
                case.years_since_last_leap,
                "Jalaali year {}",
                case.year
            );
        }
    }

    #[test]
    fn test_nowruz_dates() {
        assert_eq!(nowruz(1397).unwrap(), CalendarDate::new(2018, 3, 21));
        assert_eq!(nowruz(1399).unwrap(), CalendarDate::new(2020, 3, 20));
        assert_eq!(nowruz(1404).unwrap(), CalendarDate::new(2025, 3, 21));
        assert_eq!(nowruz(1).unwrap(), CalendarDate::new(622, 3, 22));
        assert_eq!(nowruz(MIN_JALAALI_YEAR).unwrap(), CalendarDate::new(560, 3, 20));
        assert_eq!(nowruz(MAX_JALAALI_YEAR).unwrap(), CalendarDate::new(3798, 3, 20));
    }

    #[test]
    fn test_nowruz_stays_in_march_window() {
        for year in MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR {
            let rule = LeapRule::compute(year);
            assert!(
                (18..=23).contains(&rule.nowruz_march_day),
                "Nowruz of {year} on March {}",
                rule.nowruz_march_day
            );
            assert!((0..=4).contains(&rule.years_since_last_leap));
        }
    }

    #[test]
    fn test_leap_years_per_cycle() {
        // A regular 33-year stretch holds 8 leap years.
        let count = (1343..1376)
            .filter(|&year| LeapRule::compute(year).is_leap())
            .count();
        assert_eq!(count, 8);
    }

    #[test]
    fn test_leap_years_are_separated() {
        let mut previous: Option<i32> = None;
        for year in MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR {
            if LeapRule::compute(year).is_leap() {
                if let Some(prev) = previous {
                    let gap = year - prev;
                    assert!(gap == 4 || gap == 5, "gap of {gap} before {year}");
                }
                previous = Some(year);
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            LeapRule::for_year(MIN_JALAALI_YEAR - 1),
            Err(ConversionError::OutOfRange {
                calendar: Calendar::Jalaali,
                year: -62
            })
        ));
        assert!(LeapRule::for_year(MAX_JALAALI_YEAR + 1).is_err());
        assert!(LeapRule::for_year(MIN_JALAALI_YEAR).is_ok());
        assert!(LeapRule::for_year(MAX_JALAALI_YEAR).is_ok());
        assert!(nowruz(i32::MAX).is_err());
    }
}
