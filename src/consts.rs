/// Jalaali years at which the length of the 33-year leap cycle changes.
///
/// The first and last entries bound the years the leap rule is valid for.
pub const BREAK_POINTS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394,
    2456, 3178,
];

/// Earliest supported Jalaali year (inclusive)
pub const MIN_JALAALI_YEAR: i32 = BREAK_POINTS[0];
/// Latest supported Jalaali year (inclusive)
pub const MAX_JALAALI_YEAR: i32 = BREAK_POINTS[BREAK_POINTS.len() - 1] - 1;

/// Offset between a Jalaali year and the Gregorian year its Nowruz falls in
pub const NOWRUZ_YEAR_OFFSET: i32 = 621;

/// JDN of Farvardin 1, year `MIN_JALAALI_YEAR` (Gregorian 560-03-20)
pub const FIRST_SUPPORTED_JDN: i64 = 1_925_675;
/// JDN of the last day of year `MAX_JALAALI_YEAR` (Gregorian 3799-03-19)
pub const LAST_SUPPORTED_JDN: i64 = 3_108_694;

/// First day the Gregorian formulas are exact for (Gregorian -100100-03-01)
pub const MIN_GREGORIAN_JDN: i64 = -34_839_655;
/// Last supported Gregorian day (Gregorian 1000000-12-31)
pub const MAX_GREGORIAN_JDN: i64 = 366_963_925;
/// First day the Julian formulas are exact for (Julian -100100-03-01)
pub const MIN_JULIAN_CALENDAR_JDN: i64 = -34_840_407;
/// Last supported Julian-calendar day (Julian 1000000-12-31)
pub const MAX_JULIAN_CALENDAR_JDN: i64 = 366_971_423;

/// Lower bound of any Julian Day Number (union of both reckonings)
pub const MIN_JULIAN_DAY: i64 = MIN_JULIAN_CALENDAR_JDN;
/// Upper bound of any Julian Day Number (union of both reckonings)
pub const MAX_JULIAN_DAY: i64 = MAX_JULIAN_CALENDAR_JDN;

/// Maximum valid month
pub const MAX_MONTH: u8 = 12;
/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Longest month in any supported calendar
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, the month Nowruz falls in
pub const MARCH: u8 = 3;
/// Month number for Esfand, the only Jalaali month with leap-dependent length
pub const ESFAND: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Gregorian/Julian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in each Jalaali month (index 0 is unused)
/// Esfand shows 29 days (common year default)
pub const JALAALI_DAYS_IN_MONTH: [u8; 13] = [0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
