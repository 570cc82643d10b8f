use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JALAALI_DAYS_IN_MONTH, LEAP_YEAR_CYCLE, MAX_DAY,
    MAX_JALAALI_YEAR, MAX_MONTH, MIN_DAY, MIN_JALAALI_YEAR,
};
use crate::leap::LeapRule;
use crate::prelude::*;
use crate::{ConversionError, ParseError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Calendar systems a date can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Calendar {
    /// Proleptic Gregorian calendar
    Gregorian,
    /// Proleptic Julian calendar
    Julian,
    /// Persian solar calendar
    Jalaali,
}

/// Selects the reckoning used when converting between a Julian Day Number
/// and a (year, month, day) triple of the Western calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Reckoning {
    Julian,
    Gregorian,
}

impl From<Reckoning> for Calendar {
    fn from(reckoning: Reckoning) -> Self {
        match reckoning {
            Reckoning::Julian => Self::Julian,
            Reckoning::Gregorian => Self::Gregorian,
        }
    }
}

/// The twelve months of the Jalaali year, numbered from 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum MonthName {
    Farvardin = 1,
    Ordibehesht,
    Khordad,
    Tir,
    Mordad,
    Shahrivar,
    Mehr,
    Aban,
    Azar,
    Dey,
    Bahman,
    Esfand,
}

impl MonthName {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::Farvardin,
        Self::Ordibehesht,
        Self::Khordad,
        Self::Tir,
        Self::Mordad,
        Self::Shahrivar,
        Self::Mehr,
        Self::Aban,
        Self::Azar,
        Self::Dey,
        Self::Bahman,
        Self::Esfand,
    ];

    /// Returns the month number (1 for Farvardin through 12 for Esfand)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Canonical capitalized name of the month
    pub const fn name(self) -> &'static str {
        match self {
            Self::Farvardin => "Farvardin",
            Self::Ordibehesht => "Ordibehesht",
            Self::Khordad => "Khordad",
            Self::Tir => "Tir",
            Self::Mordad => "Mordad",
            Self::Shahrivar => "Shahrivar",
            Self::Mehr => "Mehr",
            Self::Aban => "Aban",
            Self::Azar => "Azar",
            Self::Dey => "Dey",
            Self::Bahman => "Bahman",
            Self::Esfand => "Esfand",
        }
    }

    /// Length of the month in a common (`leap == false`) or leap Jalaali year
    pub const fn days(self, leap: bool) -> u8 {
        if leap && matches!(self, Self::Esfand) {
            ESFAND_DAYS_LEAP
        } else {
            JALAALI_DAYS_IN_MONTH[self as usize]
        }
    }
}

impl TryFrom<u8> for MonthName {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 1 || value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self::ALL[usize::from(value - 1)])
    }
}

impl From<MonthName> for u8 {
    fn from(month: MonthName) -> Self {
        month.number()
    }
}

impl FromStr for MonthName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Self::ALL
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownMonth(trimmed.to_owned()))
    }
}

/// A (year, month, day) triple in some calendar.
///
/// The value itself does not know which calendar it belongs to; conversions
/// validate it against the calendar they read it as. Years are astronomical,
/// so 1 BC is `0`, 2 BC is `-1`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Builds a date from the wide integers the day-count formulas work in.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) const fn from_components(year: i64, month: i64, day: i64) -> Self {
        // Callers only pass day numbers inside the supported bands, where
        // every component fits.
        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Jalaali month name, when this date is read as a Jalaali date
    pub fn month_name(self) -> Option<MonthName> {
        MonthName::try_from(self.month).ok()
    }

    /// Checks that the date exists in `calendar`.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` for a Jalaali year the leap rule
    /// does not cover, and `ConversionError::InvalidDate` when the month or day
    /// does not exist.
    pub fn validate(self, calendar: Calendar) -> Result<Self, ConversionError> {
        if calendar == Calendar::Jalaali && !is_supported_jalaali_year(self.year) {
            return Err(ConversionError::OutOfRange {
                calendar,
                year: self.year,
            });
        }

        let invalid = ConversionError::InvalidDate {
            calendar,
            year: self.year,
            month: self.month,
            day: self.day,
        };
        if self.month < 1 || self.month > MAX_MONTH {
            return Err(invalid);
        }
        if self.day < MIN_DAY || self.day > month_length(calendar, self.year, self.month) {
            return Err(invalid);
        }
        Ok(self)
    }
}

impl From<(i32, u8, u8)> for CalendarDate {
    fn from((year, month, day): (i32, u8, u8)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (i32, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY-MM-DD, found {} component(s) in {trimmed}",
                parts.len()
            )));
        }

        let magnitude = parse_digits::<i32>(parts[0])?;
        let year = if negative { -magnitude } else { magnitude };
        let month = parse_digits::<u8>(parts[1])?;
        let day = parse_digits::<u8>(parts[2])?;

        if month < 1 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > MAX_DAY {
            return Err(ParseError::InvalidDay(day));
        }

        Ok(Self::new(year, month, day))
    }
}

/// Parses an unsigned run of ASCII digits; signs and whitespace are rejected.
fn parse_digits<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn is_julian_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0
}

pub(crate) const fn is_supported_jalaali_year(year: i32) -> bool {
    year >= MIN_JALAALI_YEAR && year <= MAX_JALAALI_YEAR
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` for an unsupported Jalaali year and
/// `ConversionError::InvalidDate` for a month outside 1-12.
pub fn days_in_month(calendar: Calendar, year: i32, month: u8) -> Result<u8, ConversionError> {
    CalendarDate::new(year, month, MIN_DAY).validate(calendar)?;
    Ok(month_length(calendar, year, month))
}

pub(crate) const fn month_length(calendar: Calendar, year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    match calendar {
        Calendar::Gregorian if month == FEBRUARY && is_gregorian_leap_year(year) => {
            FEBRUARY_DAYS_LEAP
        }
        Calendar::Julian if month == FEBRUARY && is_julian_leap_year(year) => FEBRUARY_DAYS_LEAP,
        Calendar::Gregorian | Calendar::Julian => DAYS_IN_MONTH[month as usize],
        Calendar::Jalaali if month == ESFAND && LeapRule::compute(year).is_leap() => {
            ESFAND_DAYS_LEAP
        }
        Calendar::Jalaali => JALAALI_DAYS_IN_MONTH[month as usize],
    }
}
