//! Julian Day Numbers and the Hatcher/Borkowski conversion formulas.
//!
//! The formulas are exact for each reckoning from 1 March -100100 of that
//! reckoning to the end of year 1000000. A day number corresponds to the
//! noon of its date.

use crate::consts::{
    FIRST_SUPPORTED_JDN, LAST_SUPPORTED_JDN, MAX_GREGORIAN_JDN, MAX_JULIAN_CALENDAR_JDN,
    MAX_JULIAN_DAY, MIN_GREGORIAN_JDN, MIN_JULIAN_CALENDAR_JDN, MIN_JULIAN_DAY,
};
use crate::prelude::*;
use crate::types::Reckoning;
use crate::{Calendar, CalendarDate, ConversionError, jalaali};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Offset that keeps every year in the formulas' band positive
const YEAR_SHIFT: i64 = 100_100;
/// Days in four Julian years
const DAYS_PER_JULIAN_QUAD: i64 = 1461;
/// Days in four Gregorian centuries
const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;

/// A continuous day count used as the pivot between calendars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct JulianDay(i64);

impl JulianDay {
    /// Wraps a day number, checking it against the union of both
    /// reckonings' bands.
    ///
    /// # Errors
    /// Returns `ConversionError::JulianDayOutOfRange` outside
    /// `MIN_JULIAN_DAY..=MAX_JULIAN_DAY`.
    pub const fn new(value: i64) -> Result<Self, ConversionError> {
        if value < MIN_JULIAN_DAY || value > MAX_JULIAN_DAY {
            return Err(ConversionError::JulianDayOutOfRange(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day number of a Gregorian or Julian date.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` if the date does not exist in
    /// the chosen reckoning and `ConversionError::OutOfRange` if it lies
    /// outside that reckoning's band.
    pub fn from_calendar(
        date: CalendarDate,
        reckoning: Reckoning,
    ) -> Result<Self, ConversionError> {
        let calendar = Calendar::from(reckoning);
        let date = date.validate(calendar)?;
        let jdn = to_jdn(
            i64::from(date.year()),
            i64::from(date.month()),
            i64::from(date.day()),
            reckoning,
        );
        if !in_band(jdn, reckoning) {
            return Err(ConversionError::OutOfRange {
                calendar,
                year: date.year(),
            });
        }
        Ok(Self(jdn))
    }

    /// Gregorian or Julian date of this day.
    ///
    /// # Errors
    /// Returns `ConversionError::JulianDayOutOfRange` when the day lies
    /// outside the band of `reckoning`; the two bands differ by 752 days at
    /// the lower end and 7498 days at the upper end.
    pub fn to_calendar(self, reckoning: Reckoning) -> Result<CalendarDate, ConversionError> {
        if !in_band(self.0, reckoning) {
            return Err(ConversionError::JulianDayOutOfRange(self.0));
        }
        Ok(from_jdn(self.0, reckoning))
    }

    /// Day number of a Jalaali date.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` for a year outside the
    /// break-point table and `ConversionError::InvalidDate` for a month or
    /// day that does not exist in that year.
    pub fn from_jalaali(date: CalendarDate) -> Result<Self, ConversionError> {
        let date = date.validate(Calendar::Jalaali)?;
        Ok(Self(jalaali::to_jdn(date.year(), date.month(), date.day())))
    }

    /// Jalaali date of this day.
    ///
    /// # Errors
    /// Returns `ConversionError::JulianDayOutOfRange` when the day falls
    /// outside the Jalaali years the leap rule covers.
    pub fn to_jalaali(self) -> Result<CalendarDate, ConversionError> {
        if self.0 < FIRST_SUPPORTED_JDN || self.0 > LAST_SUPPORTED_JDN {
            return Err(ConversionError::JulianDayOutOfRange(self.0));
        }
        Ok(jalaali::from_jdn(self.0))
    }

    /// Moves by `days`, returning `None` when leaving `MIN_JULIAN_DAY..=MAX_JULIAN_DAY`.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        (self + days).ok()
    }
}

impl TryFrom<i64> for JulianDay {
    type Error = ConversionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JulianDay> for i64 {
    fn from(day: JulianDay) -> Self {
        day.0
    }
}

/// Moves by a number of days.
///
/// Fails with `ConversionError::JulianDayOutOfRange` when the result leaves
/// `MIN_JULIAN_DAY..=MAX_JULIAN_DAY`; an `i64` overflow reports the
/// saturated value.
impl Add<i64> for JulianDay {
    type Output = Result<Self, ConversionError>;

    fn add(self, days: i64) -> Self::Output {
        Self::new(self.0.saturating_add(days))
    }
}

/// Days between two day numbers
impl Sub for JulianDay {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// Whether the formulas of `reckoning` are exact for `jdn`
const fn in_band(jdn: i64, reckoning: Reckoning) -> bool {
    let (min, max) = match reckoning {
        Reckoning::Gregorian => (MIN_GREGORIAN_JDN, MAX_GREGORIAN_JDN),
        Reckoning::Julian => (MIN_JULIAN_CALENDAR_JDN, MAX_JULIAN_CALENDAR_JDN),
    };
    jdn >= min && jdn <= max
}

/// Day number of a (year, month, day) triple.
///
/// Years are astronomical (1 BC is `0`). No validation is done; the result is
/// exact for every valid date from 1 March -100100 onwards.
pub(crate) const fn to_jdn(year: i64, month: i64, day: i64, reckoning: Reckoning) -> i64 {
    let mut jdn = (year + (month - 8) / 6 + YEAR_SHIFT) * DAYS_PER_JULIAN_QUAD / 4
        + (153 * ((month + 9) % 12) + 2) / 5
        + day
        - 34_840_408;
    if matches!(reckoning, Reckoning::Gregorian) {
        jdn = jdn - (year + YEAR_SHIFT + (month - 8) / 6) / 100 * 3 / 4 + 752;
    }
    jdn
}

/// Inverse of [`to_jdn`] for day numbers in the converter's band.
pub(crate) const fn from_jdn(jdn: i64, reckoning: Reckoning) -> CalendarDate {
    let mut j = 4 * jdn + 139_361_631;
    if matches!(reckoning, Reckoning::Gregorian) {
        j = j + (4 * jdn + 183_187_720) / DAYS_PER_GREGORIAN_CYCLE * 3 / 4 * 4 - 3908;
    }
    let i = j % DAYS_PER_JULIAN_QUAD / 4 * 5 + 308;
    let day = i % 153 / 5 + 1;
    let month = i / 153 % 12 + 1;
    let year = j / DAYS_PER_JULIAN_QUAD - YEAR_SHIFT + (8 - month) / 6;
    CalendarDate::from_components(year, month, day)
}
