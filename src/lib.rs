#![doc = include_str!("../README.md")]

mod consts;
mod jalaali;
mod julian_day;
mod leap;
mod prelude;
mod types;

pub use consts::*;
pub use jalaali::{is_jalaali_leap_year, jalaali_days_in_month};
pub use julian_day::JulianDay;
pub use leap::{LeapRule, nowruz};
pub use types::{
    Calendar, CalendarDate, MonthName, Reckoning, days_in_month, is_gregorian_leap_year,
    is_julian_leap_year,
};

use crate::prelude::*;

/// Error type for textual dates and month names.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {} (must be 1-{})", "_0", MAX_DAY)]
    InvalidDay(u8),
    #[display(fmt = "Unknown month name: {_0}")]
    UnknownMonth(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for calendar conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ConversionError {
    /// Year outside the band the conversion is exact for.
    #[error("{calendar} year {year} is outside the supported range")]
    OutOfRange { calendar: Calendar, year: i32 },

    /// Month or day that does not exist in the calendar.
    #[error("Invalid {calendar} date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        calendar: Calendar,
        year: i32,
        month: u8,
        day: u8,
    },

    /// Day number outside the band of the requested conversion.
    #[error("Julian day {0} is outside the supported range")]
    JulianDayOutOfRange(i64),
}

/// Converts a Jalaali date to the Gregorian calendar.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` for a year outside
/// `MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR` and `ConversionError::InvalidDate`
/// for a month or day that does not exist in that year.
///
/// # Example
///
/// ```
/// let date = roozh::persian_to_gregorian(1397, 1, 1).unwrap();
/// assert_eq!(date.to_string(), "2018-03-21");
/// ```
pub fn persian_to_gregorian(
    year: i32,
    month: u8,
    day: u8,
) -> Result<CalendarDate, ConversionError> {
    from_persian(CalendarDate::new(year, month, day), Reckoning::Gregorian)
}

/// Converts a Gregorian date to the Jalaali calendar.
///
/// # Errors
/// Returns `ConversionError::InvalidDate` for a date that does not exist and
/// `ConversionError::OutOfRange` for a date outside the Jalaali years the
/// leap rule covers (Gregorian 560-03-20 to 3799-03-19).
///
/// # Example
///
/// ```
/// let date = roozh::gregorian_to_persian(2018, 3, 21).unwrap();
/// assert_eq!(date.to_string(), "1397-01-01");
/// ```
pub fn gregorian_to_persian(
    year: i32,
    month: u8,
    day: u8,
) -> Result<CalendarDate, ConversionError> {
    to_persian(CalendarDate::new(year, month, day), Reckoning::Gregorian)
}

/// Converts a Jalaali date to the proleptic Julian calendar.
///
/// # Errors
/// Same as [`persian_to_gregorian`].
pub fn persian_to_julian(
    year: i32,
    month: u8,
    day: u8,
) -> Result<CalendarDate, ConversionError> {
    from_persian(CalendarDate::new(year, month, day), Reckoning::Julian)
}

/// Converts a proleptic Julian date to the Jalaali calendar.
///
/// # Errors
/// Same as [`gregorian_to_persian`], with the band expressed in Julian dates.
pub fn julian_to_persian(
    year: i32,
    month: u8,
    day: u8,
) -> Result<CalendarDate, ConversionError> {
    to_persian(CalendarDate::new(year, month, day), Reckoning::Julian)
}

fn from_persian(
    date: CalendarDate,
    reckoning: Reckoning,
) -> Result<CalendarDate, ConversionError> {
    let day = JulianDay::from_jalaali(date).inspect_err(|err| {
        log::debug!("rejected Jalaali date {date}: {err}");
    })?;
    let converted = day.to_calendar(reckoning)?;
    log::trace!("Jalaali {date} -> {reckoning} {converted} (JDN {day})");
    Ok(converted)
}

fn to_persian(date: CalendarDate, reckoning: Reckoning) -> Result<CalendarDate, ConversionError> {
    let calendar = Calendar::from(reckoning);
    let converted = JulianDay::from_calendar(date, reckoning)
        .and_then(JulianDay::to_jalaali)
        .map_err(|err| match err {
            ConversionError::JulianDayOutOfRange(_) => ConversionError::OutOfRange {
                calendar,
                year: date.year(),
            },
            other => other,
        })
        .inspect_err(|err| {
            log::debug!("rejected {calendar} date {date}: {err}");
        })?;
    log::trace!("{calendar} {date} -> Jalaali {converted}");
    Ok(converted)
}
