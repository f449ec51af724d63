// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible conversion in the crate.

/// Errors raised by Hebrew calendar construction and conversion.
///
/// Every variant is a domain error: the computation is deterministic, so
/// retrying with the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A year, month or day lies outside its structural range
    /// (`year >= 1`, `month` in `1..=13`, `day` in `1..=30`).
    #[error("invalid Hebrew date: year {year}, month {month}, day {day}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month number that was provided.
        month: u8,
        /// The day number that was provided.
        day: u8,
    },

    /// A year outside `1..=YEAR_MAX`.
    #[error("invalid Hebrew year: {year} (must be at least 1)")]
    InvalidYear {
        /// The year that was provided.
        year: i32,
    },

    /// A month number outside `1..=13`.
    #[error("invalid month: {month} (must be 1..=13)")]
    InvalidMonth {
        /// The month number that was provided.
        month: u8,
    },

    /// The month exists structurally but not in the given year
    /// (Adar I in a non-leap year).
    #[error("month {month} does not exist in year {year}")]
    MonthNotInYear {
        /// The year whose leap status excludes the month.
        year: i32,
        /// The month number that was requested.
        month: u8,
    },

    /// The serial day number is on or before the day preceding Tishrei 1 of year 1.
    #[error("serial day number {sdn} is before the first Hebrew year")]
    SdnBeforeEpoch {
        /// The rejected serial day number.
        sdn: i64,
    },

    /// The serial day number is after the last day of the largest supported year.
    #[error("serial day number {sdn} is beyond the last supported Hebrew year")]
    SdnOutOfRange {
        /// The rejected serial day number.
        sdn: i64,
    },

    /// The serial day number cannot be represented as a `chrono::NaiveDate`.
    #[error("serial day number {sdn} is outside the Gregorian range")]
    GregorianOutOfRange {
        /// The serial day number that could not be converted.
        sdn: i64,
    },
}
