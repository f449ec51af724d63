// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew months, numbered from Tishrei.
//!
//! | # | Month | # | Month |
//! |---|-------|---|-------|
//! | 1 | Tishrei | 8 | Nisan |
//! | 2 | Cheshvan | 9 | Iyar |
//! | 3 | Kislev | 10 | Sivan |
//! | 4 | Tevet | 11 | Tamuz |
//! | 5 | Shevat | 12 | Av |
//! | 6 | Adar I (leap years only) | 13 | Elul |
//! | 7 | Adar II, or plain Adar in a common year | | |
//!
//! Slot 7 is the same month in every year; only its name changes.

use crate::error::CalendarError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A month of the Hebrew year.
///
/// With the `serde` feature a month serializes as its number, the same form
/// it takes inside a serialized `JewishDate`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[repr(u8)]
pub enum Month {
    Tishrei = 1,
    Cheshvan = 2,
    Kislev = 3,
    Tevet = 4,
    Shevat = 5,
    AdarI = 6,
    AdarII = 7,
    Nisan = 8,
    Iyar = 9,
    Sivan = 10,
    Tamuz = 11,
    Av = 12,
    Elul = 13,
}

const ENGLISH_NAMES: [&str; 13] = [
    "Tishrei", "Cheshvan", "Kislev", "Tevet", "Shevat", "Adar I", "Adar II", "Nisan", "Iyar",
    "Sivan", "Tamuz", "Av", "Elul",
];

const HEBREW_NAMES: [&str; 13] = [
    "תשרי",
    "חשוון",
    "כסלו",
    "טבת",
    "שבט",
    "אדר א'",
    "אדר ב'",
    "ניסן",
    "אייר",
    "סיוון",
    "תמוז",
    "אב",
    "אלול",
];

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 13] = [
        Month::Tishrei,
        Month::Cheshvan,
        Month::Kislev,
        Month::Tevet,
        Month::Shevat,
        Month::AdarI,
        Month::AdarII,
        Month::Nisan,
        Month::Iyar,
        Month::Sivan,
        Month::Tamuz,
        Month::Av,
        Month::Elul,
    ];

    /// Month for a number in `1..=13`.
    #[inline]
    pub const fn from_number(number: u8) -> Option<Self> {
        if number >= 1 && number <= 13 {
            Some(Self::ALL[number as usize - 1])
        } else {
            None
        }
    }

    /// The month's number, `1..=13`.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Whether the month exists in a year with the given leap status.
    #[inline]
    pub const fn occurs_in(self, is_leap_year: bool) -> bool {
        is_leap_year || !matches!(self, Month::AdarI)
    }

    /// English display name. Slot 7 is "Adar" in common years.
    pub const fn english_name(self, is_leap_year: bool) -> &'static str {
        match self {
            Month::AdarII if !is_leap_year => "Adar",
            _ => ENGLISH_NAMES[self as usize - 1],
        }
    }

    /// Hebrew display name. Slot 7 is "אדר" in common years.
    pub const fn hebrew_name(self, is_leap_year: bool) -> &'static str {
        match self {
            Month::AdarII if !is_leap_year => "אדר",
            _ => HEBREW_NAMES[self as usize - 1],
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Month::from_number(number).ok_or(CalendarError::InvalidMonth { month: number })
    }
}

impl From<Month> for u8 {
    #[inline]
    fn from(month: Month) -> Self {
        month.number()
    }
}

/// Display name for a month number, or `None` when `month` is not in `1..=13`.
///
/// ```
/// assert_eq!(luach::month_name(7, false), Some("Adar"));
/// assert_eq!(luach::month_name(7, true), Some("Adar II"));
/// assert_eq!(luach::month_name(14, true), None);
/// ```
pub const fn month_name(month: u8, is_leap_year: bool) -> Option<&'static str> {
    match Month::from_number(month) {
        Some(m) => Some(m.english_name(is_leap_year)),
        None => None,
    }
}
