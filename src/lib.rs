// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew Calendar
//!
//! Exact conversion between dates of the Hebrew (Jewish) calendar and serial
//! day numbers, the linear day count shared with other calendars.
//!
//! # Core types
//!
//! - [`JewishDate`]: a `(year, month, day)` date with [`JewishDate::from_sdn`]
//!   and [`JewishDate::to_sdn`].
//! - [`Month`]: the thirteen month slots, numbered from Tishrei.
//! - [`Molad`]: a mean conjunction, in days and halakim since the epoch, as
//!   returned by [`molad_of_year`].
//! - [`SerialDay`]: trait for calendars that map onto serial day numbers,
//!   implemented for [`JewishDate`] and [`chrono::NaiveDate`].
//! - [`CalendarError`]: every way a conversion can fail.
//!
//! # Layers
//!
//! | Module | Computes |
//! |--------|----------|
//! | molad | lunation arithmetic in halakim (1/1080 hour) |
//! | metonic | leap years and the molad of Tishrei of any year |
//! | dehiyyot | postponements from the molad to Rosh Hashanah |
//! | search | the molad of Tishrei near an arbitrary day |
//! | year | year starts, lengths and month lengths |
//! | date | the day/date converter |
//! | gregorian | conversion to and from other calendars |
//!
//! # Example
//!
//! ```
//! use luach::{JewishDate, Month};
//!
//! let pesach = JewishDate::new(5784, Month::Nisan.number(), 15).unwrap();
//! let sdn = pesach.to_sdn().unwrap();
//! assert_eq!(JewishDate::from_sdn(sdn), Ok(pesach));
//! assert_eq!(pesach.to_date().unwrap().to_string(), "2024-04-23");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`JewishDate`] and [`Month`].
//! - `logging`: `debug`/`trace` records through the [`log`](https://docs.rs/log) facade.

#[macro_use]
mod logging;

mod date;
mod dehiyyot;
mod error;
mod gregorian;
mod metonic;
mod molad;
mod month;
mod search;
mod year;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use date::{JewishDate, JEWISH_SDN_OFFSET, SDN_MAX, SDN_MIN, YEAR_MAX};
pub use error::CalendarError;
pub use gregorian::{SerialDay, GREGORIAN_SDN_OFFSET};
pub use month::{month_name, Month};
pub use year::{
    days_in_month, first_day_of_year, is_leap_year, molad_of_year, postponement, year_length,
    YearKind,
};

// ── Lunation arithmetic ───────────────────────────────────────────────────

pub use dehiyyot::{Dehiyyah, Postponement, AM3_11_20, AM9_32_43, NOON};
pub use metonic::{LEAP_POSITIONS, YEARS_PER_METONIC_CYCLE};
pub use molad::{
    Molad, HALAKIM_PER_DAY, HALAKIM_PER_HOUR, HALAKIM_PER_LUNAR_CYCLE,
    HALAKIM_PER_METONIC_CYCLE, HALAKIM_PER_MINUTE, MONTHS_PER_METONIC_CYCLE,
    NEW_MOON_OF_CREATION,
};
