// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bridge to other calendars through the serial day number.
//!
//! Any calendar whose dates map one-to-one onto serial day numbers can
//! implement [`SerialDay`]; conversion between two such calendars is then a
//! round trip through the shared day count. Implementations are provided for
//! [`JewishDate`] and for the proleptic Gregorian [`chrono::NaiveDate`].
//!
//! ```
//! use chrono::NaiveDate;
//! use luach::{JewishDate, SerialDay};
//!
//! let date = NaiveDate::from_ymd_opt(2013, 9, 5).unwrap();
//! let hebrew: JewishDate = date.convert().unwrap();
//! assert_eq!(hebrew.to_string(), "1 Tishrei 5774");
//! assert_eq!(hebrew.to_date(), Ok(date));
//! ```

use chrono::{Datelike, NaiveDate};
use qtty::Days;

use super::date::JewishDate;
use super::error::CalendarError;

/// SDN of 31 December 1 BCE, the day before `0001-01-01` in the proleptic
/// Gregorian calendar.
pub const GREGORIAN_SDN_OFFSET: i64 = 1_721_425;

/// A calendar date that corresponds to exactly one serial day number.
pub trait SerialDay: Copy + Clone + std::fmt::Debug + PartialEq + Sized {
    /// Calendar name used in log output.
    const LABEL: &'static str;

    /// Serial day number of this date.
    fn to_sdn(&self) -> Result<i64, CalendarError>;

    /// Date falling on serial day number `sdn`.
    fn from_sdn(sdn: i64) -> Result<Self, CalendarError>;

    /// Convert to the same day in another calendar.
    fn convert<T: SerialDay>(&self) -> Result<T, CalendarError> {
        let sdn = self.to_sdn()?;
        trace!("{} -> {} via SDN {sdn}", Self::LABEL, T::LABEL);
        T::from_sdn(sdn)
    }

    /// Julian Day at noon of this date, which equals its serial day number.
    fn julian_day(&self) -> Result<Days, CalendarError> {
        Ok(Days::new(self.to_sdn()? as f64))
    }
}

impl SerialDay for JewishDate {
    const LABEL: &'static str = "Hebrew";

    #[inline]
    fn to_sdn(&self) -> Result<i64, CalendarError> {
        JewishDate::to_sdn(self)
    }

    #[inline]
    fn from_sdn(sdn: i64) -> Result<Self, CalendarError> {
        JewishDate::from_sdn(sdn)
    }
}

impl SerialDay for NaiveDate {
    const LABEL: &'static str = "Gregorian";

    #[inline]
    fn to_sdn(&self) -> Result<i64, CalendarError> {
        Ok(i64::from(self.num_days_from_ce()) + GREGORIAN_SDN_OFFSET)
    }

    fn from_sdn(sdn: i64) -> Result<Self, CalendarError> {
        sdn.checked_sub(GREGORIAN_SDN_OFFSET)
            .and_then(|days| i32::try_from(days).ok())
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(CalendarError::GregorianOutOfRange { sdn })
    }
}

impl JewishDate {
    /// The same day in the proleptic Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Fails when the date has no serial day number (Adar I of a common
    /// year) or falls outside the range of [`NaiveDate`].
    pub fn to_date(&self) -> Result<NaiveDate, CalendarError> {
        self.convert()
    }

    /// The Hebrew date of a Gregorian day.
    ///
    /// # Errors
    ///
    /// Fails for days before Tishrei 1 of year 1, proleptic Gregorian
    /// `-3760-09-07` (7 October 3761 BCE in the Julian calendar).
    pub fn from_date(date: NaiveDate) -> Result<Self, CalendarError> {
        date.convert()
    }
}

impl TryFrom<NaiveDate> for JewishDate {
    type Error = CalendarError;

    #[inline]
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        JewishDate::from_date(date)
    }
}

impl TryFrom<JewishDate> for NaiveDate {
    type Error = CalendarError;

    #[inline]
    fn try_from(date: JewishDate) -> Result<Self, Self::Error> {
        date.to_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{JEWISH_SDN_OFFSET, SDN_MAX, SDN_MIN};
    use quickcheck::quickcheck;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hebrew(y: i32, m: u8, d: u8) -> JewishDate {
        JewishDate::new(y, m, d).unwrap()
    }

    #[test]
    fn gregorian_offset_matches_julian_day_numbers() {
        assert_eq!(ymd(2000, 1, 1).to_sdn(), Ok(2_451_545));
        assert_eq!(ymd(1970, 1, 1).to_sdn(), Ok(2_440_588));
        assert_eq!(ymd(1, 1, 1).to_sdn(), Ok(GREGORIAN_SDN_OFFSET + 1));
        assert_eq!(NaiveDate::from_sdn(2_451_545), Ok(ymd(2000, 1, 1)));
    }

    #[test]
    fn known_conversions() {
        let cases = [
            (ymd(2013, 9, 5), hebrew(5774, 1, 1)),
            (ymd(2013, 11, 3), hebrew(5774, 2, 30)),
            (ymd(2000, 1, 1), hebrew(5760, 4, 23)),
            (ymd(1970, 1, 1), hebrew(5730, 4, 23)),
            (ymd(2023, 9, 16), hebrew(5784, 1, 1)),
            (ymd(2024, 4, 23), hebrew(5784, 8, 15)),
        ];
        for (gregorian, jewish) in cases {
            assert_eq!(JewishDate::from_date(gregorian), Ok(jewish), "{gregorian}");
            assert_eq!(jewish.to_date(), Ok(gregorian), "{jewish}");
            assert_eq!(JewishDate::try_from(gregorian), Ok(jewish));
            assert_eq!(NaiveDate::try_from(jewish), Ok(gregorian));
        }
    }

    #[test]
    fn hebrew_epoch_in_gregorian() {
        let epoch = hebrew(1, 1, 1).to_date().unwrap();
        assert_eq!(epoch, ymd(-3760, 9, 7));
        assert_eq!(epoch.to_sdn(), Ok(SDN_MIN));
        assert_eq!(
            JewishDate::from_date(epoch.pred_opt().unwrap()),
            Err(CalendarError::SdnBeforeEpoch {
                sdn: JEWISH_SDN_OFFSET
            })
        );
    }

    #[test]
    fn far_future_dates_exceed_chrono() {
        let last = JewishDate::from_sdn(SDN_MAX).unwrap();
        assert_eq!(
            last.to_date(),
            Err(CalendarError::GregorianOutOfRange { sdn: SDN_MAX })
        );
        assert!(NaiveDate::from_sdn(i64::MIN).is_err());
    }

    #[test]
    fn adar_i_of_a_common_year_has_no_gregorian_day() {
        assert_eq!(
            hebrew(5785, 6, 1).to_date(),
            Err(CalendarError::MonthNotInYear {
                year: 5785,
                month: 6
            })
        );
    }

    #[test]
    fn julian_day_is_the_sdn() {
        let jd = hebrew(5774, 1, 1).julian_day().unwrap();
        assert_eq!(jd, Days::new(2_456_541.0));
        assert_eq!(ymd(2013, 9, 5).julian_day(), Ok(jd));
    }

    quickcheck! {
        fn prop_gregorian_roundtrip(offset: u32) -> bool {
            let date = ymd(1, 1, 1) + chrono::Days::new(u64::from(offset % 3_000_000));
            let jewish = JewishDate::from_date(date).unwrap();
            jewish.to_date() == Ok(date) && jewish.is_valid()
        }
    }
}
