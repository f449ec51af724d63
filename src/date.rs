// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew calendar dates and their conversion to serial day numbers.
//!
//! A serial day number (SDN) is a plain day count shared with other calendar
//! adapters; it equals the Julian Day Number of the civil day. Day 1 of the
//! Hebrew epoch (Tishrei 1 of year 1) is SDN 347 998.
//!
//! [`JewishDate::new`] only checks that the fields are in range. A date such
//! as 30 Cheshvan in a year where Cheshvan has 29 days is accepted; its SDN
//! is the next day, so it does not survive a round trip. Use
//! [`JewishDate::is_valid`] to tell the two apart.

use chrono::Weekday;
use std::fmt;

use super::error::CalendarError;
use super::month::Month;
use super::molad::weekday_from_sunday;
use super::search::{find_nearby_tishrei_molad, find_start_of_year};
use super::year::{YearBounds, YearKind};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// SDN of the day before Tishrei 1 of year 1.
pub const JEWISH_SDN_OFFSET: i64 = 347_997;

/// SDN of Tishrei 1 of year 1, the first convertible day.
pub const SDN_MIN: i64 = JEWISH_SDN_OFFSET + 1;

/// Largest supported year.
pub const YEAR_MAX: i32 = i32::MAX;

/// SDN of 29 Elul of [`YEAR_MAX`], the last convertible day.
pub const SDN_MAX: i64 = find_start_of_year(YEAR_MAX as i64 + 1).1 + JEWISH_SDN_OFFSET - 1;

/// Months counted back from the next Tishrei 1, with the offset such that day
/// `d` of the month is `offset - d` days before it.
const SUMMER_MONTHS: [(Month, i64); 6] = [
    (Month::Elul, 30),
    (Month::Av, 60),
    (Month::Tamuz, 89),
    (Month::Sivan, 119),
    (Month::Iyar, 148),
    (Month::Nisan, 178),
];

/// Fixed-length months preceding Adar II, latest first, with their lengths.
const WINTER_MONTHS: [(Month, i64); 3] = [
    (Month::AdarI, 30),
    (Month::Shevat, 30),
    (Month::Tevet, 29),
];

/// A date in the Hebrew calendar.
///
/// Ordering is chronological for dates that pass [`JewishDate::is_valid`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JewishDate {
    year: i32,
    month: Month,
    day: u8,
    is_leap_year: bool,
}

impl JewishDate {
    /// Build a date from its fields.
    ///
    /// Month 6 is always Adar I and month 7 is Adar II (plain Adar in a
    /// common year).
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidDate`] if `year < 1`, `month` is not in
    /// `1..=13` or `day` is not in `1..=30`.
    ///
    /// # Examples
    ///
    /// ```
    /// use luach::JewishDate;
    ///
    /// let date = JewishDate::new(5784, 8, 15).unwrap();
    /// assert_eq!(date.to_string(), "15 Nisan 5784");
    /// assert!(JewishDate::new(5784, 14, 1).is_err());
    /// ```
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidDate { year, month, day };
        if year < 1 || !(1..=30).contains(&day) {
            return Err(invalid);
        }
        let month = Month::from_number(month).ok_or(invalid)?;
        Ok(Self::from_parts(year, month, day))
    }

    fn from_parts(year: i32, month: Month, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_year: super::metonic::is_leap_year(i64::from(year)),
        }
    }

    /// The year, at least 1.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month.
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// The month number, `1..=13`.
    #[inline]
    pub const fn month_number(&self) -> u8 {
        self.month.number()
    }

    /// The day of the month, `1..=30`.
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether the date's year has thirteen months.
    #[inline]
    pub const fn is_leap_year(&self) -> bool {
        self.is_leap_year
    }

    /// English month name, taking the year's leap status into account.
    #[inline]
    pub const fn month_name(&self) -> &'static str {
        self.month.english_name(self.is_leap_year)
    }

    /// Hebrew month name, taking the year's leap status into account.
    #[inline]
    pub const fn hebrew_month_name(&self) -> &'static str {
        self.month.hebrew_name(self.is_leap_year)
    }

    /// Convert a serial day number to a date.
    ///
    /// # Errors
    ///
    /// [`CalendarError::SdnBeforeEpoch`] if `sdn <= JEWISH_SDN_OFFSET` and
    /// [`CalendarError::SdnOutOfRange`] if `sdn > SDN_MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use luach::{JewishDate, Month};
    ///
    /// let date = JewishDate::from_sdn(2_456_541).unwrap();
    /// assert_eq!((date.year(), date.month(), date.day()), (5774, Month::Tishrei, 1));
    /// ```
    pub fn from_sdn(sdn: i64) -> Result<Self, CalendarError> {
        if sdn <= JEWISH_SDN_OFFSET {
            debug!("rejecting SDN {sdn}: before the Hebrew epoch");
            return Err(CalendarError::SdnBeforeEpoch { sdn });
        }
        if sdn > SDN_MAX {
            debug!("rejecting SDN {sdn}: beyond year {YEAR_MAX}");
            return Err(CalendarError::SdnOutOfRange { sdn });
        }
        let input_day = sdn - JEWISH_SDN_OFFSET;
        let to_year = |year: i64| {
            i32::try_from(year).map_err(|_| CalendarError::SdnOutOfRange { sdn })
        };

        let found = find_nearby_tishrei_molad(input_day);
        let tishrei1 = found.first_day();

        let (year, first_day, next_first_day) = if input_day >= tishrei1 {
            // The molad opens the year containing the day.
            let year = to_year(found.year())?;
            if input_day < tishrei1 + 30 {
                return Ok(Self::resolved(year, Month::Tishrei, input_day - tishrei1 + 1));
            }
            if input_day < tishrei1 + 59 {
                return Ok(Self::resolved(year, Month::Cheshvan, input_day - tishrei1 - 29));
            }
            (year, tishrei1, found.next().first_day())
        } else {
            // The molad opens the following year.
            let year = to_year(found.year() - 1)?;
            let leap = super::metonic::is_leap_year(i64::from(year));
            if let Some((month, day)) = resolve_from_year_end(input_day, tishrei1, leap) {
                return Ok(Self::resolved(year, month, day));
            }
            trace!("SDN {sdn} falls in Cheshvan or Kislev; locating Tishrei 1 of {year}");
            let previous = find_nearby_tishrei_molad(found.molad.day() - 365);
            (year, previous.first_day(), tishrei1)
        };

        let cheshvan_days = YearKind::of_length(next_first_day - first_day).cheshvan_days();
        let day = input_day - first_day - 29;
        if day <= i64::from(cheshvan_days) {
            Ok(Self::resolved(year, Month::Cheshvan, day))
        } else {
            Ok(Self::resolved(
                year,
                Month::Kislev,
                day - i64::from(cheshvan_days),
            ))
        }
    }

    fn resolved(year: i32, month: Month, day: i64) -> Self {
        debug_assert!((1..=30).contains(&day), "day {day} of {month:?} {year}");
        Self::from_parts(year, month, day as u8)
    }

    /// Convert the date to a serial day number.
    ///
    /// The result is exact for valid dates. A day past the end of its month
    /// yields the SDN of a later day instead of an error.
    ///
    /// # Errors
    ///
    /// [`CalendarError::MonthNotInYear`] for Adar I of a common year.
    pub fn to_sdn(&self) -> Result<i64, CalendarError> {
        let bounds = YearBounds::of(i64::from(self.year));
        let day = i64::from(self.day);
        let complete = YearKind::of_length(bounds.length()) == YearKind::Complete;

        let days = match self.month {
            Month::Tishrei => bounds.first_day + day - 1,
            Month::Cheshvan => bounds.first_day + day + 29,
            Month::Kislev if complete => bounds.first_day + day + 59,
            Month::Kislev => bounds.first_day + day + 58,
            month => {
                let offset = days_to_year_end(month, self.is_leap_year).ok_or(
                    CalendarError::MonthNotInYear {
                        year: self.year,
                        month: month.number(),
                    },
                )?;
                bounds.next_first_day + day - offset
            }
        };
        Ok(days + JEWISH_SDN_OFFSET)
    }

    /// Whether the date names a day that actually exists, i.e. it survives a
    /// round trip through its serial day number.
    pub fn is_valid(&self) -> bool {
        matches!(
            self.to_sdn().and_then(Self::from_sdn),
            Ok(back) if back == *self
        )
    }

    /// Day of the week.
    pub fn day_of_week(&self) -> Result<Weekday, CalendarError> {
        let day = self.to_sdn()? - JEWISH_SDN_OFFSET;
        Ok(weekday_from_sunday(day.rem_euclid(7) as u8))
    }
}

/// Offset for months reckoned from the following Tishrei 1: day `d` of
/// `month` is `offset - d` days before it. `None` for Adar I of a common year.
const fn days_to_year_end(month: Month, is_leap_year: bool) -> Option<i64> {
    let adars = if is_leap_year { 59 } else { 29 };
    let offset = match month {
        Month::Tevet => adars + 237,
        Month::Shevat => adars + 208,
        Month::AdarI if is_leap_year => adars + 178,
        Month::AdarI => return None,
        Month::AdarII => 207,
        Month::Nisan => 178,
        Month::Iyar => 148,
        Month::Sivan => 119,
        Month::Tamuz => 89,
        Month::Av => 60,
        Month::Elul => 30,
        Month::Tishrei | Month::Cheshvan | Month::Kislev => return None,
    };
    Some(offset)
}

/// Resolve a day in Tevet through Elul from the Tishrei 1 that follows it.
/// `None` means the day is in Cheshvan or Kislev and needs the year length.
fn resolve_from_year_end(input_day: i64, next_tishrei1: i64, leap: bool) -> Option<(Month, i64)> {
    if input_day >= next_tishrei1 - 177 {
        return SUMMER_MONTHS
            .into_iter()
            .find(|&(_, offset)| input_day > next_tishrei1 - offset)
            .map(|(month, offset)| (month, input_day - next_tishrei1 + offset));
    }

    let mut day = input_day - next_tishrei1 + 207;
    if day > 0 {
        return Some((Month::AdarII, day));
    }
    for (month, length) in WINTER_MONTHS {
        if !month.occurs_in(leap) {
            continue;
        }
        day += length;
        if day > 0 {
            return Some((month, day));
        }
    }
    None
}

impl fmt::Display for JewishDate {
    /// `15 Nisan 5784`; the alternate form (`{:#}`) uses the Hebrew month name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = if f.alternate() {
            self.hebrew_month_name()
        } else {
            self.month_name()
        };
        write!(f, "{} {} {}", self.day, month, self.year)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JewishDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("JewishDate", 3)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month.number())?;
        s.serialize_field("day", &self.day)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JewishDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u8,
            day: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        JewishDate::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for JewishDate {
    fn arbitrary(g: &mut quickcheck::Gen) -> JewishDate {
        use quickcheck::Arbitrary;

        let year = (u16::arbitrary(g) % 9_999 + 1) as i32;
        let month = u8::arbitrary(g) % 13 + 1;
        let day = u8::arbitrary(g) % 30 + 1;
        JewishDate::new(year, month, day).expect("fields are in range")
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        use quickcheck::Arbitrary;

        let (month, day) = (self.month.number(), self.day);
        Box::new(
            (self.year, day)
                .shrink()
                .filter_map(move |(year, day)| JewishDate::new(year, month, day).ok()),
        )
    }
}
