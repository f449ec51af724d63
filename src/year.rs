// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Whole-year queries: start day, length, and month lengths.
//!
//! A Hebrew year has 353, 354 or 355 days (383, 384 or 385 in a leap
//! year). The extra day or missing day lands on Cheshvan or Kislev:
//!
//! | Kind | Common | Leap | Cheshvan | Kislev |
//! |------|--------|------|----------|--------|
//! | [`YearKind::Deficient`] | 353 | 383 | 29 | 29 |
//! | [`YearKind::Regular`] | 354 | 384 | 29 | 30 |
//! | [`YearKind::Complete`] | 355 | 385 | 30 | 30 |

use super::date::{JEWISH_SDN_OFFSET, YEAR_MAX};
use super::dehiyyot::{self, Postponement};
use super::error::CalendarError;
use super::metonic;
use super::molad::Molad;
use super::month::Month;
use super::search::find_start_of_year;

/// Day counts of Tishrei 1 of a year and of the year after it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct YearBounds {
    pub first_day: i64,
    pub next_first_day: i64,
}

impl YearBounds {
    pub(crate) const fn of(year: i64) -> Self {
        let (tishrei, first_day) = find_start_of_year(year);
        Self {
            first_day,
            next_first_day: tishrei.next().first_day(),
        }
    }

    #[inline]
    pub(crate) const fn length(&self) -> i64 {
        self.next_first_day - self.first_day
    }
}

/// How the year's length was adjusted by the postponement rules.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum YearKind {
    /// *Chaserah*: Cheshvan and Kislev both have 29 days.
    Deficient,
    /// *Kesidrah*: Cheshvan has 29 days and Kislev 30.
    Regular,
    /// *Shelemah*: Cheshvan and Kislev both have 30 days.
    Complete,
}

impl YearKind {
    /// Classify a year length in days. Returns `None` for a length that no
    /// Hebrew year has.
    pub const fn from_length(days: i64) -> Option<Self> {
        match days {
            353 | 383 => Some(YearKind::Deficient),
            354 | 384 => Some(YearKind::Regular),
            355 | 385 => Some(YearKind::Complete),
            _ => None,
        }
    }

    /// Kind of `year`.
    pub fn of(year: i32) -> Result<Self, CalendarError> {
        Ok(Self::of_length(year_length(year)?))
    }

    /// Classify a length produced by the year-start arithmetic, which is
    /// always one of the six legal lengths.
    pub(crate) fn of_length(days: i64) -> Self {
        let kind = Self::from_length(days);
        debug_assert!(kind.is_some(), "computed year length {days} is not legal");
        kind.unwrap_or(YearKind::Regular)
    }

    /// Days in Cheshvan.
    #[inline]
    pub const fn cheshvan_days(self) -> u8 {
        match self {
            YearKind::Complete => 30,
            _ => 29,
        }
    }

    /// Days in Kislev.
    #[inline]
    pub const fn kislev_days(self) -> u8 {
        match self {
            YearKind::Deficient => 29,
            _ => 30,
        }
    }
}

fn checked_year(year: i32) -> Result<i64, CalendarError> {
    if (1..=YEAR_MAX).contains(&year) {
        Ok(i64::from(year))
    } else {
        Err(CalendarError::InvalidYear { year })
    }
}

/// Whether `year` has thirteen months. Defined for every `i32`, counting
/// metonic cycles backwards before year 1.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    metonic::is_leap_year(year as i64)
}

/// The molad of Tishrei that opens `year`.
///
/// ```
/// let molad = luach::molad_of_year(5774).unwrap();
/// // Thursday, 16h 46m 2p after the start of the day.
/// assert_eq!(molad.day(), 2_108_544);
/// assert_eq!(molad.parts(), (16, 46, 2));
/// assert!(luach::molad_of_year(0).is_err());
/// ```
pub fn molad_of_year(year: i32) -> Result<Molad, CalendarError> {
    Ok(metonic::molad_of_year(checked_year(year)?))
}

/// Which postponement rules moved Rosh Hashanah of `year` away from its molad.
pub fn postponement(year: i32) -> Result<Postponement, CalendarError> {
    let year = checked_year(year)?;
    let molad = metonic::molad_of_year(year);
    Ok(dehiyyot::postponement(metonic::metonic_position(year), &molad))
}

/// Serial day number of Tishrei 1 (Rosh Hashanah) of `year`.
///
/// ```
/// // 5 September 2013.
/// assert_eq!(luach::first_day_of_year(5774), Ok(2_456_541));
/// ```
pub fn first_day_of_year(year: i32) -> Result<i64, CalendarError> {
    let (_, first_day) = find_start_of_year(checked_year(year)?);
    Ok(first_day + JEWISH_SDN_OFFSET)
}

/// Number of days in `year`.
pub fn year_length(year: i32) -> Result<i64, CalendarError> {
    Ok(YearBounds::of(checked_year(year)?).length())
}

/// Number of days in `month` of `year`.
///
/// Fails with [`CalendarError::MonthNotInYear`] for Adar I of a common year.
pub fn days_in_month(year: i32, month: Month) -> Result<u8, CalendarError> {
    let leap = metonic::is_leap_year(checked_year(year)?);
    if !month.occurs_in(leap) {
        return Err(CalendarError::MonthNotInYear {
            year,
            month: month.number(),
        });
    }
    let days = match month {
        Month::Cheshvan => YearKind::of(year)?.cheshvan_days(),
        Month::Kislev => YearKind::of(year)?.kislev_days(),
        Month::Tevet | Month::AdarII | Month::Iyar | Month::Tamuz | Month::Elul => 29,
        Month::Tishrei
        | Month::Shevat
        | Month::AdarI
        | Month::Nisan
        | Month::Sivan
        | Month::Av => 30,
    };
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_year_lengths() {
        let cases = [
            (1, 355),
            (3, 383),
            (5774, 385),
            (5775, 354),
            (5776, 385),
            (5777, 353),
            (5778, 354),
            (5780, 355),
            (5783, 355),
            (5784, 383),
            (5785, 355),
        ];
        for (year, length) in cases {
            assert_eq!(year_length(year), Ok(length), "year {year}");
        }
    }

    #[test]
    fn known_first_days() {
        assert_eq!(first_day_of_year(1), Ok(347_998));
        assert_eq!(first_day_of_year(5784), Ok(2_460_204));
        assert_eq!(first_day_of_year(5785), Ok(2_460_587));
    }

    #[test]
    fn year_kinds() {
        assert_eq!(YearKind::of(5777), Ok(YearKind::Deficient));
        assert_eq!(YearKind::of(5784), Ok(YearKind::Deficient));
        assert_eq!(YearKind::of(5778), Ok(YearKind::Regular));
        assert_eq!(YearKind::of(5774), Ok(YearKind::Complete));
        assert_eq!(YearKind::from_length(356), None);
    }

    #[test]
    fn lengths_are_always_legal() {
        for year in 1..4_000 {
            let length = year_length(year).unwrap();
            let kind = YearKind::from_length(length);
            assert!(kind.is_some(), "year {year} has {length} days");
            assert_eq!(length > 380, is_leap_year(year), "year {year}");
        }
    }

    #[test]
    fn months_sum_to_year_length() {
        for year in [1, 3, 5774, 5777, 5784, 5785] {
            let leap = is_leap_year(year);
            let total: i64 = Month::ALL
                .into_iter()
                .filter(|m| m.occurs_in(leap))
                .map(|m| i64::from(days_in_month(year, m).unwrap()))
                .sum();
            assert_eq!(total, year_length(year).unwrap(), "year {year}");
        }
    }

    #[test]
    fn adar_i_is_absent_from_common_years() {
        assert_eq!(
            days_in_month(5783, Month::AdarI),
            Err(CalendarError::MonthNotInYear {
                year: 5783,
                month: 6
            })
        );
        assert_eq!(days_in_month(5784, Month::AdarI), Ok(30));
        assert_eq!(days_in_month(5783, Month::AdarII), Ok(29));
    }

    #[test]
    fn rejects_years_before_one() {
        assert_eq!(
            year_length(0),
            Err(CalendarError::InvalidYear { year: 0 })
        );
        assert!(first_day_of_year(-5).is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not legal")]
    fn illegal_computed_length_is_not_masked() {
        YearKind::of_length(356);
    }

    #[test]
    fn legal_computed_lengths_classify() {
        assert_eq!(YearKind::of_length(383), YearKind::Deficient);
        assert_eq!(YearKind::of_length(354), YearKind::Regular);
        assert_eq!(YearKind::of_length(355), YearKind::Complete);
    }

    #[test]
    fn year_queries_hold_at_the_extremes() {
        for year in [i32::MIN, -1, 0] {
            let invalid = CalendarError::InvalidYear { year };
            assert_eq!(molad_of_year(year), Err(invalid.clone()));
            assert_eq!(postponement(year), Err(invalid.clone()));
            assert_eq!(year_length(year), Err(invalid.clone()));
            assert_eq!(first_day_of_year(year), Err(invalid));
        }

        let last = molad_of_year(YEAR_MAX).unwrap();
        assert!(last.day() > 784_000_000_000);
        assert!(postponement(YEAR_MAX).unwrap().days() <= 2);
        assert_eq!(
            first_day_of_year(YEAR_MAX).unwrap(),
            last.day() + postponement(YEAR_MAX).unwrap().days() + JEWISH_SDN_OFFSET
        );

        // Leap status is a pure cycle position, defined for every i32.
        assert!(is_leap_year(3));
        assert!(!is_leap_year(1));
        let _ = is_leap_year(i32::MIN);
        assert_eq!(is_leap_year(i32::MAX), metonic::is_leap_year(i64::from(i32::MAX)));
    }

    #[test]
    fn postponement_of_known_years() {
        use crate::dehiyyot::Dehiyyah;

        assert_eq!(postponement(1).unwrap().days(), 0);
        let p = postponement(3).unwrap();
        assert_eq!(p.molad_rule, Some(Dehiyyah::MoladZaken));
        assert!(p.lo_adu);
        assert_eq!(postponement(75).unwrap().molad_rule, Some(Dehiyyah::Betutakpat));
    }

    #[test]
    fn largest_year_has_a_length() {
        let length = year_length(YEAR_MAX).unwrap();
        assert!(YearKind::from_length(length).is_some());
    }
}
