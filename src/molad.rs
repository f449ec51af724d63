// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Molad (mean lunar conjunction) arithmetic.
//!
//! A [`Molad`] is a moment expressed as whole days since the calendar epoch
//! plus *halakim*, the traditional sub-day unit:
//!
//! | Unit | Halakim |
//! |------|---------|
//! | 1 hour | 1 080 |
//! | 1 day | 25 920 |
//! | 1 mean lunation | 765 433 (29d 12h 793p) |
//! | 1 metonic cycle | 179 876 755 (235 lunations) |
//!
//! Multiplying the metonic-cycle constant by a cycle count leaves 32-bit
//! range after a dozen cycles, so every quantity here is an `i64`.
//! With years capped at `i32::MAX` the largest intermediate value is about
//! `2.1e16`, far below `i64::MAX`.
//!
//! Hebrew days begin at 6 p.m., so a molad with `halakim == 0` falls on the
//! evening that starts `day`.

use chrono::Weekday;
use qtty::{Days, Second, Seconds};

/// Halakim in one hour.
pub const HALAKIM_PER_HOUR: i64 = 1_080;

/// Halakim in one minute.
pub const HALAKIM_PER_MINUTE: i64 = HALAKIM_PER_HOUR / 60;

/// Halakim in one day.
pub const HALAKIM_PER_DAY: i64 = 24 * HALAKIM_PER_HOUR;

/// Halakim in one mean synodic month: 29 days, 12 hours and 793 halakim.
pub const HALAKIM_PER_LUNAR_CYCLE: i64 = 29 * HALAKIM_PER_DAY + 12 * HALAKIM_PER_HOUR + 793;

/// Months in one 19-year metonic cycle: twelve common years and seven leap years.
pub const MONTHS_PER_METONIC_CYCLE: i64 = 12 * 19 + 7;

/// Halakim in one 19-year metonic cycle.
pub const HALAKIM_PER_METONIC_CYCLE: i64 = HALAKIM_PER_LUNAR_CYCLE * MONTHS_PER_METONIC_CYCLE;

/// The molad of Tishrei of year 1 (*molad BaHaRaD*), in halakim after day 0.
pub const NEW_MOON_OF_CREATION: i64 = 31_524;

pub(crate) const SUNDAY: u8 = 0;
pub(crate) const MONDAY: u8 = 1;
pub(crate) const TUESDAY: u8 = 2;
pub(crate) const WEDNESDAY: u8 = 3;
pub(crate) const FRIDAY: u8 = 5;

/// A moment on the calendar's day axis, kept normalised so that
/// `0 <= halakim < HALAKIM_PER_DAY`.
///
/// Values are `Copy` and every operation returns a new molad, so the same
/// chain of additions can be evaluated in `const` context.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Molad {
    day: i64,
    halakim: i64,
}

impl Molad {
    /// The molad that opens year 1.
    pub const CREATION: Self = Self::new(0, NEW_MOON_OF_CREATION);

    /// Build a molad from any `(day, halakim)` pair, carrying whole days out
    /// of `halakim`. Negative halakim borrow from `day`.
    #[inline]
    pub(crate) const fn new(day: i64, halakim: i64) -> Self {
        Self { day, halakim: 0 }.add_halakim(halakim)
    }

    /// Whole days since the calendar epoch.
    #[inline]
    pub const fn day(&self) -> i64 {
        self.day
    }

    /// Halakim elapsed since the start (6 p.m.) of [`Self::day`].
    #[inline]
    pub const fn halakim(&self) -> i64 {
        self.halakim
    }

    /// Add a signed number of halakim and renormalise with floor division.
    #[inline]
    pub(crate) const fn add_halakim(self, halakim: i64) -> Self {
        let total = self.halakim + halakim;
        Self {
            day: self.day + total.div_euclid(HALAKIM_PER_DAY),
            halakim: total.rem_euclid(HALAKIM_PER_DAY),
        }
    }

    /// Advance by `n` mean lunations.
    #[inline]
    pub(crate) const fn add_lunar_cycles(self, n: i64) -> Self {
        self.add_halakim(HALAKIM_PER_LUNAR_CYCLE * n)
    }

    /// Advance by `n` whole metonic cycles.
    #[inline]
    pub(crate) const fn add_metonic_cycles(self, n: i64) -> Self {
        self.add_halakim(HALAKIM_PER_METONIC_CYCLE * n)
    }

    /// Day of week of [`Self::day`], with `0` for Sunday through `6` for Saturday.
    #[inline]
    pub const fn day_of_week(&self) -> u8 {
        self.day.rem_euclid(7) as u8
    }

    /// Day of week as a [`chrono::Weekday`].
    #[inline]
    pub fn weekday(&self) -> Weekday {
        weekday_from_sunday(self.day_of_week())
    }

    /// The traditional announcement form: hours, minutes and remaining
    /// halakim after the start of the day.
    pub const fn parts(&self) -> (i64, i64, i64) {
        let hours = self.halakim / HALAKIM_PER_HOUR;
        let rest = self.halakim % HALAKIM_PER_HOUR;
        (hours, rest / HALAKIM_PER_MINUTE, rest % HALAKIM_PER_MINUTE)
    }

    /// The molad as a fractional day count since the epoch.
    #[inline]
    pub fn as_days(&self) -> Days {
        Days::new(self.day as f64 + self.halakim as f64 / HALAKIM_PER_DAY as f64)
    }

    /// Elapsed time since the start of the Hebrew day. One helek is 10/3 s.
    #[inline]
    pub fn time_of_day(&self) -> Seconds {
        Days::new(self.halakim as f64 / HALAKIM_PER_DAY as f64).to::<Second>()
    }
}

impl std::fmt::Display for Molad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (hours, minutes, halakim) = self.parts();
        write!(
            f,
            "day {} ({:?}) {}h {}m {}p",
            self.day,
            self.weekday(),
            hours,
            minutes,
            halakim
        )
    }
}

/// Map `0..=6` (Sunday first) onto chrono's weekday. Values are taken modulo 7.
pub(crate) fn weekday_from_sunday(n: u8) -> Weekday {
    match n % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunation_constants() {
        assert_eq!(HALAKIM_PER_DAY, 25_920);
        assert_eq!(HALAKIM_PER_LUNAR_CYCLE, 765_433);
        assert_eq!(HALAKIM_PER_METONIC_CYCLE, 179_876_755);
    }

    #[test]
    fn creation_is_monday_evening() {
        // BaHaRaD: day 2 (Monday), 5 hours, 204 halakim.
        assert_eq!(Molad::CREATION, Molad::new(1, 5_604));
        assert_eq!(Molad::CREATION.day_of_week(), MONDAY);
        assert_eq!(Molad::CREATION.parts(), (5, 11, 6));
        assert_eq!(Molad::CREATION.weekday(), Weekday::Mon);
    }

    #[test]
    fn add_halakim_normalises() {
        let m = Molad::new(10, 0).add_halakim(HALAKIM_PER_DAY * 3 + 7);
        assert_eq!((m.day(), m.halakim()), (13, 7));

        let m = Molad::new(10, 5).add_halakim(-6);
        assert_eq!((m.day(), m.halakim()), (9, HALAKIM_PER_DAY - 1));

        let m = Molad::new(0, -HALAKIM_PER_DAY * 2);
        assert_eq!((m.day(), m.halakim()), (-2, 0));
    }

    #[test]
    fn lunar_and_metonic_cycles_agree() {
        let by_months = Molad::CREATION.add_lunar_cycles(MONTHS_PER_METONIC_CYCLE);
        let by_cycle = Molad::CREATION.add_metonic_cycles(1);
        assert_eq!(by_months, by_cycle);
        assert_eq!(by_cycle, Molad::new(6_940, 23_479));
    }

    #[test]
    fn cycles_can_go_backwards() {
        let m = Molad::CREATION.add_metonic_cycles(3).add_metonic_cycles(-3);
        assert_eq!(m, Molad::CREATION);
        let m = Molad::CREATION.add_lunar_cycles(-1);
        assert!(m.day() < 0);
        assert!(m.halakim() >= 0 && m.halakim() < HALAKIM_PER_DAY);
    }

    #[test]
    fn large_cycle_counts_stay_exact() {
        let cycles = i64::from(i32::MAX) / 19 + 1;
        let m = Molad::CREATION.add_metonic_cycles(cycles);
        let expected = NEW_MOON_OF_CREATION + cycles * HALAKIM_PER_METONIC_CYCLE;
        assert_eq!(m.day(), expected.div_euclid(HALAKIM_PER_DAY));
        assert_eq!(m.halakim(), expected.rem_euclid(HALAKIM_PER_DAY));
    }

    #[test]
    fn day_of_week_handles_negative_days() {
        assert_eq!(Molad::new(-1, 0).day_of_week(), 6);
        assert_eq!(Molad::new(-7, 0).day_of_week(), SUNDAY);
        assert_eq!(Molad::new(3, 0).weekday(), Weekday::Wed);
    }

    #[test]
    fn quantity_views() {
        let m = Molad::new(2, HALAKIM_PER_DAY / 4);
        assert!((m.as_days() - Days::new(2.25)).abs() < Days::new(1e-12));
        assert!((m.time_of_day() - Seconds::new(21_600.0)).abs() < Seconds::new(1e-6));

        let one_helek = Molad::new(0, 1).time_of_day();
        assert!((one_helek - Seconds::new(10.0 / 3.0)).abs() < Seconds::new(1e-9));
    }

    #[test]
    fn display_uses_announcement_parts() {
        assert_eq!(Molad::CREATION.to_string(), "day 1 (Mon) 5h 11m 6p");
    }
}
