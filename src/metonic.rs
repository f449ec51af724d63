// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The 19-year metonic cycle.
//!
//! Year `y` sits at position `(y - 1) mod 19` of cycle `(y - 1) div 19`.
//! Seven positions carry a thirteenth month (Adar I):
//!
//! ```text
//! position  0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16 17 18
//! leap            *        *     *        *        *        *     *
//! ```
//!
//! All functions take years as `i64` so that the year after the largest
//! supported one can still be located. Callers keep `year` within
//! `1..=YEAR_MAX + 1`; the public entry points in `year` check it.

use super::molad::{Molad, MONTHS_PER_METONIC_CYCLE};

/// Years in one metonic cycle.
pub const YEARS_PER_METONIC_CYCLE: i64 = 19;

/// Cycle positions (0-based) of the leap years.
pub const LEAP_POSITIONS: [u8; 7] = [2, 5, 7, 10, 13, 16, 18];

/// Months elapsed between the start of a cycle and the start of each position.
#[rustfmt::skip]
pub const MONTHS_BEFORE_POSITION: [i64; 19] = [
    0, 12, 24, 37, 49, 61, 74, 86, 99, 111,
    123, 136, 148, 160, 173, 185, 197, 210, 222,
];

/// Split a year into `(cycle, position)`.
#[inline]
pub(crate) const fn split_year(year: i64) -> (i64, u8) {
    let elapsed = year - 1;
    (
        elapsed.div_euclid(YEARS_PER_METONIC_CYCLE),
        elapsed.rem_euclid(YEARS_PER_METONIC_CYCLE) as u8,
    )
}

/// Position of `year` within its metonic cycle, `0..=18`.
#[inline]
pub(crate) const fn metonic_position(year: i64) -> u8 {
    split_year(year).1
}

/// Whether a cycle position holds a leap year.
#[inline]
pub(crate) const fn is_leap_position(position: u8) -> bool {
    matches!(position, 2 | 5 | 7 | 10 | 13 | 16 | 18)
}

/// Whether `year` has thirteen months.
#[inline]
pub(crate) const fn is_leap_year(year: i64) -> bool {
    is_leap_position(metonic_position(year))
}

/// Number of months in the year at `position`.
#[inline]
pub(crate) const fn months_in_metonic_year(position: u8) -> i64 {
    if is_leap_position(position) {
        13
    } else {
        12
    }
}

/// The molad that opens metonic cycle `cycle` (cycle 0 starts with year 1).
#[inline]
pub(crate) const fn molad_of_metonic_cycle(cycle: i64) -> Molad {
    Molad::CREATION.add_metonic_cycles(cycle)
}

/// The molad of Tishrei that opens `year`.
#[inline]
pub(crate) const fn molad_of_year(year: i64) -> Molad {
    let (cycle, position) = split_year(year);
    molad_of_metonic_cycle(cycle).add_lunar_cycles(MONTHS_BEFORE_POSITION[position as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_wrap_every_nineteen_years() {
        assert_eq!(metonic_position(1), 0);
        assert_eq!(metonic_position(19), 18);
        assert_eq!(metonic_position(20), 0);
        assert_eq!(metonic_position(5784), 7);
        assert_eq!(split_year(5774), (303, 16));
    }

    #[test]
    fn leap_positions_match_the_table() {
        for position in 0..19u8 {
            assert_eq!(
                is_leap_position(position),
                LEAP_POSITIONS.contains(&position),
                "position {position}"
            );
        }
    }

    #[test]
    fn seven_leap_years_in_any_nineteen() {
        for start in [1_i64, 2, 17, 5_000, 5_777, 123_456, 1_000_000_007] {
            let leaps: Vec<u8> = (start..start + 19)
                .filter(|&y| is_leap_year(y))
                .map(metonic_position)
                .collect();
            assert_eq!(leaps.len(), 7, "window starting at {start}");
            let mut sorted = leaps.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, LEAP_POSITIONS);
        }
    }

    #[test]
    fn known_leap_years() {
        assert!(is_leap_year(5784));
        assert!(is_leap_year(5774));
        assert!(!is_leap_year(5783));
        assert!(!is_leap_year(5785));
        assert!(!is_leap_year(1));
        assert!(is_leap_year(3));
    }

    #[test]
    fn month_table_is_cumulative() {
        for position in 0..18u8 {
            let i = position as usize;
            assert_eq!(
                MONTHS_BEFORE_POSITION[i + 1] - MONTHS_BEFORE_POSITION[i],
                months_in_metonic_year(position)
            );
        }
        assert_eq!(
            MONTHS_BEFORE_POSITION[18] + months_in_metonic_year(18),
            MONTHS_PER_METONIC_CYCLE
        );
    }

    #[test]
    fn year_moladot() {
        assert_eq!(molad_of_year(1), Molad::CREATION);
        assert_eq!(molad_of_year(20), molad_of_metonic_cycle(1));
        assert_eq!(molad_of_year(2), Molad::new(355, 15_120));
        assert_eq!(molad_of_year(3), Molad::new(709, 24_636));
        assert_eq!(molad_of_year(5774), Molad::new(2_108_544, 18_110));
    }

    #[test]
    fn consecutive_years_differ_by_their_month_count() {
        for year in [1_i64, 18, 19, 5_783, 5_784] {
            let months = months_in_metonic_year(metonic_position(year));
            let next = molad_of_year(year).add_lunar_cycles(months);
            assert_eq!(next, molad_of_year(year + 1), "year {year}");
        }
    }
}
