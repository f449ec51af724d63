// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Locating the molad of Tishrei near an arbitrary day.
//!
//! Converting a day to a date needs the Tishrei 1 that brackets it. Rather
//! than computing year lengths, [`find_nearby_tishrei_molad`] rounds the
//! day to a *nearby* molad of Tishrei:
//!
//! - a day in the first two months of a year yields the molad that starts it;
//! - a day in the last six or so months yields the molad that starts the next year;
//! - a day in Kislev may yield either, and both are needed there anyway.
//!
//! This lets the converter resolve most days with a single year-start.

use super::dehiyyot::first_day_of_year;
use super::metonic::{molad_of_metonic_cycle, months_in_metonic_year, split_year};
use super::molad::Molad;

/// Whole-day upper bound on the length of a metonic cycle (6939.6896 days).
const METONIC_CYCLE_DAYS: i64 = 6_940;

/// Slack that keeps the cycle estimate from overshooting.
const CYCLE_ESTIMATE_SLACK: i64 = 310;

/// A molad landing within this many days after the target stops the walk.
const TISHREI_WINDOW_DAYS: i64 = 74;

/// A molad of Tishrei together with its place in the metonic cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct TishreiMolad {
    /// Metonic cycle index (cycle 0 starts with year 1).
    pub cycle: i64,
    /// Position of the year opened by `molad`, `0..=18`.
    pub position: u8,
    /// The molad of Tishrei of that year.
    pub molad: Molad,
}

impl TishreiMolad {
    /// The Hebrew year this molad opens.
    #[inline]
    pub const fn year(&self) -> i64 {
        self.cycle * 19 + self.position as i64 + 1
    }

    /// Day (since the epoch) of the Tishrei 1 this molad resolves to.
    #[inline]
    pub const fn first_day(&self) -> i64 {
        first_day_of_year(self.position, &self.molad)
    }

    /// The molad of Tishrei of the following year.
    #[inline]
    pub const fn next(&self) -> Self {
        let molad = self
            .molad
            .add_lunar_cycles(months_in_metonic_year(self.position));
        if self.position == 18 {
            Self {
                cycle: self.cycle + 1,
                position: 0,
                molad,
            }
        } else {
            Self {
                cycle: self.cycle,
                position: self.position + 1,
                molad,
            }
        }
    }
}

/// Find a molad of Tishrei close enough to `day` (days since the epoch) to
/// bracket it, without computing any year length.
///
/// `day` must lie in `1..=SDN_MAX - JEWISH_SDN_OFFSET`, as `JewishDate::from_sdn`
/// guarantees.
pub(crate) fn find_nearby_tishrei_molad(day: i64) -> TishreiMolad {
    // 6940 overstates the cycle length, so this never overestimates the cycle.
    let mut cycle = (day + CYCLE_ESTIMATE_SLACK).div_euclid(METONIC_CYCLE_DAYS);
    let mut molad = molad_of_metonic_cycle(cycle);

    while molad.day() < day - METONIC_CYCLE_DAYS + CYCLE_ESTIMATE_SLACK {
        cycle += 1;
        molad = molad.add_metonic_cycles(1);
        trace!("cycle estimate for day {day} corrected to {cycle}");
    }

    // Position 18 is never passed: its successor belongs to the next cycle.
    let mut position = 0;
    while position < 18 && molad.day() <= day - TISHREI_WINDOW_DAYS {
        molad = molad.add_lunar_cycles(months_in_metonic_year(position));
        position += 1;
    }

    TishreiMolad {
        cycle,
        position,
        molad,
    }
}

/// The molad and Tishrei 1 of `year`, located directly from its cycle position.
pub(crate) const fn find_start_of_year(year: i64) -> (TishreiMolad, i64) {
    let (cycle, position) = split_year(year);
    let tishrei = TishreiMolad {
        cycle,
        position,
        molad: super::metonic::molad_of_year(year),
    };
    (tishrei, tishrei.first_day())
}
