// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Dehiyyot: postponement of Rosh Hashanah
//!
//! Tishrei 1 falls on the day of the molad of Tishrei unless one of four
//! rules delays it:
//!
//! | Rule | Name | Condition on the molad | Delay |
//! |------|------|------------------------|-------|
//! | 2 | *molad zaken* | at or after noon (18h) | 1 day |
//! | 3 | *GaTaRaD* | common year, Tuesday, at or after 9h 204p | 1 day |
//! | 4 | *BeTU'TaKPaT* | year after a leap year, Monday, at or after 15h 589p | 1 day |
//! | 1 | *lo ADU rosh* | resulting day is Sunday, Wednesday or Friday | 1 more day |
//!
//! Rules 2–4 form one group: the first that matches delays the year by a
//! single day and the rest are not consulted. Rule 1 is checked last,
//! against the weekday reached after that group, so the total delay is 0,
//! 1 or 2 days.
//!
//! Everything here is a `const fn` over explicit inputs.

use super::metonic::is_leap_position;
use super::molad::{
    Molad, FRIDAY, HALAKIM_PER_HOUR, MONDAY, SUNDAY, TUESDAY, WEDNESDAY,
};

/// 18 hours after the start of the day.
pub const NOON: i64 = 18 * HALAKIM_PER_HOUR;

/// 9 hours and 204 halakim (3:11:20 a.m.).
pub const AM3_11_20: i64 = 9 * HALAKIM_PER_HOUR + 204;

/// 15 hours and 589 halakim (9:32:43⅓ a.m.).
pub const AM9_32_43: i64 = 15 * HALAKIM_PER_HOUR + 589;

/// One of the four postponement rules.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Dehiyyah {
    /// Rule 1: Rosh Hashanah never falls on Sunday, Wednesday or Friday.
    LoAdu,
    /// Rule 2: the molad is at or after noon.
    MoladZaken,
    /// Rule 3: a common year whose molad is on Tuesday at or after 9h 204p.
    Gatarad,
    /// Rule 4: a year following a leap year whose molad is on Monday at or
    /// after 15h 589p.
    Betutakpat,
}

/// Rules evaluated against the raw molad, in order.
pub const MOLAD_RULES: [Dehiyyah; 3] = [
    Dehiyyah::MoladZaken,
    Dehiyyah::Gatarad,
    Dehiyyah::Betutakpat,
];

impl Dehiyyah {
    /// Whether this rule delays a year at cycle `position` (`0..=18`) whose
    /// molad is `molad`.
    ///
    /// [`Dehiyyah::LoAdu`] is judged on the weekday reached after rules 2–4,
    /// so it agrees with the combined outcome.
    pub const fn applies(self, position: u8, molad: &Molad) -> bool {
        let dow = molad.day_of_week();
        let halakim = molad.halakim();
        match self {
            Dehiyyah::LoAdu => postponement(position, molad).lo_adu,
            Dehiyyah::MoladZaken => halakim >= NOON,
            Dehiyyah::Gatarad => {
                !is_leap_position(position) && dow == TUESDAY && halakim >= AM3_11_20
            }
            Dehiyyah::Betutakpat => {
                is_leap_position(previous_position(position))
                    && dow == MONDAY
                    && halakim >= AM9_32_43
            }
        }
    }
}

/// The rules that fired for one year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Postponement {
    /// The molad rule (2, 3 or 4) that delayed the year, if any.
    pub molad_rule: Option<Dehiyyah>,
    /// Whether rule 1 added a further day.
    pub lo_adu: bool,
}

impl Postponement {
    /// Total delay in days, `0..=2`.
    #[inline]
    pub const fn days(&self) -> i64 {
        self.molad_rule.is_some() as i64 + self.lo_adu as i64
    }
}

/// Evaluate the four rules for a year at cycle `position` opened by `molad`.
pub(crate) const fn postponement(position: u8, molad: &Molad) -> Postponement {
    let mut molad_rule = None;
    let mut i = 0;
    while i < MOLAD_RULES.len() {
        if MOLAD_RULES[i].applies(position, molad) {
            molad_rule = Some(MOLAD_RULES[i]);
            break;
        }
        i += 1;
    }

    let mut dow = molad.day_of_week();
    if molad_rule.is_some() {
        dow = (dow + 1) % 7;
    }

    Postponement {
        molad_rule,
        lo_adu: is_adu(dow),
    }
}

/// Day (since the epoch) of Tishrei 1 for the year at cycle `position`
/// whose molad of Tishrei is `molad`.
#[inline]
pub(crate) const fn first_day_of_year(position: u8, molad: &Molad) -> i64 {
    molad.day() + postponement(position, molad).days()
}

#[inline]
const fn is_adu(dow: u8) -> bool {
    matches!(dow, SUNDAY | WEDNESDAY | FRIDAY)
}

#[inline]
const fn previous_position(position: u8) -> u8 {
    match position % 19 {
        0 => 18,
        p => p - 1,
    }
}
