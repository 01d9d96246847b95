//! Verified full-moon and new-moon calendar dates (IST) for the tabulated
//! years, plus the year-shift extrapolation used for every other year.
//!
//! The extrapolation simply rewrites the year field of the 2025 anchor
//! table. Real lunar months drift ~10-12 days per solar year, so dates for
//! years more than one or two away from the anchors can be off by weeks.
//! This is the documented behavior of the bundled dataset; see
//! [`crate::synodic`] for the astronomically grounded alternative.

use chrono::{Datelike, NaiveDate};

use crate::types::{MoonEvent, MoonPhase};

/// Year whose table is reused, year-shifted, for untabulated years.
pub const ANCHOR_YEAR: i32 = 2025;

// (month, day) pairs, 1-based months, ascending. IST calendar dates.

#[rustfmt::skip]
const FULL_MOONS_2024: [(u32, u32); 12] = [
    (1, 25), (2, 24), (3, 25), (4, 24), (5, 23), (6, 22),
    (7, 21), (8, 19), (9, 18), (10, 17), (11, 15), (12, 15),
];

// 13 entries: new moons on both Dec 1 and Dec 31.
#[rustfmt::skip]
const NEW_MOONS_2024: [(u32, u32); 13] = [
    (1, 11), (2, 10), (3, 10), (4, 9), (5, 8), (6, 6), (7, 6),
    (8, 4), (9, 3), (10, 2), (11, 1), (12, 1), (12, 31),
];

#[rustfmt::skip]
const FULL_MOONS_2025: [(u32, u32); 12] = [
    (1, 13), (2, 12), (3, 14), (4, 13), (5, 12), (6, 11),
    (7, 11), (8, 9), (9, 8), (10, 7), (11, 5), (12, 5),
];

#[rustfmt::skip]
const NEW_MOONS_2025: [(u32, u32); 12] = [
    (1, 29), (2, 28), (3, 29), (4, 27), (5, 27), (6, 25),
    (7, 25), (8, 23), (9, 22), (10, 21), (11, 20), (12, 20),
];

// 13 entries: full moons on both Jan 3 and Dec 24.
#[rustfmt::skip]
const FULL_MOONS_2026: [(u32, u32); 13] = [
    (1, 3), (2, 2), (3, 3), (4, 2), (5, 1), (5, 31), (6, 30),
    (7, 29), (8, 28), (9, 27), (10, 26), (11, 24), (12, 24),
];

#[rustfmt::skip]
const NEW_MOONS_2026: [(u32, u32); 12] = [
    (1, 19), (2, 17), (3, 19), (4, 17), (5, 16), (6, 15),
    (7, 14), (8, 12), (9, 11), (10, 10), (11, 9), (12, 9),
];

fn materialize(year: i32, table: &[(u32, u32)]) -> Vec<NaiveDate> {
    table
        .iter()
        .map(|&(month, day)| {
            NaiveDate::from_ymd_opt(year, month, day).expect("tabulated calendar date")
        })
        .collect()
}

/// Full-moon dates of `year`, ascending. Tabulated years return the
/// literal table; any other year gets the year-shifted [`ANCHOR_YEAR`]
/// table (see the module docs for the accuracy caveat).
pub fn full_moons_of_year(year: i32) -> Vec<NaiveDate> {
    match year {
        2024 => materialize(year, &FULL_MOONS_2024),
        2025 => materialize(year, &FULL_MOONS_2025),
        2026 => materialize(year, &FULL_MOONS_2026),
        _ => materialize(year, &FULL_MOONS_2025),
    }
}

/// New-moon dates of `year`, ascending. Same tabulation and extrapolation
/// behavior as [`full_moons_of_year`].
pub fn new_moons_of_year(year: i32) -> Vec<NaiveDate> {
    match year {
        2024 => materialize(year, &NEW_MOONS_2024),
        2025 => materialize(year, &NEW_MOONS_2025),
        2026 => materialize(year, &NEW_MOONS_2026),
        _ => materialize(year, &NEW_MOONS_2025),
    }
}

/// Both tables of `year` merged into phase-tagged events, ascending.
pub fn moon_events_of_year(year: i32) -> Vec<MoonEvent> {
    let mut events: Vec<MoonEvent> = full_moons_of_year(year)
        .into_iter()
        .map(|date| MoonEvent {
            date,
            phase: MoonPhase::FullMoon,
        })
        .chain(new_moons_of_year(year).into_iter().map(|date| MoonEvent {
            date,
            phase: MoonPhase::NewMoon,
        }))
        .collect();
    events.sort_by_key(|e| e.date);
    events
}

/// Anchor set for the festival rule engine: all of `year`'s moon events
/// plus the October-December events of `year - 1`, so early-January
/// festivals whose anchor moon fell in the prior December are reachable.
pub fn anchor_moons(year: i32) -> Vec<MoonEvent> {
    let mut anchors: Vec<MoonEvent> = moon_events_of_year(year - 1)
        .into_iter()
        .filter(|e| e.date.month0() >= 9)
        .collect();
    anchors.extend(moon_events_of_year(year));
    anchors.sort_by_key(|e| e.date);
    anchors
}
