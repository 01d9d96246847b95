//! Mean synodic-month moon phase estimates.
//!
//! The table path in [`crate::moon_table`] reproduces the bundled data's
//! year-shift extrapolation, which drifts badly for years far from the
//! anchors. This module is the separate, astronomically grounded
//! alternative: it steps a mean lunation (29.530589 days) from a reference
//! new moon epoch via Julian day numbers. Mean phases can differ from true
//! phases by up to ~0.7 days, so results are calendar-date estimates good
//! to about a day, for any year. Nothing in the table path calls into
//! this module.

use chrono::{Datelike, Duration, NaiveDate};

/// Mean length of a lunation in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

// Mean new moon of 2000-01-06 18:14 UT.
const EPOCH_JD: f64 = 2451550.26;

// JD 2440587.5 is 1970-01-01T00:00Z.
const UNIX_EPOCH_JD: f64 = 2440587.5;

fn jd_to_date(jd: f64) -> NaiveDate {
    let z = (jd + 0.5).floor() as i64;
    let days_since_unix_epoch = z - (UNIX_EPOCH_JD + 0.5) as i64;
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("unix epoch") + Duration::days(days_since_unix_epoch)
}

fn estimated_phases(year: i32, phase_offset: f64) -> Vec<NaiveDate> {
    // ~12.3685 lunations per year; start two lunations early and walk
    // forward until the dates leave the requested year.
    let start_k = ((year - 2000) as f64 * 12.3685).floor() as i64 - 2;
    let mut dates = Vec::with_capacity(13);
    for k in start_k.. {
        let jd = EPOCH_JD + (k as f64 + phase_offset) * SYNODIC_MONTH;
        let date = jd_to_date(jd);
        if date.year() > year {
            break;
        }
        if date.year() == year {
            dates.push(date);
        }
    }
    dates
}

/// Estimated new-moon dates of `year`, ascending, good to about a day.
pub fn estimated_new_moons(year: i32) -> Vec<NaiveDate> {
    estimated_phases(year, 0.0)
}

/// Estimated full-moon dates of `year`, ascending, good to about a day.
pub fn estimated_full_moons(year: i32) -> Vec<NaiveDate> {
    estimated_phases(year, 0.5)
}
