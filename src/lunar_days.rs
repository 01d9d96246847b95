//! Purnima and Amavasya days derived from the moon tables.

use chrono::Datelike;

use crate::moon_table::{full_moons_of_year, new_moons_of_year};
use crate::types::{LunarDay, LunarDayKind};

/// Hindu month names in the fixed offset mapping the source data uses:
/// Gregorian month0 `m` maps to index `(m + 10) % 12`.
const HINDU_MONTHS: [&str; 12] = [
    "Chaitra",
    "Vaishakha",
    "Jyeshtha",
    "Ashadha",
    "Shravana",
    "Bhadrapada",
    "Ashwin",
    "Kartik",
    "Margashirsha",
    "Pausha",
    "Magha",
    "Phalguna",
];

/// Hindu month name for a 0-based Gregorian month. A fixed offset mapping,
/// not a true luni-solar month calculation.
pub fn hindu_month_name(month0: u32) -> &'static str {
    HINDU_MONTHS[((month0 + 10) % 12) as usize]
}

/// Purnima and Amavasya days falling in the given 0-based Gregorian month,
/// ascending by date. `month0 > 11` matches nothing and yields an empty
/// vec.
pub fn lunar_days_in_month(month0: u32, year: i32) -> Vec<LunarDay> {
    let mut days: Vec<LunarDay> = full_moons_of_year(year)
        .into_iter()
        .filter(|d| d.month0() == month0)
        .map(|date| LunarDay {
            date,
            kind: LunarDayKind::Purnima,
            name: format!("{} Purnima", hindu_month_name(date.month0())),
        })
        .chain(
            new_moons_of_year(year)
                .into_iter()
                .filter(|d| d.month0() == month0)
                .map(|date| LunarDay {
                    date,
                    kind: LunarDayKind::Amavasya,
                    name: format!("{} Amavasya", hindu_month_name(date.month0())),
                }),
        )
        .collect();
    days.sort_by_key(|d| d.date);
    days
}

/// All Purnima and Amavasya days of `year`, ascending.
pub fn lunar_days_in_year(year: i32) -> Vec<LunarDay> {
    (0..12)
        .flat_map(|month0| lunar_days_in_month(month0, year))
        .collect()
}
