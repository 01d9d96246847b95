pub mod ekadashi;
pub mod festivals;
pub mod lunar_days;
pub mod moon_table;
pub mod synodic;
pub mod types;

pub use ekadashi::{ekadashi_list, next_ekadashi, todays_ekadashi, REFERENCE_YEAR};

pub use festivals::{
    apply_festival_rules, festivals_for_year, solar_festivals_for_year, upcoming_festivals,
    FESTIVAL_RULES, FIXED_FESTIVALS,
};

pub use lunar_days::{hindu_month_name, lunar_days_in_month, lunar_days_in_year};

pub use moon_table::{
    anchor_moons, full_moons_of_year, moon_events_of_year, new_moons_of_year, ANCHOR_YEAR,
};

pub use synodic::{estimated_full_moons, estimated_new_moons, SYNODIC_MONTH};

pub use types::{
    EkadashiEntry, Festival, FestivalCategory, FestivalRule, FixedFestival, LunarDay,
    LunarDayKind, MoonEvent, MoonPhase, Paksha,
};
