use chrono::NaiveDate;

/// The two moon phases the anchor tables record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    NewMoon,
    FullMoon,
}

/// A verified new- or full-moon calendar date from the per-year tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonEvent {
    pub date: NaiveDate,
    pub phase: MoonPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarDayKind {
    Purnima,
    Amavasya,
}

/// Named lunar observance day derived from the moon tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarDay {
    pub date: NaiveDate,
    pub kind: LunarDayKind,
    /// Hindu month name plus the kind, e.g. "Kartik Purnima".
    pub name: String,
}

/// Lunar fortnight: Shukla (waxing) or Krishna (waning).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    Shukla,
    Krishna,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FestivalCategory {
    Major,
    Religious,
    Seasonal,
}

/// Declarative festival rule: offset in days from the nearest new or full
/// moon whose (0-based) Gregorian month falls inside `month_range`.
///
/// The rule table is authored once and never mutated; adding a festival is
/// a data change, not a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestivalRule {
    pub name: &'static str,
    pub based_on: MoonPhase,
    /// Days from the anchor moon; may be negative (e.g. Dhanteras at -2
    /// from Diwali's new moon).
    pub day_offset: i64,
    /// Inclusive 0-based month range the anchor moon must fall in.
    pub month_range: (u32, u32),
    pub description: &'static str,
    pub category: FestivalCategory,
    pub deity: Option<&'static str>,
    /// Display color, carried through for the calendar UI; never read by
    /// the date computation.
    pub color: &'static str,
}

/// Fixed-date solar festival, same month/day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFestival {
    pub name: &'static str,
    /// 0-based month.
    pub month0: u32,
    pub day: u32,
    pub description: &'static str,
    pub category: FestivalCategory,
    pub deity: Option<&'static str>,
    pub color: &'static str,
}

/// A festival instance materialized for one requested year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Festival {
    pub name: &'static str,
    pub date: NaiveDate,
    pub description: &'static str,
    pub category: FestivalCategory,
    pub deity: Option<&'static str>,
}

/// One entry of the bundled Ekadashi table for the reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EkadashiEntry {
    pub name: &'static str,
    pub date: NaiveDate,
    pub paksha: Paksha,
    pub hindu_month: &'static str,
    pub significance: &'static str,
    pub fasting_rules: &'static [&'static str],
    pub benefits: &'static str,
    pub moon_phase: &'static str,
    pub vrata_katha: &'static str,
}
