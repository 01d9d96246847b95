use chrono::{Datelike, NaiveDate};

use vrata_calendar::ekadashi::*;
use vrata_calendar::types::Paksha;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Bundled table ──

#[test]
fn test_reference_year_table_shape() {
    let list = ekadashi_list(REFERENCE_YEAR);
    assert_eq!(list.len(), 25);
    assert!(list.windows(2).all(|w| w[0].date < w[1].date));
    assert!(list.iter().all(|e| e.date.year() == REFERENCE_YEAR));
    // Pakshas alternate through the year, starting with Shukla.
    for (i, entry) in list.iter().enumerate() {
        let expected = if i % 2 == 0 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        };
        assert_eq!(entry.paksha, expected, "{}", entry.name);
    }
}

#[test]
fn test_entry_metadata_complete() {
    for entry in ekadashi_list(REFERENCE_YEAR) {
        assert!(!entry.name.is_empty());
        assert!(!entry.significance.is_empty());
        assert!(!entry.fasting_rules.is_empty());
        assert!(!entry.benefits.is_empty());
        assert!(!entry.vrata_katha.is_empty());
    }
}

#[test]
fn test_other_years_empty() {
    assert!(ekadashi_list(2024).is_empty());
    assert!(ekadashi_list(2026).is_empty());
    assert!(ekadashi_list(1995).is_empty());
}

// ── Today lookup ──

#[test]
fn test_todays_ekadashi_exact_match_only() {
    let nirjala = todays_ekadashi(date(2025, 6, 6)).unwrap();
    assert_eq!(nirjala.name, "Nirjala Ekadashi");
    assert_eq!(nirjala.hindu_month, "Jyeshtha");

    assert!(todays_ekadashi(date(2025, 6, 5)).is_none());
    assert!(todays_ekadashi(date(2025, 6, 7)).is_none());
    assert!(todays_ekadashi(date(2024, 6, 6)).is_none());
}

// ── Next lookup ──

#[test]
fn test_next_ekadashi_inclusive_boundary() {
    // A reference day falling exactly on an Ekadashi returns that entry.
    let same_day = next_ekadashi(date(2025, 1, 10)).unwrap();
    assert_eq!(same_day.name, "Pausha Putrada Ekadashi");
    assert_eq!(same_day.date, date(2025, 1, 10));
}

#[test]
fn test_next_ekadashi_scans_forward() {
    let next = next_ekadashi(date(2025, 1, 11)).unwrap();
    assert_eq!(next.name, "Shattila Ekadashi");
    assert_eq!(next.date, date(2025, 1, 25));

    let year_end = next_ekadashi(date(2025, 12, 16)).unwrap();
    assert_eq!(year_end.date, date(2025, 12, 30));
}

#[test]
fn test_next_ekadashi_none_after_dataset_ends() {
    // No 2026 table is bundled, so the scan past 2025-12-30 finds nothing.
    assert!(next_ekadashi(date(2025, 12, 31)).is_none());
    assert!(next_ekadashi(date(2026, 3, 1)).is_none());
}

#[test]
fn test_next_ekadashi_falls_through_from_prior_year() {
    // 2024 has no bundled table; the scan falls through to 2025's first.
    let next = next_ekadashi(date(2024, 12, 31)).unwrap();
    assert_eq!(next.date, date(2025, 1, 10));
}
