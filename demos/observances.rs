use chrono::{Datelike, Utc};
use chrono_tz::Asia::Kolkata;

use vrata_calendar::{
    lunar_days_in_month, next_ekadashi, todays_ekadashi, upcoming_festivals,
};

fn main() {
    let today = Utc::now().with_timezone(&Kolkata).date_naive();

    println!("=== Observances for {} (IST) ===", today);
    println!();

    println!("--- Ekadashi ---");
    match todays_ekadashi(today) {
        Some(e) => println!("Today is {} ({:?} paksha, {})", e.name, e.paksha, e.hindu_month),
        None => println!("No Ekadashi today"),
    }
    match next_ekadashi(today) {
        Some(e) => {
            println!("Next: {} on {}", e.name, e.date);
            println!("Significance: {}", e.significance);
            for rule in e.fasting_rules {
                println!("  - {}", rule);
            }
        }
        None => println!("No further Ekadashi in the bundled dataset"),
    }
    println!();

    println!("--- Lunar days this month ---");
    for day in lunar_days_in_month(today.month0(), today.year()) {
        println!("{}: {}", day.date, day.name);
    }
    println!();

    println!("--- Upcoming festivals ---");
    for festival in upcoming_festivals(today, 5) {
        let deity = festival.deity.unwrap_or("-");
        println!("{}: {} ({:?}, {})", festival.date, festival.name, festival.category, deity);
    }
}
