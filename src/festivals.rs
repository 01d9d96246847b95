//! Festival calendar: fixed-date solar festivals plus the declarative
//! lunar rule table applied against the moon anchor tables.
//!
//! Each lunar festival is a day offset from a new or full moon whose
//! Gregorian month falls in the rule's range. The engine is generic over
//! the rule slice, so adding a festival is a data change only.

use chrono::{Datelike, Duration, NaiveDate};

use crate::moon_table::anchor_moons;
use crate::types::{Festival, FestivalCategory, FestivalRule, FixedFestival, MoonPhase};

use FestivalCategory::{Major, Religious, Seasonal};
use MoonPhase::{FullMoon, NewMoon};

/// Solar festivals on the same Gregorian date every year.
pub const FIXED_FESTIVALS: [FixedFestival; 3] = [
    FixedFestival {
        name: "Makar Sankranti",
        month0: 0,
        day: 14,
        description: "Sun's transition into Makara rashi; kite flying and til-gud sweets",
        category: Seasonal,
        deity: Some("Surya"),
        color: "#F4A300",
    },
    FixedFestival {
        name: "Pongal",
        month0: 0,
        day: 15,
        description: "Tamil harvest festival thanking the Sun for the year's crops",
        category: Seasonal,
        deity: Some("Surya"),
        color: "#E8B004",
    },
    FixedFestival {
        name: "Baisakhi",
        month0: 3,
        day: 14,
        description: "Punjabi harvest festival and the solar new year",
        category: Seasonal,
        deity: None,
        color: "#D98E04",
    },
];

/// The authored lunar rule table, roughly in calendar order of the anchor
/// month. Month ranges are 0-based and apply to the anchor moon's month,
/// not the resulting festival's.
pub const FESTIVAL_RULES: [FestivalRule; 25] = [
    FestivalRule {
        name: "Vasant Panchami",
        based_on: NewMoon,
        day_offset: 5,
        month_range: (0, 0),
        description: "Arrival of spring; Saraswati puja and the first writing of children",
        category: Religious,
        deity: Some("Saraswati"),
        color: "#FFD54F",
    },
    FestivalRule {
        name: "Maha Shivaratri",
        based_on: NewMoon,
        day_offset: -2,
        month_range: (1, 1),
        description: "Night vigil and fasting for Shiva on Phalguna Krishna Chaturdashi",
        category: Major,
        deity: Some("Shiva"),
        color: "#5C6BC0",
    },
    FestivalRule {
        name: "Holi",
        based_on: FullMoon,
        day_offset: 0,
        month_range: (2, 2),
        description: "Festival of colors on the Phalguna full moon",
        category: Major,
        deity: Some("Vishnu"),
        color: "#EC407A",
    },
    FestivalRule {
        name: "Rama Navami",
        based_on: NewMoon,
        day_offset: 9,
        month_range: (2, 2),
        description: "Birth of Rama on the ninth day of Chaitra's bright fortnight",
        category: Major,
        deity: Some("Rama"),
        color: "#26A69A",
    },
    FestivalRule {
        name: "Hanuman Jayanti",
        based_on: FullMoon,
        day_offset: 0,
        month_range: (3, 3),
        description: "Birth of Hanuman on the Chaitra full moon",
        category: Religious,
        deity: Some("Hanuman"),
        color: "#FF7043",
    },
    FestivalRule {
        name: "Akshaya Tritiya",
        based_on: NewMoon,
        day_offset: 3,
        month_range: (3, 3),
        description: "Unending-prosperity day; auspicious for new beginnings and gold",
        category: Religious,
        deity: Some("Vishnu"),
        color: "#FFCA28",
    },
    FestivalRule {
        name: "Buddha Purnima",
        based_on: FullMoon,
        day_offset: 0,
        month_range: (4, 4),
        description: "Birth, enlightenment, and parinirvana of the Buddha",
        category: Religious,
        deity: Some("Buddha"),
        color: "#8D6E63",
    },
    FestivalRule {
        name: "Guru Purnima",
        based_on: FullMoon,
        day_offset: 0,
        month_range: (6, 6),
        description: "Honoring the guru on the Ashadha full moon",
        category: Religious,
        deity: Some("Vyasa"),
        color: "#7E57C2",
    },
    FestivalRule {
        name: "Raksha Bandhan",
        based_on: FullMoon,
        day_offset: 0,
        month_range: (7, 7),
        description: "Sisters tie the rakhi on the Shravana full moon",
        category: Major,
        deity: None,
        color: "#EF5350",
    },
    FestivalRule {
        name: "Krishna Janmashtami",
        based_on: FullMoon,
        day_offset: 7,
        month_range: (7, 7),
        description: "Midnight birth of Krishna on Bhadrapada Krishna Ashtami",
        category: Major,
        deity: Some("Krishna"),
        color: "#42A5F5",
    },
    FestivalRule {
        name: "Ganesh Chaturthi",
        based_on: NewMoon,
        day_offset: 4,
        month_range: (7, 7),
        description: "Welcoming Ganesha home for ten days of worship",
        category: Major,
        deity: Some("Ganesha"),
        color: "#FFA726",
    },
    FestivalRule {
        name: "Navaratri Begins",
        based_on: NewMoon,
        day_offset: 1,
        month_range: (8, 8),
        description: "First night of the nine-night worship of Durga",
        category: Major,
        deity: Some("Durga"),
        color: "#AB47BC",
    },
    FestivalRule {
        name: "Durga Ashtami",
        based_on: NewMoon,
        day_offset: 8,
        month_range: (8, 8),
        description: "Eighth day of Navaratri; kanya puja and weapons worship",
        category: Religious,
        deity: Some("Durga"),
        color: "#9C27B0",
    },
    FestivalRule {
        name: "Vijayadashami",
        based_on: NewMoon,
        day_offset: 10,
        month_range: (8, 8),
        description: "Dussehra: victory of Rama over Ravana, effigies burned at dusk",
        category: Major,
        deity: Some("Rama"),
        color: "#FF8A65",
    },
    FestivalRule {
        name: "Sharad Purnima",
        based_on: FullMoon,
        day_offset: 0,
        month_range: (9, 9),
        description: "Harvest full moon; kheer left out under the moonlight",
        category: Seasonal,
        deity: Some("Lakshmi"),
        color: "#FFF176",
    },
    FestivalRule {
        name: "Karva Chauth",
        based_on: FullMoon,
        day_offset: 3,
        month_range: (9, 9),
        description: "Wives fast from sunrise until moonrise for their husbands",
        category: Religious,
        deity: None,
        color: "#F06292",
    },
    FestivalRule {
        name: "Dhanteras",
        based_on: NewMoon,
        day_offset: -2,
        month_range: (9, 9),
        description: "First day of Diwali; buying metal invites Lakshmi's favor",
        category: Major,
        deity: Some("Dhanvantari"),
        color: "#FFD700",
    },
    FestivalRule {
        name: "Diwali",
        based_on: NewMoon,
        day_offset: 0,
        month_range: (9, 9),
        description: "Festival of lights on the Kartik new moon",
        category: Major,
        deity: Some("Lakshmi"),
        color: "#FFB300",
    },
    FestivalRule {
        name: "Govardhan Puja",
        based_on: NewMoon,
        day_offset: 1,
        month_range: (9, 9),
        description: "Krishna lifting Govardhan hill; annakut food offerings",
        category: Religious,
        deity: Some("Krishna"),
        color: "#66BB6A",
    },
    FestivalRule {
        name: "Bhai Dooj",
        based_on: NewMoon,
        day_offset: 2,
        month_range: (9, 9),
        description: "Sisters pray for their brothers, closing the Diwali week",
        category: Religious,
        deity: None,
        color: "#4DB6AC",
    },
    FestivalRule {
        name: "Chhath Puja",
        based_on: NewMoon,
        day_offset: 6,
        month_range: (9, 10),
        description: "Standing in the river at dawn and dusk offering arghya to the Sun",
        category: Major,
        deity: Some("Surya"),
        color: "#FF7043",
    },
    FestivalRule {
        name: "Kartik Purnima",
        based_on: FullMoon,
        day_offset: 0,
        month_range: (10, 10),
        description: "Dev Deepawali: lamps float down the Ganga at Varanasi",
        category: Religious,
        deity: Some("Shiva"),
        color: "#FFCC80",
    },
    FestivalRule {
        name: "Guru Nanak Jayanti",
        based_on: FullMoon,
        day_offset: 0,
        month_range: (10, 10),
        description: "Birth of Guru Nanak on the Kartik full moon",
        category: Major,
        deity: None,
        color: "#FFE082",
    },
    FestivalRule {
        name: "Gita Jayanti",
        based_on: NewMoon,
        day_offset: 11,
        month_range: (10, 10),
        description: "Day the Bhagavad Gita was spoken at Kurukshetra",
        category: Religious,
        deity: Some("Krishna"),
        color: "#90CAF9",
    },
    FestivalRule {
        name: "Dattatreya Jayanti",
        based_on: FullMoon,
        day_offset: 0,
        month_range: (11, 11),
        description: "Birth of Dattatreya on the Margashirsha full moon",
        category: Religious,
        deity: Some("Dattatreya"),
        color: "#A1887F",
    },
];

/// Fixed-date solar festivals materialized for `year`, in table order.
pub fn solar_festivals_for_year(year: i32) -> Vec<Festival> {
    FIXED_FESTIVALS
        .iter()
        .map(|f| Festival {
            name: f.name,
            date: NaiveDate::from_ymd_opt(year, f.month0 + 1, f.day)
                .expect("fixed festival date"),
            description: f.description,
            category: f.category,
            deity: f.deity,
        })
        .collect()
}

/// Apply a rule slice against `year`'s anchor moons, appending matches to
/// `festivals`.
///
/// For every anchor moon of the matching phase whose month lies in the
/// rule's range, the festival lands `day_offset` days away. Results that
/// spill outside `year` are dropped, and a result is skipped when a
/// festival with the same name already exists in the same resulting month
/// (this guards against a rule firing on both a lookback anchor and the
/// current year's, and against doubled table months like December 2024's
/// two new moons).
pub fn apply_festival_rules(year: i32, rules: &[FestivalRule], festivals: &mut Vec<Festival>) {
    let anchors = anchor_moons(year);
    for rule in rules {
        for moon in anchors.iter().filter(|m| m.phase == rule.based_on) {
            let anchor_month = moon.date.month0();
            if anchor_month < rule.month_range.0 || anchor_month > rule.month_range.1 {
                continue;
            }
            let date = moon.date + Duration::days(rule.day_offset);
            if date.year() != year {
                continue;
            }
            if festivals
                .iter()
                .any(|f| f.name == rule.name && f.date.month0() == date.month0())
            {
                continue;
            }
            festivals.push(Festival {
                name: rule.name,
                date,
                description: rule.description,
                category: rule.category,
                deity: rule.deity,
            });
        }
    }
}

/// The full festival calendar for `year`: fixed solar festivals plus the
/// lunar rule table, ascending by date.
pub fn festivals_for_year(year: i32) -> Vec<Festival> {
    let mut festivals = solar_festivals_for_year(year);
    apply_festival_rules(year, &FESTIVAL_RULES, &mut festivals);
    festivals.sort_by_key(|f| f.date);
    festivals
}

/// The first `count` festivals on or after `from`, continuing into the
/// following year when the current year's calendar runs out.
pub fn upcoming_festivals(from: NaiveDate, count: usize) -> Vec<Festival> {
    festivals_for_year(from.year())
        .into_iter()
        .chain(festivals_for_year(from.year() + 1))
        .filter(|f| f.date >= from)
        .take(count)
        .collect()
}
