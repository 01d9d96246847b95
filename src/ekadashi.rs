//! Bundled Ekadashi table for the reference year and the next/today
//! lookups over it.
//!
//! Only 2025 is bundled; every other year yields an empty list. The
//! surrounding app treats a remote panchang API as the source of truth for
//! other years and only falls back to this table.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};

use crate::types::{EkadashiEntry, Paksha};

/// The only year with a bundled Ekadashi table.
pub const REFERENCE_YEAR: i32 = 2025;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).expect("tabulated calendar date")
}

static EKADASHI_2025: LazyLock<Vec<EkadashiEntry>> = LazyLock::new(|| {
    vec![
        EkadashiEntry {
            name: "Pausha Putrada Ekadashi",
            date: date(1, 10),
            paksha: Paksha::Shukla,
            hindu_month: "Pausha",
            significance: "Observed for the blessing of worthy children and family welfare",
            fasting_rules: &[
                "No grains, beans, or rice from sunrise to next-day sunrise",
                "Single sattvic meal of fruit and milk if a full fast is not possible",
                "Break the fast within the Dwadashi window after sunrise",
            ],
            benefits: "Progeny, family harmony, and release from past misdeeds",
            moon_phase: "Waxing",
            vrata_katha: "King Suketuman of Bhadravati, childless and despairing, kept this vrata on a sage's advice and was granted a son",
        },
        EkadashiEntry {
            name: "Shattila Ekadashi",
            date: date(1, 25),
            paksha: Paksha::Krishna,
            hindu_month: "Magha",
            significance: "The Ekadashi of sesame: til is eaten, donated, and offered six ways",
            fasting_rules: &[
                "No grains or beans for the full day",
                "Use sesame in bathing water, food offering, and charity",
                "Keep an evening vigil with lamps",
            ],
            benefits: "Freedom from poverty and the merit of great charity",
            moon_phase: "Waning",
            vrata_katha: "A wealthy woman who gave everything but food learned from Vishnu that a handful of til given on this day outweighs a mountain of gold",
        },
        EkadashiEntry {
            name: "Jaya Ekadashi",
            date: date(2, 8),
            paksha: Paksha::Shukla,
            hindu_month: "Magha",
            significance: "Victory over subtle sins; said to free even those cursed to wander as spirits",
            fasting_rules: &[
                "Complete fast or fruit-only diet",
                "No grains, rice, or lentils",
                "Chant Vishnu's names through the night",
            ],
            benefits: "Liberation from guilt and lower births",
            moon_phase: "Waxing",
            vrata_katha: "The gandharva Malyavan and his beloved, cursed into ghostly forms, were restored after unknowingly observing Jaya Ekadashi",
        },
        EkadashiEntry {
            name: "Vijaya Ekadashi",
            date: date(2, 24),
            paksha: Paksha::Krishna,
            hindu_month: "Phalguna",
            significance: "Grants victory in difficult undertakings",
            fasting_rules: &[
                "No grains or beans",
                "Worship Vishnu with tulsi leaves",
                "Avoid anger and harsh speech for the day",
            ],
            benefits: "Success against obstacles that have resisted all effort",
            moon_phase: "Waning",
            vrata_katha: "Rama observed this vrata at the shore before crossing to Lanka, and the ocean gave way",
        },
        EkadashiEntry {
            name: "Amalaki Ekadashi",
            date: date(3, 10),
            paksha: Paksha::Shukla,
            hindu_month: "Phalguna",
            significance: "Worship of the amla tree, dear to Vishnu, just before Holi",
            fasting_rules: &[
                "No grains, beans, or rice",
                "Circumambulate and water an amla tree",
                "Take amla in the fast-breaking meal",
            ],
            benefits: "Health, long life, and the merit of a thousand cow donations",
            moon_phase: "Waxing",
            vrata_katha: "A hunter who kept accidental vigil under an amla tree on this night was reborn a righteous king",
        },
        EkadashiEntry {
            name: "Papmochani Ekadashi",
            date: date(3, 25),
            paksha: Paksha::Krishna,
            hindu_month: "Chaitra",
            significance: "The sin-dissolving Ekadashi closing the festival season of spring",
            fasting_rules: &[
                "No grains or beans",
                "Morning bath before sunrise",
                "Confess faults mentally before the deity and resolve amends",
            ],
            benefits: "Release from remorse and accumulated sin",
            moon_phase: "Waning",
            vrata_katha: "The sage Medhavi, who fell from his vows through an apsara's charms, regained his austerity by this vrata",
        },
        EkadashiEntry {
            name: "Kamada Ekadashi",
            date: date(4, 8),
            paksha: Paksha::Shukla,
            hindu_month: "Chaitra",
            significance: "The wish-fulfilling Ekadashi, first after the lunar new year",
            fasting_rules: &[
                "No grains, beans, or honey",
                "Offer sandal paste and fresh flowers to Vishnu",
                "Feed a brahmin or donate grain the next day",
            ],
            benefits: "Fulfillment of righteous desires",
            moon_phase: "Waxing",
            vrata_katha: "The gandharva Lalit, cursed into a demon's body mid-song, was restored when his wife kept Kamada Ekadashi for him",
        },
        EkadashiEntry {
            name: "Varuthini Ekadashi",
            date: date(4, 24),
            paksha: Paksha::Krishna,
            hindu_month: "Vaishakha",
            significance: "The protecting Ekadashi; armor against misfortune",
            fasting_rules: &[
                "No grains or beans",
                "Avoid betel, brass vessels, and oil massage",
                "Sleep on the floor and rise before dawn",
            ],
            benefits: "Protection from harm and an auspicious end of life",
            moon_phase: "Waning",
            vrata_katha: "King Mandhata, mauled by a bear while in meditation, was made whole by Vishnu for his observance of Varuthini",
        },
        EkadashiEntry {
            name: "Mohini Ekadashi",
            date: date(5, 8),
            paksha: Paksha::Shukla,
            hindu_month: "Vaishakha",
            significance: "Commemorates Vishnu's Mohini form that recovered the amrita",
            fasting_rules: &[
                "No grains, beans, or rice",
                "Worship Vishnu as Mohini with white flowers",
                "Keep silence as far as practical",
            ],
            benefits: "Freedom from delusion and attachment",
            moon_phase: "Waxing",
            vrata_katha: "Dhrishtabuddhi, a merchant's dissolute son, shed his misdeeds at Rishi Kaundinya's instruction by observing Mohini Ekadashi",
        },
        EkadashiEntry {
            name: "Apara Ekadashi",
            date: date(5, 23),
            paksha: Paksha::Krishna,
            hindu_month: "Jyeshtha",
            significance: "Brings limitless (apara) merit and washes away deep faults",
            fasting_rules: &[
                "No grains or beans",
                "Charity of water vessels in the summer heat",
                "Evening lamp offering to Vishnu",
            ],
            benefits: "Merit said to be beyond measure, fame, and prosperity",
            moon_phase: "Waning",
            vrata_katha: "King Mahidhwaja's murdered spirit found release when his son kept Apara Ekadashi in his name",
        },
        EkadashiEntry {
            name: "Nirjala Ekadashi",
            date: date(6, 6),
            paksha: Paksha::Shukla,
            hindu_month: "Jyeshtha",
            significance: "The strictest of all: not even water is taken",
            fasting_rules: &[
                "No food and no water from sunrise to next-day sunrise",
                "Donate water pots, fans, and melons",
                "Those unable to keep it waterless fast on fruit instead",
            ],
            benefits: "Equal to keeping all twenty-four Ekadashis of the year",
            moon_phase: "Waxing",
            vrata_katha: "Bhima, unable to fast twice a month, asked Vyasa for one vrata equal to all; he was given this waterless day",
        },
        EkadashiEntry {
            name: "Yogini Ekadashi",
            date: date(6, 21),
            paksha: Paksha::Krishna,
            hindu_month: "Ashadha",
            significance: "Heals afflictions of body and conscience",
            fasting_rules: &[
                "No grains or beans",
                "Bathe before sunrise and wear clean clothes",
                "Worship Narayana with tulsi and sesame",
            ],
            benefits: "Health and the merit of feeding many thousands",
            moon_phase: "Waning",
            vrata_katha: "The yaksha Hemamali, struck with leprosy under Kubera's curse, was cured by observing Yogini Ekadashi",
        },
        EkadashiEntry {
            name: "Devshayani Ekadashi",
            date: date(7, 6),
            paksha: Paksha::Shukla,
            hindu_month: "Ashadha",
            significance: "Vishnu begins his four-month cosmic sleep; Chaturmas opens",
            fasting_rules: &[
                "No grains, beans, or leafy greens",
                "Resolve a Chaturmas discipline to keep until Devutthana",
                "Evening arati with conch and bell",
            ],
            benefits: "Steadiness in vows and protection through the monsoon months",
            moon_phase: "Waxing",
            vrata_katha: "King Mandhata's drought-struck kingdom was relieved by rain when the whole court kept Devshayani Ekadashi",
        },
        EkadashiEntry {
            name: "Kamika Ekadashi",
            date: date(7, 21),
            paksha: Paksha::Krishna,
            hindu_month: "Shravana",
            significance: "Worship with tulsi during Shravana, dearest month of Shiva and Vishnu alike",
            fasting_rules: &[
                "No grains or beans",
                "Offer tulsi leaves; a single leaf outweighs gems",
                "Light a ghee lamp through the night",
            ],
            benefits: "Merit of bathing at all the tirthas at once",
            moon_phase: "Waning",
            vrata_katha: "A herdsman who slew a brahmin's cow in anger was absolved only after keeping Kamika Ekadashi with tulsi worship",
        },
        EkadashiEntry {
            name: "Shravana Putrada Ekadashi",
            date: date(8, 5),
            paksha: Paksha::Shukla,
            hindu_month: "Shravana",
            significance: "Second Putrada of the year, kept for children's welfare",
            fasting_rules: &[
                "No grains, beans, or rice",
                "Couples keep the fast jointly",
                "Donate clothes and sweets to children the next day",
            ],
            benefits: "Blessing of children and their long life",
            moon_phase: "Waxing",
            vrata_katha: "King Mahijit of Mahishmati, childless into old age, was granted an heir after the court sages prescribed this vrata",
        },
        EkadashiEntry {
            name: "Aja Ekadashi",
            date: date(8, 19),
            paksha: Paksha::Krishna,
            hindu_month: "Bhadrapada",
            significance: "Restores what fate has stripped away",
            fasting_rules: &[
                "No grains or beans",
                "Keep vigil with recitation of Vishnu's thousand names",
                "Avoid speaking untruth for the full day",
            ],
            benefits: "Recovery of lost position, wealth, and family",
            moon_phase: "Waning",
            vrata_katha: "Harishchandra, sold into a cremation ground's service for truth's sake, regained kingdom, wife, and son through Aja Ekadashi",
        },
        EkadashiEntry {
            name: "Parsva Ekadashi",
            date: date(9, 3),
            paksha: Paksha::Shukla,
            hindu_month: "Bhadrapada",
            significance: "Vishnu turns on his side in cosmic sleep; also called Parivartini",
            fasting_rules: &[
                "No grains, beans, or rice",
                "Worship the Vamana form with curd and rice offering for the deity",
                "Keep the night vigil with bhajans",
            ],
            benefits: "Merit of horse sacrifice, honor in this life",
            moon_phase: "Waxing",
            vrata_katha: "Bali the demon king, pressed to the netherworld by Vamana's stride, was granted Vishnu's eternal guard at his gate on this day",
        },
        EkadashiEntry {
            name: "Indira Ekadashi",
            date: date(9, 17),
            paksha: Paksha::Krishna,
            hindu_month: "Ashwin",
            significance: "Falls in Pitru Paksha; its merit is offered to the ancestors",
            fasting_rules: &[
                "No grains or beans",
                "Perform shraddha rites before noon",
                "Feed brahmins and crows on behalf of the departed",
            ],
            benefits: "Elevation of ancestors suffering for old debts",
            moon_phase: "Waning",
            vrata_katha: "King Indrasena's father, seen in a dream bound in Yama's realm, rose to Vishnu's abode when the king kept Indira Ekadashi",
        },
        EkadashiEntry {
            name: "Papankusha Ekadashi",
            date: date(10, 3),
            paksha: Paksha::Shukla,
            hindu_month: "Ashwin",
            significance: "The goad (ankusha) that drives off sin, kept amid Navaratri's close",
            fasting_rules: &[
                "No grains, beans, or rice",
                "Worship Padmanabha with lotus flowers",
                "Donate umbrellas, shoes, or cloth",
            ],
            benefits: "Protection of ten generations on both sides of the family",
            moon_phase: "Waxing",
            vrata_katha: "A cruel hunter of Vindhya, facing Yama's messengers, was saved by a single sincere Papankusha fast",
        },
        EkadashiEntry {
            name: "Rama Ekadashi",
            date: date(10, 17),
            paksha: Paksha::Krishna,
            hindu_month: "Kartik",
            significance: "Named for Lakshmi (Rama); the Ekadashi before Diwali",
            fasting_rules: &[
                "No grains or beans",
                "Clean and light the house as Diwali approaches",
                "Offer kheer to Lakshmi-Narayana",
            ],
            benefits: "Wealth that does not corrupt, and Lakshmi's residence in the home",
            moon_phase: "Waning",
            vrata_katha: "Princess Chandrabhaga's husband, doubting the vrata's power, was humbled when its merit alone carried them both to Vaikuntha",
        },
        EkadashiEntry {
            name: "Devutthana Ekadashi",
            date: date(11, 1),
            paksha: Paksha::Shukla,
            hindu_month: "Kartik",
            significance: "Vishnu wakes from his four-month sleep; Tulsi Vivah begins the wedding season",
            fasting_rules: &[
                "No grains, beans, or rice",
                "Perform Tulsi Vivah in the evening",
                "Close any Chaturmas vow taken at Devshayani",
            ],
            benefits: "Completion of Chaturmas merit and auspicious beginnings",
            moon_phase: "Waxing",
            vrata_katha: "The gods, unable to wake Vishnu, sent Lakshmi with conch and bell at dawn on this day, and the world's work resumed",
        },
        EkadashiEntry {
            name: "Utpanna Ekadashi",
            date: date(11, 15),
            paksha: Paksha::Krishna,
            hindu_month: "Margashirsha",
            significance: "Birth of Ekadashi Devi herself; traditional day to begin the yearly vrata cycle",
            fasting_rules: &[
                "No grains or beans",
                "First-time observers begin their vrata practice today",
                "Worship Ekadashi Devi alongside Vishnu",
            ],
            benefits: "Entry into the year-round Ekadashi discipline",
            moon_phase: "Waning",
            vrata_katha: "From Vishnu's own body arose a goddess who slew the demon Mura as the god slept; pleased, he named her Ekadashi",
        },
        EkadashiEntry {
            name: "Mokshada Ekadashi",
            date: date(12, 1),
            paksha: Paksha::Shukla,
            hindu_month: "Margashirsha",
            significance: "The liberation-giving Ekadashi, coinciding with Gita Jayanti",
            fasting_rules: &[
                "No grains, beans, or rice",
                "Recite or hear the Bhagavad Gita",
                "Keep vigil with lamps until midnight",
            ],
            benefits: "Moksha for oneself and elevation for ancestors",
            moon_phase: "Waxing",
            vrata_katha: "King Vaikhanasa freed his father from torment by transferring the merit of a single Mokshada fast",
        },
        EkadashiEntry {
            name: "Saphala Ekadashi",
            date: date(12, 15),
            paksha: Paksha::Krishna,
            hindu_month: "Pausha",
            significance: "Makes endeavors fruitful (saphala); kept with lamps in the year's darkest fortnight",
            fasting_rules: &[
                "No grains or beans",
                "Offer seasonal fruit and coconut to Narayana",
                "Light lamps beneath a sacred fig tree at dusk",
            ],
            benefits: "Success where repeated effort has failed",
            moon_phase: "Waning",
            vrata_katha: "Lumpaka, a king's exiled son living by plunder, was restored to the throne after an unintended Saphala vigil",
        },
        EkadashiEntry {
            name: "Pausha Putrada Ekadashi",
            date: date(12, 30),
            paksha: Paksha::Shukla,
            hindu_month: "Pausha",
            significance: "The year's closing Ekadashi, kept again for children and household welfare",
            fasting_rules: &[
                "No grains, beans, or rice",
                "Joint observance by both parents",
                "Donate warm clothing in the winter season",
            ],
            benefits: "Progeny and a protected household in the new year",
            moon_phase: "Waxing",
            vrata_katha: "As at the year's start, Suketuman's tale is retold: sincere observance grants what medicine and penance could not",
        },
    ]
});

/// The bundled Ekadashi table for `year`, ascending by date. Empty for any
/// year other than [`REFERENCE_YEAR`]; the live app fetches other years
/// remotely.
pub fn ekadashi_list(year: i32) -> &'static [EkadashiEntry] {
    if year == REFERENCE_YEAR {
        EKADASHI_2025.as_slice()
    } else {
        &[]
    }
}

/// First Ekadashi on or after `on` (inclusive), scanning the current
/// year's table and then the following year's.
///
/// After the last bundled entry (2025-12-30) this returns `None`, because
/// no table for the next year is bundled.
pub fn next_ekadashi(on: NaiveDate) -> Option<&'static EkadashiEntry> {
    ekadashi_list(on.year())
        .iter()
        .find(|e| e.date >= on)
        .or_else(|| ekadashi_list(on.year() + 1).first())
}

/// The Ekadashi falling exactly on `on`, if any.
pub fn todays_ekadashi(on: NaiveDate) -> Option<&'static EkadashiEntry> {
    ekadashi_list(on.year()).iter().find(|e| e.date == on)
}
