//! Static, bilingual site content.

use url::form_urlencoded;

use crate::i18n::{Language, Localized, Text};
use crate::section::Section;

pub const ADDRESS: &str = "Villa de Leyva, Boyacá, Colombia";

pub const CHECK_IN: Localized = Localized::new(
    "Martes, 30 de Diciembre, 2025 a las 3:00 PM",
    "Tuesday, December 30, 2025 at 3:00 PM",
);
pub const CHECK_OUT: Localized = Localized::new(
    "Viernes, 2 de Enero, 2026 a las 12:00 PM",
    "Friday, January 2, 2026 at 12:00 PM",
);

pub const HERO_IMAGE: &str = "/images/hero.avif";

/// Anchors of the landing page, in page order.
pub fn home_sections(lang: Language) -> Vec<Section> {
    [
        ("trip-info", Text::TripInfo),
        ("itinerary", Text::Itinerary),
        ("rooms", Text::RoomAssignments),
        ("weather", Text::Weather),
    ]
    .into_iter()
    .map(|(id, text)| Section::new(id, text.get(lang)))
    .collect()
}

/// Anchors of the things-to-do page, in page order.
pub fn things_to_do_sections(lang: Language) -> Vec<Section> {
    [
        ("restaurants", Text::Restaurants),
        ("breakfast", Text::Breakfast),
        ("lunch", Text::Lunch),
        ("dinner", Text::Dinner),
        ("activities", Text::Activities),
        ("cultural", Text::Cultural),
        ("nature", Text::NatureAdventure),
        ("nearby", Text::Nearby),
        ("family", Text::FamilyFriendly),
    ]
    .into_iter()
    .map(|(id, text)| Section::new(id, text.get(lang)))
    .collect()
}

pub struct ItineraryEvent {
    /// Empty when the event has no fixed time.
    pub time: &'static str,
    pub description: Localized,
}

pub struct ItineraryDay {
    pub date: Localized,
    pub subtitle: Option<Localized>,
    pub events: &'static [ItineraryEvent],
}

pub static ITINERARY: &[ItineraryDay] = &[
    ItineraryDay {
        date: Localized::new("Martes, 30 de Diciembre, 2025", "Tuesday, December 30, 2025"),
        subtitle: None,
        events: &[ItineraryEvent {
            time: "3:00 PM",
            description: Localized::same("Check-in"),
        }],
    },
    ItineraryDay {
        date: Localized::new(
            "Miércoles, 31 de Diciembre, 2025",
            "Wednesday, December 31, 2025",
        ),
        subtitle: Some(Localized::new("(Nochevieja)", "(New Year's Eve)")),
        events: &[
            ItineraryEvent {
                time: "8:00 PM",
                description: Localized::new(
                    "Cena Familiar en la Casa",
                    "Family Dinner at the House",
                ),
            },
            ItineraryEvent {
                time: "12:00 AM",
                description: Localized::new(
                    "Celebración de Año Nuevo",
                    "New Year's Celebration",
                ),
            },
        ],
    },
    ItineraryDay {
        date: Localized::new("Jueves, 1 de Enero, 2026", "Thursday, January 1, 2026"),
        subtitle: Some(Localized::new("(Día de Año Nuevo)", "(New Year's Day)")),
        events: &[ItineraryEvent {
            time: "",
            description: Localized::new("Abierto para actividades", "Open for activities"),
        }],
    },
    ItineraryDay {
        date: Localized::new("Viernes, 2 de Enero, 2026", "Friday, January 2, 2026"),
        subtitle: None,
        events: &[ItineraryEvent {
            time: "12:00 PM",
            description: Localized::same("Check-out"),
        }],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedKind {
    Double,
    Queen,
    Single,
}

#[derive(Debug, Clone, Copy)]
pub struct Bed {
    pub kind: BedKind,
    pub count: u8,
}

impl Bed {
    pub fn label(&self, lang: Language) -> String {
        let text = match (self.kind, self.count) {
            (BedKind::Single, 1) => Text::SingleBed,
            (BedKind::Single, _) => Text::SingleBeds,
            (BedKind::Double, _) => Text::DoubleBed,
            (BedKind::Queen, _) => Text::QueenBed,
        };
        if self.count == 1 {
            text.get(lang).to_string()
        } else {
            format!("{} {}", self.count, text.get(lang))
        }
    }
}

pub struct Room {
    pub number: u8,
    pub beds: &'static [Bed],
    pub guests: &'static [Localized],
}

const fn bed(kind: BedKind, count: u8) -> Bed {
    Bed { kind, count }
}

pub static ROOMS: &[Room] = &[
    Room {
        number: 1,
        beds: &[bed(BedKind::Double, 1), bed(BedKind::Single, 2)],
        guests: &[
            Localized::same("Juan Diego & Valentina"),
            Localized::same("Marly"),
            Localized::new("Mama de Valentina", "Valentina's Mom"),
        ],
    },
    Room {
        number: 2,
        beds: &[bed(BedKind::Queen, 1), bed(BedKind::Single, 3)],
        guests: &[
            Localized::same("Cesar & Angelica"),
            Localized::same("David Felipe"),
            Localized::same("Gabby"),
            Localized::new("Abuelo David", "Grandfather David"),
        ],
    },
    Room {
        number: 3,
        beds: &[bed(BedKind::Double, 1), bed(BedKind::Single, 1)],
        guests: &[
            Localized::same("Cliff & Marcela"),
            Localized::new("Tia Obeida", "Aunt Obeida"),
        ],
    },
    Room {
        number: 4,
        beds: &[bed(BedKind::Double, 1)],
        guests: &[Localized::same("Juan & Kelly")],
    },
    Room {
        number: 5,
        beds: &[bed(BedKind::Queen, 1), bed(BedKind::Single, 1)],
        guests: &[
            Localized::same("Truman & Annie"),
            Localized::new("Mama de Annie", "Annie's Mom"),
        ],
    },
];

fn google_url(base: &str, params: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        query.append_pair(key, value);
    }
    format!("{base}?{}", query.finish())
}

pub fn maps_url(query: &str) -> String {
    google_url(
        "https://www.google.com/maps/search/",
        &[("api", "1"), ("query", query)],
    )
}

pub fn search_url(query: &str) -> String {
    google_url("https://www.google.com/search", &[("q", query)])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    pub fn anchor(self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
        }
    }

    pub fn title(self) -> Text {
        match self {
            Meal::Breakfast => Text::Breakfast,
            Meal::Lunch => Text::Lunch,
            Meal::Dinner => Text::Dinner,
        }
    }
}

pub struct Restaurant {
    pub name: &'static str,
    pub description: Localized,
    pub maps_query: &'static str,
    pub note: Option<Localized>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub price_range: Option<&'static str>,
    pub meals: &'static [Meal],
}

impl Restaurant {
    pub fn maps_url(&self) -> String {
        maps_url(self.maps_query)
    }

    pub fn search_url(&self) -> String {
        search_url(self.maps_query)
    }
}

pub static RESTAURANTS: &[Restaurant] = &[
    Restaurant {
        name: "Café Los Gallos",
        description: Localized::new(
            "Café acogedor con excelentes desayunos. Prueba la Changüa.",
            "Cozy café with excellent breakfasts. Try the Changüa.",
        ),
        maps_query: "Café Los Gallos Villa de Leyva",
        note: None,
        rating: Some(4.5),
        review_count: Some(344),
        price_range: Some("COP $20.000 - $30.000"),
        meals: &[Meal::Breakfast],
    },
    Restaurant {
        name: "Chuska Cocina",
        description: Localized::new(
            "Cocina colombiana moderna. Excelente para desayuno y brunch.",
            "Modern Colombian cuisine. Excellent for breakfast and brunch.",
        ),
        maps_query: "Chuska Cocina Villa de Leyva",
        note: None,
        rating: Some(4.9),
        review_count: Some(4805),
        price_range: None,
        meals: &[Meal::Breakfast],
    },
    Restaurant {
        name: "Mercado Municipal",
        description: Localized::new(
            "Mercado de agricultores locales. Solo sábados hasta las 3 PM.",
            "Local farmers market. Saturdays only until 3 PM.",
        ),
        maps_query: "Mercado Municipal Villa de Leyva",
        note: Some(Localized::new(
            "(Solo sábados hasta las 3 PM)",
            "(Saturdays only until 3 PM)",
        )),
        rating: Some(4.4),
        review_count: Some(1642),
        price_range: None,
        meals: &[Meal::Breakfast, Meal::Lunch],
    },
    Restaurant {
        name: "Astral",
        description: Localized::new(
            "Panadería francesa con excelentes pasteles y café.",
            "French bakery with excellent pastries and coffee.",
        ),
        maps_query: "Astral Villa de Leyva",
        note: Some(Localized::new("(Panadería Francesa)", "(French Bakery)")),
        rating: Some(4.7),
        review_count: Some(428),
        price_range: Some("COP $1.000 - $20.000"),
        meals: &[Meal::Breakfast],
    },
    Restaurant {
        name: "Tierra de Carnes",
        description: Localized::new(
            "Carnes a la parrilla y costillas lentas. Famoso por las hamburguesas.",
            "Grilled meats and slow-cooked ribs. Famous for burgers.",
        ),
        maps_query: "Tierra de Carnes Villa de Leyva",
        note: None,
        rating: Some(4.7),
        review_count: Some(1305),
        price_range: Some("COP $40.000 - $60.000"),
        meals: &[Meal::Lunch, Meal::Dinner],
    },
    Restaurant {
        name: "La Maria Bistro",
        description: Localized::new(
            "Cocina colombiana e internacional. Dos ubicaciones.",
            "Colombian and international cuisine. Two locations.",
        ),
        maps_query: "La Maria Bistro Villa de Leyva",
        note: None,
        rating: Some(4.6),
        review_count: Some(864),
        price_range: Some("COP $25.000 - $40.000"),
        meals: &[Meal::Lunch],
    },
    Restaurant {
        name: "Casa San Pedro",
        description: Localized::new(
            "Excelente servicio y comida. Pasta altamente recomendada.",
            "Excellent service and food. Highly recommended pasta.",
        ),
        maps_query: "Restaurante Casa San Pedro Villa de Leyva",
        note: None,
        rating: Some(4.4),
        review_count: Some(1963),
        price_range: Some("COP $60.000 - $80.000"),
        meals: &[Meal::Dinner],
    },
    Restaurant {
        name: "Zarina Restaurante",
        description: Localized::new(
            "Cocina libanesa excepcional. Prueba el falafel y tabule.",
            "Exceptional Lebanese cuisine. Try the falafel and tabule.",
        ),
        maps_query: "Zarina Restaurante Villa de Leyva",
        note: Some(Localized::new("(Libanesa)", "(Lebanese)")),
        rating: Some(4.5),
        review_count: Some(169),
        price_range: Some("COP $40.000 - $50.000"),
        meals: &[Meal::Dinner],
    },
];

pub fn restaurants_for(meal: Meal) -> impl Iterator<Item = &'static Restaurant> {
    RESTAURANTS.iter().filter(move |r| r.meals.contains(&meal))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Cultural,
    Nature,
    Nearby,
    Family,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 4] = [
        ActivityCategory::Cultural,
        ActivityCategory::Nature,
        ActivityCategory::Nearby,
        ActivityCategory::Family,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            ActivityCategory::Cultural => "cultural",
            ActivityCategory::Nature => "nature",
            ActivityCategory::Nearby => "nearby",
            ActivityCategory::Family => "family",
        }
    }

    pub fn title(self) -> Text {
        match self {
            ActivityCategory::Cultural => Text::Cultural,
            ActivityCategory::Nature => Text::NatureAdventure,
            ActivityCategory::Nearby => Text::Nearby,
            ActivityCategory::Family => Text::FamilyFriendly,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ActivityCategory::Cultural => "📖",
            ActivityCategory::Nature => "⛰️",
            ActivityCategory::Nearby => "🗺️",
            ActivityCategory::Family => "❤️",
        }
    }
}

pub struct Activity {
    pub name: &'static str,
    pub description: Localized,
    pub category: ActivityCategory,
    pub link: &'static str,
    pub images: &'static [&'static str],
}

pub static ACTIVITIES: &[Activity] = &[
    Activity {
        name: "Plaza Mayor",
        description: Localized::new(
            "Una de las plazas empedradas más grandes de Colombia.",
            "One of the largest cobblestone squares in Colombia.",
        ),
        category: ActivityCategory::Cultural,
        link: "https://www.google.com/maps/search/?api=1&query=Plaza+Mayor+Villa+de+Leyva",
        images: &[
            "https://lh3.googleusercontent.com/gps-cs-s/AG0ilSyEyQN_wW0YBY4HNxX0EJTV9eEQm4JwRMCJEGrTpfuB9uq_MQg9bvfcZ4x31TU3q_lka3aYZzr0K9ka3o1lKzU-n7dvMwu5UdahVL-SqQwn9354Xv3NLu1vap2tVcBktl4XZ1wfJFTUV-B_=w408-h306-k-no",
        ],
    },
    Activity {
        name: "Museo El Fósil",
        description: Localized::new(
            "Fósil de kronosaurio de 120 millones de años.",
            "A 120-million-year-old kronosaurus fossil.",
        ),
        category: ActivityCategory::Cultural,
        link: "https://www.google.com/maps/search/?api=1&query=Museo+El+Fossil+Villa+de+Leyva",
        images: &[
            "https://lh3.googleusercontent.com/gps-cs-s/AG0ilSxLyVlThIgi-0MyzdgHf7C9FrNF2CuOEel-hS9TBirahvwpeTyk-KQcEavQ2ThSVEH07UsWSRGwDzcP_5muMA8W4ojTYv9bH4yAEwmMaJCUBlLTp-z5ZGdH8u6oycSiofYYg3faAQ=w408-h302-k-no",
        ],
    },
    Activity {
        name: "Casa Terracota",
        description: Localized::new(
            "Una casa entera construida en barro cocido.",
            "A whole house built from fired clay.",
        ),
        category: ActivityCategory::Cultural,
        link: "https://www.google.com/maps/search/?api=1&query=Casa+Terracota+Villa+de+Leyva",
        images: &[
            "https://lh3.googleusercontent.com/gps-cs-s/AG0ilSwizL0atxHqDM5pozHnVByD2MOVlnGt-9VkOqnFdhBikvvOoyFpG9ra_dZwk83TNFLIUBgg9voox3DD9l51R3DCyxPES_tlRFraPwuAtuN0m8m0DbHJwox2qbes_bK3eFaZy0PO=w408-h306-k-no",
        ],
    },
    Activity {
        name: "Pozos Azules",
        description: Localized::new(
            "Lagos de color turquesa a las afueras del pueblo.",
            "Turquoise ponds just outside town.",
        ),
        category: ActivityCategory::Nature,
        link: "https://www.google.com/maps/search/?api=1&query=Pozos+Azules+Villa+de+Leyva",
        images: &[
            "https://lh3.googleusercontent.com/gps-cs-s/AG0ilSw4HfeZaeH72-FmKkV8Mn9JEXZXQ74FzMJY0ai4RdueXBJBy3rFb6gXiGjUeOvr1vZbUrgvFc9rZSKKK660amLl8N4c8IQwhajVic84PdyLxxds5CEay50HuuOGlcehXjuXZS2RkcvhmxKB=w408-h307-k-no",
            "https://www.civitatis.com/f/colombia/villa-de-leyva/galeria/junto-lagos-azules.jpg",
        ],
    },
    Activity {
        name: "Horseback Riding",
        description: Localized::new(
            "Cabalgatas por el desierto y los viñedos.",
            "Rides through the desert and the vineyards.",
        ),
        category: ActivityCategory::Nature,
        link: "https://www.google.com/search?q=horseback+riding+tours+Villa+de+Leyva",
        images: &[
            "https://www.civitatis.com/f/colombia/villa-de-leyva/galeria/disfrutando-paseo-caballo-lagos.jpg",
        ],
    },
    Activity {
        name: "Ráquira",
        description: Localized::new(
            "Pueblo de artesanos famoso por su cerámica.",
            "Artisan village famous for its pottery.",
        ),
        category: ActivityCategory::Nearby,
        link: "https://www.google.com/maps/search/?api=1&query=Raquira+Colombia",
        images: &[
            "https://imagescdn.citix.com.co/citix/production/media/media/a2e3ef95f3eecc402c8bc9f491419f90.jpg",
            "https://lh3.googleusercontent.com/p/AF1QipMfATVvyZgnHxongTFaHtQIdDucBZeyaM8GPujA=s1360-w1360-h1020-rw",
        ],
    },
    Activity {
        name: "Casa al Revés",
        description: Localized::new(
            "Una casa construida patas arriba.",
            "A house built upside down.",
        ),
        category: ActivityCategory::Nearby,
        link: "https://www.google.com/maps/search/?api=1&query=Casa+al+Reves+Villa+de+Leyva",
        images: &[
            "https://lh3.googleusercontent.com/p/AF1QipNmZWEcxlLVUGXvi9rV9a76hW81pE0Eb10q0JXk=s1360-w1360-h1020-rw",
        ],
    },
    Activity {
        name: "Museo del Chocolate",
        description: Localized::new(
            "Historia del cacao con degustación incluida.",
            "The story of cacao, tasting included.",
        ),
        category: ActivityCategory::Family,
        link: "https://www.google.com/maps/search/?api=1&query=Museo+del+Chocolate+Villa+de+Leyva",
        images: &[
            "https://museodelchocolate.com.co/wp-content/uploads/2024/11/IMG_20220204_101535-1.jpg",
        ],
    },
    Activity {
        name: "Bike Rentals",
        description: Localized::new(
            "Alquiler de bicicletas para recorrer los alrededores.",
            "Bike rentals to explore the surroundings.",
        ),
        category: ActivityCategory::Family,
        link: "https://www.google.com/search?q=bike+rentals+Villa+de+Leyva",
        images: &[],
    },
];

pub fn activities_in(category: ActivityCategory) -> impl Iterator<Item = &'static Activity> {
    ACTIVITIES.iter().filter(move |a| a.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_sections_follow_page_order() {
        let ids: Vec<String> = home_sections(Language::En)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, ["trip-info", "itinerary", "rooms", "weather"]);
    }

    #[test]
    fn sections_have_unique_ids() {
        let sections = things_to_do_sections(Language::Es);
        let mut ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), sections.len());
    }

    #[test]
    fn maps_links_are_encoded() {
        assert_eq!(
            maps_url("Café Los Gallos Villa de Leyva"),
            "https://www.google.com/maps/search/?api=1&query=Caf%C3%A9+Los+Gallos+Villa+de+Leyva"
        );
        assert_eq!(
            search_url("Astral"),
            "https://www.google.com/search?q=Astral"
        );
    }

    #[test]
    fn bed_labels() {
        assert_eq!(bed(BedKind::Single, 3).label(Language::En), "3 single beds");
        assert_eq!(bed(BedKind::Queen, 1).label(Language::Es), "Cama queen");
    }

    #[test]
    fn every_meal_has_restaurants() {
        for meal in Meal::ALL {
            assert!(restaurants_for(meal).count() > 0, "{meal:?}");
        }
        assert_eq!(restaurants_for(Meal::Lunch).count(), 3);
    }

    #[test]
    fn every_category_has_activities() {
        for category in ActivityCategory::ALL {
            assert!(activities_in(category).count() > 0, "{category:?}");
        }
    }
}
