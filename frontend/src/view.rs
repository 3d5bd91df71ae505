use seed::{prelude::*, *};
use shared::{
    content::{
        self, Activity, ActivityCategory, Meal, Restaurant, ACTIVITIES, ADDRESS, CHECK_IN,
        CHECK_OUT, HERO_IMAGE, ITINERARY, ROOMS,
    },
    display::{format_temperature, DayLabel, WeatherIcon},
    i18n::Text,
    rating::{format_review_count, Stars},
    trip::{days_until_trip, should_show_countdown},
    Carousel, Language, WeatherDay, WeatherOutcome,
};

use crate::{weather_heading, Model, Msg, Page};

pub fn view(model: &Model) -> Vec<Node<Msg>> {
    let main = match model.page {
        Page::Home => view_home(model),
        Page::ThingsToDo => view_things_to_do(model),
    };
    vec![view_nav(model), main, view_footer(model.lang)]
}

fn view_nav(model: &Model) -> Node<Msg> {
    let lang = model.lang;
    let link = |page: Page, text: Text| {
        a![
            C!["nav-link", IF!(model.page == page => "active")],
            attrs! { At::Href => page.href() },
            text.get(lang),
        ]
    };
    let code = |language: Language, label: &str| {
        span![C![IF!(lang == language => "active")], label]
    };

    nav![
        C!["main-nav"],
        a![
            C!["brand"],
            attrs! { At::Href => Page::Home.href() },
            h1![Text::Title.get(lang)],
        ],
        div![
            C!["nav-links"],
            link(Page::Home, Text::Home),
            link(Page::ThingsToDo, Text::ThingsToDo),
        ],
        view_weather_widget(model),
        a![
            C!["directions"],
            attrs! {
                At::Href => content::maps_url(ADDRESS),
                At::Target => "_blank",
                At::Rel => "noopener noreferrer",
            },
            Text::GetDirections.get(lang),
        ],
        button![
            C!["lang-toggle"],
            attrs! { At::from("aria-label") => "Toggle language" },
            code(Language::Es, "ES"),
            span!["|"],
            code(Language::En, "EN"),
            ev(Ev::Click, |_| Msg::ToggleLanguage),
        ],
    ]
}

/// Hidden while loading and whenever the current-only query failed.
fn view_weather_widget(model: &Model) -> Node<Msg> {
    let Some(current) = model.current else {
        return empty![];
    };
    div![
        C!["weather-widget"],
        span![WeatherIcon::from_code(current.weather_code).glyph()],
        span![format_temperature(current.temperature, model.lang)],
    ]
}

fn view_sub_nav(model: &Model) -> Node<Msg> {
    nav![
        C!["sub-nav"],
        model.tracker.sections().iter().map(|section| {
            let id = section.id.clone();
            a![
                C![
                    "sub-nav-link",
                    IF!(model.tracker.is_active(&section.id) => "active")
                ],
                attrs! { At::Href => format!("#{}", section.id) },
                section.label.as_str(),
                ev(Ev::Click, move |event| {
                    event.prevent_default();
                    Msg::NavClicked(id)
                }),
            ]
        }),
    ]
}

fn view_footer(lang: Language) -> Node<Msg> {
    footer![
        C!["footer"],
        p![Text::Title.get(lang)],
        small![Text::TripDates.get(lang)],
    ]
}

fn view_home(model: &Model) -> Node<Msg> {
    let lang = model.lang;
    main![
        C!["home"],
        header![
            C!["hero"],
            img![attrs! { At::Src => HERO_IMAGE, At::Alt => Text::Title.get(lang) }],
            div![
                C!["hero-text"],
                h1![Text::Title.get(lang)],
                p![Text::TripDates.get(lang)],
            ],
        ],
        view_sub_nav(model),
        view_trip_info(model),
        view_itinerary(lang),
        view_rooms(lang),
        view_weather(model),
    ]
}

fn view_trip_info(model: &Model) -> Node<Msg> {
    let lang = model.lang;
    let row = |label: Text, value: &str| {
        div![
            C!["info-row"],
            span![C!["label"], label.get(lang)],
            strong![value],
        ]
    };
    let countdown = if should_show_countdown(model.now) {
        div![
            C!["countdown"],
            span![C!["countdown-days"], days_until_trip(model.now).to_string()],
            p![Text::DaysUntil.get(lang)],
        ]
    } else {
        empty![]
    };

    section![
        C!["trip-info"],
        attrs! { At::Id => "trip-info" },
        h2![Text::TripInfo.get(lang)],
        div![
            C!["info-card"],
            row(Text::Address, ADDRESS),
            row(Text::CheckIn, CHECK_IN.get(lang)),
            row(Text::CheckOut, CHECK_OUT.get(lang)),
        ],
        countdown,
    ]
}

fn view_itinerary(lang: Language) -> Node<Msg> {
    section![
        C!["itinerary"],
        attrs! { At::Id => "itinerary" },
        h2![Text::Itinerary.get(lang)],
        ITINERARY.iter().map(|day| {
            div![
                C!["itinerary-day"],
                h3![day.date.get(lang)],
                day.subtitle
                    .map(|subtitle| p![C!["subtitle"], subtitle.get(lang)])
                    .unwrap_or_else(|| empty![]),
                ul![day.events.iter().map(|event| {
                    li![
                        IF!(!event.time.is_empty() => span![C!["time"], event.time]),
                        span![event.description.get(lang)],
                    ]
                })],
            ]
        }),
    ]
}

fn view_rooms(lang: Language) -> Node<Msg> {
    section![
        C!["rooms"],
        attrs! { At::Id => "rooms" },
        h2![Text::RoomAssignments.get(lang)],
        div![
            C!["room-grid"],
            ROOMS.iter().map(|room| {
                div![
                    C!["room-card"],
                    h3![format!("{} {}", Text::Bedroom.get(lang), room.number)],
                    h4![Text::Beds.get(lang)],
                    ul![room.beds.iter().map(|bed| li![bed.label(lang)])],
                    h4![Text::Guests.get(lang)],
                    ul![room.guests.iter().map(|guest| li![guest.get(lang)])],
                ]
            }),
        ],
    ]
}

fn view_weather(model: &Model) -> Node<Msg> {
    let lang = model.lang;
    let body = match &model.weather {
        None => vec![p![C!["weather-loading"], Text::LoadingWeather.get(lang)]],
        Some(WeatherOutcome::Failed { reason }) => vec![p![C!["weather-error"], reason.as_str()]],
        Some(outcome) => view_forecast(outcome, lang),
    };

    section![
        C!["weather"],
        attrs! { At::Id => "weather" },
        h2![Text::Weather.get(lang)],
        body,
    ]
}

fn view_forecast(outcome: &WeatherOutcome, lang: Language) -> Vec<Node<Msg>> {
    let mut nodes = Vec::new();
    if let Some((title, subtitle)) = weather_heading(outcome) {
        nodes.push(h3![title.get(lang)]);
        nodes.push(p![C!["subtitle"], subtitle.get(lang)]);
    }
    if let WeatherOutcome::CurrentForecast {
        current: Some(current),
        ..
    } = outcome
    {
        nodes.push(div![
            C!["current-conditions"],
            span![
                C!["weather-icon"],
                WeatherIcon::from_code(current.weather_code).glyph()
            ],
            strong![format_temperature(current.temperature, lang)],
        ]);
    }
    if outcome.days().is_empty() {
        nodes.push(p![Text::NoWeatherData.get(lang)]);
    } else {
        nodes.push(div![
            C!["forecast-grid"],
            outcome.days().iter().map(|day| view_day(day, lang)),
        ]);
    }
    nodes
}

fn view_day(day: &WeatherDay, lang: Language) -> Node<Msg> {
    let label = DayLabel::new(day.date, lang);
    div![
        C!["forecast-day"],
        p![C!["weekday"], label.weekday],
        p![C!["date"], format!("{} {}", label.day, label.month)],
        span![
            C!["weather-icon"],
            WeatherIcon::from_code(day.weather_code).glyph()
        ],
        p![
            span![C!["label"], Text::High.get(lang)],
            " ",
            format_temperature(day.max_temp, lang),
        ],
        p![
            span![C!["label"], Text::Low.get(lang)],
            " ",
            format_temperature(day.min_temp, lang),
        ],
    ]
}

fn view_things_to_do(model: &Model) -> Node<Msg> {
    let lang = model.lang;
    main![
        C!["things-to-do"],
        header![
            C!["page-header"],
            h1![Text::ThingsToDoTitle.get(lang)],
            p![Text::ThingsToDoSubtitle.get(lang)],
        ],
        view_sub_nav(model),
        section![
            attrs! { At::Id => "restaurants" },
            h2![Text::Restaurants.get(lang)],
            Meal::ALL.iter().map(|&meal| view_meal(meal, lang)),
        ],
        section![
            attrs! { At::Id => "activities" },
            h2![Text::Activities.get(lang)],
            ActivityCategory::ALL
                .iter()
                .map(|&category| view_category(model, category)),
        ],
    ]
}

fn view_meal(meal: Meal, lang: Language) -> Node<Msg> {
    div![
        C!["meal"],
        attrs! { At::Id => meal.anchor() },
        h3![meal.title().get(lang)],
        div![
            C!["card-grid"],
            content::restaurants_for(meal).map(|restaurant| view_restaurant(restaurant, lang)),
        ],
    ]
}

fn view_restaurant(restaurant: &Restaurant, lang: Language) -> Node<Msg> {
    div![
        C!["restaurant-card"],
        h4![restaurant.name],
        restaurant
            .rating
            .map(|rating| view_rating(rating, restaurant.review_count))
            .unwrap_or_else(|| empty![]),
        restaurant
            .price_range
            .map(|price| span![C!["price"], price])
            .unwrap_or_else(|| empty![]),
        p![restaurant.description.get(lang)],
        restaurant
            .note
            .map(|note| p![C!["note"], note.get(lang)])
            .unwrap_or_else(|| empty![]),
        div![
            C!["card-links"],
            external_link(restaurant.maps_url(), Text::ViewOnMaps.get(lang)),
            external_link(restaurant.search_url(), Text::LearnMore.get(lang)),
        ],
    ]
}

fn view_rating(rating: f64, review_count: Option<u32>) -> Node<Msg> {
    let stars = Stars::from_rating(rating);
    div![
        C!["rating"],
        (0..stars.full).map(|_| span![C!["star", "full"], "★"]),
        IF!(stars.half => span![C!["star", "half"], "★"]),
        (0..stars.empty).map(|_| span![C!["star", "empty"], "☆"]),
        span![C!["rating-value"], format!("{rating:.1}")],
        review_count
            .map(|count| span![C!["reviews"], format!("({})", format_review_count(count))])
            .unwrap_or_else(|| empty![]),
    ]
}

fn view_category(model: &Model, category: ActivityCategory) -> Node<Msg> {
    let lang = model.lang;
    div![
        C!["activity-category"],
        attrs! { At::Id => category.anchor() },
        h3![span![category.icon()], " ", category.title().get(lang)],
        div![
            C!["card-grid"],
            ACTIVITIES
                .iter()
                .enumerate()
                .filter(|(_, activity)| activity.category == category)
                .map(|(idx, activity)| view_activity(model, idx, activity)),
        ],
    ]
}

fn view_activity(model: &Model, idx: usize, activity: &Activity) -> Node<Msg> {
    let lang = model.lang;
    let carousel = model
        .carousels
        .get(idx)
        .map(|carousel| view_carousel(idx, carousel, activity.name, lang))
        .unwrap_or_else(|| empty![]);

    div![
        C!["activity-card"],
        carousel,
        h4![activity.name],
        p![activity.description.get(lang)],
        external_link(activity.link.to_string(), Text::LearnMore.get(lang)),
    ]
}

/// Renders nothing once every image has failed.
fn view_carousel(activity: usize, carousel: &Carousel, alt: &str, lang: Language) -> Node<Msg> {
    let Some(current) = carousel.current() else {
        return empty![];
    };
    let count = carousel.visible().len();
    let position = carousel.position().unwrap_or(0);
    let failed_url = current.to_string();
    let image = img![
        el_key(&current),
        attrs! {
            At::Src => current,
            At::Alt => format!("{alt} - {}", position + 1),
        },
        ev(Ev::Error, move |_| Msg::ImageFailed {
            activity,
            url: failed_url,
        }),
    ];
    if count == 1 {
        return div![C!["carousel"], image];
    }

    let arrow = |class: &'static str, label: Text, glyph: &'static str, msg: fn(usize) -> Msg| {
        button![
            C!["carousel-arrow", class],
            attrs! {
                At::Type => "button",
                At::from("aria-label") => label.get(lang),
            },
            glyph,
            ev(Ev::Click, move |event| {
                event.prevent_default();
                event.stop_propagation();
                msg(activity)
            }),
        ]
    };

    div![
        C!["carousel"],
        image,
        arrow("prev", Text::PreviousImage, "‹", Msg::CarouselPrevious),
        arrow("next", Text::NextImage, "›", Msg::CarouselNext),
        div![
            C!["carousel-dots"],
            (0..count).map(|dot| {
                button![
                    C!["dot", IF!(dot == position => "active")],
                    attrs! {
                        At::Type => "button",
                        At::from("aria-label") => (dot + 1).to_string(),
                    },
                    ev(Ev::Click, move |_| Msg::CarouselSelect {
                        activity,
                        position: dot,
                    }),
                ]
            }),
        ],
    ]
}

fn external_link(href: String, label: &str) -> Node<Msg> {
    a![
        C!["external-link"],
        attrs! {
            At::Href => href,
            At::Target => "_blank",
            At::Rel => "noopener noreferrer",
        },
        label,
    ]
}
