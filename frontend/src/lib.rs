mod dom;
mod view;

use chrono::{DateTime, Utc};
use seed::{prelude::*, *};
use serde::de::DeserializeOwned;
use shared::{
    content::{self, ACTIVITIES},
    i18n::Text,
    schedule::{Debouncer, Ticket},
    weather::UNAVAILABLE,
    Carousel, CurrentWeather, Language, Section, SectionTracker, WeatherOutcome,
};
use wasm_bindgen::prelude::wasm_bindgen;

const COUNTDOWN_REFRESH_MS: u32 = 60 * 60 * 1000;

fn api_root() -> String {
    if let Some(url) = option_env!("FRONTEND_API_ROOT") {
        return url.trim_end_matches('/').to_string();
    }
    "/api".to_string()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    ThingsToDo,
}

impl Page {
    fn from_path(path: &[String]) -> Self {
        match path.first().map(String::as_str) {
            Some("things-to-do") => Page::ThingsToDo,
            _ => Page::Home,
        }
    }

    fn href(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::ThingsToDo => "/things-to-do",
        }
    }

    /// Whether the page carries the forecast panel.
    fn shows_weather(self) -> bool {
        self == Page::Home
    }

    fn sections(self, lang: Language) -> Vec<Section> {
        match self {
            Page::Home => content::home_sections(lang),
            Page::ThingsToDo => content::things_to_do_sections(lang),
        }
    }
}

pub struct Model {
    page: Page,
    lang: Language,
    tracker: SectionTracker,
    debounce: Debouncer,
    /// Trailing scroll timer. Replacing or dropping the handle aborts it.
    scroll_timer: Option<CmdHandle>,
    /// `None` until the backend answers.
    weather: Option<WeatherOutcome>,
    current: Option<CurrentWeather>,
    /// One per entry of `ACTIVITIES`, same order.
    carousels: Vec<Carousel>,
    now: DateTime<Utc>,
}

pub enum Msg {
    UrlChanged(subs::UrlChanged),
    Scrolled,
    ScrollSettled(Ticket),
    NavClicked(String),
    ToggleLanguage,
    WeatherFetched(WeatherOutcome),
    CurrentFetched(Option<CurrentWeather>),
    ImageFailed { activity: usize, url: String },
    CarouselNext(usize),
    CarouselPrevious(usize),
    CarouselSelect { activity: usize, position: usize },
    Tick,
}

pub fn init(url: Url, orders: &mut impl Orders<Msg>) -> Model {
    orders
        .subscribe(Msg::UrlChanged)
        .stream(streams::window_event(Ev::Scroll, |_| Msg::Scrolled))
        .stream(streams::window_event(Ev::Resize, |_| Msg::Scrolled))
        .stream(streams::interval(COUNTDOWN_REFRESH_MS, || Msg::Tick))
        .perform_cmd(fetch_weather())
        .perform_cmd(fetch_current_weather())
        .after_next_render(|_| Msg::Scrolled);

    let page = Page::from_path(url.path());
    let lang = Language::default();
    Model {
        page,
        lang,
        tracker: SectionTracker::new(page.sections(lang)),
        debounce: Debouncer::default(),
        scroll_timer: None,
        weather: None,
        current: None,
        carousels: activity_carousels(),
        now: Utc::now(),
    }
}

fn activity_carousels() -> Vec<Carousel> {
    ACTIVITIES
        .iter()
        .map(|activity| Carousel::new(activity.images.iter().map(|url| url.to_string()).collect()))
        .collect()
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::UrlChanged(subs::UrlChanged(url)) => {
            let page = Page::from_path(url.path());
            if page == model.page {
                return;
            }
            model.page = page;
            model.debounce.cancel();
            model.scroll_timer = None;
            model.tracker = SectionTracker::new(page.sections(model.lang));
            if page.shows_weather() {
                model.weather = None;
                orders.perform_cmd(fetch_weather());
            }
            orders.after_next_render(|_| Msg::Scrolled);
        }
        Msg::Scrolled => {
            let changed = refresh_active_section(model);
            let ticket = model.debounce.on_event();
            model.scroll_timer = Some(orders.perform_cmd_with_handle(cmds::timeout(
                model.debounce.delay_ms(),
                move || Msg::ScrollSettled(ticket),
            )));
            if !changed {
                orders.skip();
            }
        }
        Msg::ScrollSettled(ticket) => {
            if !model.debounce.on_timer(ticket) {
                orders.skip();
                return;
            }
            model.scroll_timer = None;
            if !refresh_active_section(model) {
                orders.skip();
            }
        }
        Msg::NavClicked(id) => {
            dom::scroll_to_section(&id);
            orders.skip();
        }
        Msg::ToggleLanguage => {
            model.lang = model.lang.toggle();
            model.tracker.replace_sections(model.page.sections(model.lang));
        }
        Msg::WeatherFetched(outcome) => model.weather = Some(outcome),
        Msg::CurrentFetched(current) => model.current = current,
        Msg::ImageFailed { activity, url } => {
            web_sys::console::debug_1(&format!("[frontend] image failed to load: {url}").into());
            if let Some(carousel) = model.carousels.get_mut(activity) {
                carousel.mark_failed(&url);
            }
        }
        Msg::CarouselNext(activity) => {
            if let Some(carousel) = model.carousels.get_mut(activity) {
                carousel.next();
            }
        }
        Msg::CarouselPrevious(activity) => {
            if let Some(carousel) = model.carousels.get_mut(activity) {
                carousel.previous();
            }
        }
        Msg::CarouselSelect { activity, position } => {
            if let Some(carousel) = model.carousels.get_mut(activity) {
                carousel.select(position);
            }
        }
        Msg::Tick => model.now = Utc::now(),
    }
}

/// Measures the page and updates the highlighted sub-navigation entry.
/// Returns true when the active section changed.
fn refresh_active_section(model: &mut Model) -> bool {
    let Some(scroll) = dom::scroll_state() else {
        return false;
    };
    let bounds = dom::measure_sections(&model.tracker, scroll.scroll_y);
    model.tracker.recompute(&bounds, scroll)
}

async fn fetch_weather() -> Msg {
    let outcome = match get_json::<WeatherOutcome>(format!("{}/weather", api_root())).await {
        Ok(outcome) => outcome,
        Err(err) => {
            web_sys::console::error_1(&format!("[frontend] weather request failed: {err}").into());
            WeatherOutcome::Failed {
                reason: UNAVAILABLE.to_string(),
            }
        }
    };
    Msg::WeatherFetched(outcome)
}

async fn fetch_current_weather() -> Msg {
    let url = format!("{}/weather/current", api_root());
    match get_json::<CurrentWeather>(url).await {
        Ok(current) => Msg::CurrentFetched(Some(current)),
        Err(err) => {
            web_sys::console::debug_1(&format!("[frontend] current weather hidden: {err}").into());
            Msg::CurrentFetched(None)
        }
    }
}

async fn get_json<T: DeserializeOwned + 'static>(url: String) -> Result<T, String> {
    let raw = Request::new(url)
        .method(Method::Get)
        .fetch()
        .await
        .map_err(|err| format!("{err:?}"))?;
    let response = raw.check_status().map_err(|err| format!("{err:?}"))?;
    response.json::<T>().await.map_err(|err| format!("{err:?}"))
}

/// Heading and subtitle of the weather panel for a settled outcome.
fn weather_heading(outcome: &WeatherOutcome) -> Option<(Text, Text)> {
    match outcome {
        WeatherOutcome::TripForecast { .. } => {
            Some((Text::TripWeather, Text::TripWeatherSubtitle))
        }
        WeatherOutcome::CurrentForecast { .. } => {
            Some((Text::CurrentWeather, Text::CurrentWeatherSubtitle))
        }
        WeatherOutcome::Failed { .. } => None,
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    App::start("app", init, update, view::view);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pages_follow_the_url() {
        assert_eq!(Page::from_path(&path(&[])), Page::Home);
        assert_eq!(Page::from_path(&path(&["things-to-do"])), Page::ThingsToDo);
        assert_eq!(Page::from_path(&path(&["unknown"])), Page::Home);
        assert_eq!(Page::ThingsToDo.href(), "/things-to-do");
    }

    #[test]
    fn only_home_refetches_the_forecast() {
        assert!(Page::Home.shows_weather());
        assert!(!Page::ThingsToDo.shows_weather());
        let home = Page::Home.sections(Language::En);
        assert!(home.iter().any(|s| s.id == "weather"));
        let things = Page::ThingsToDo.sections(Language::En);
        assert!(!things.iter().any(|s| s.id == "weather"));
    }

    #[test]
    fn each_page_has_its_own_sections() {
        let home: Vec<String> = Page::Home
            .sections(Language::Es)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(home, ["trip-info", "itinerary", "rooms", "weather"]);

        let things = Page::ThingsToDo.sections(Language::En);
        assert_eq!(things.first().map(|s| s.id.as_str()), Some("restaurants"));
        assert_eq!(things.last().map(|s| s.id.as_str()), Some("family"));
    }

    #[test]
    fn one_carousel_per_activity() {
        let carousels = activity_carousels();
        assert_eq!(carousels.len(), ACTIVITIES.len());
        for (carousel, activity) in carousels.iter().zip(ACTIVITIES) {
            assert_eq!(carousel.visible().len(), activity.images.len());
        }
    }

    #[test]
    fn panel_heading_tracks_the_outcome() {
        let payload = r#"{"kind":"current_forecast","current":null,"days":[]}"#;
        let outcome: WeatherOutcome = serde_json::from_str(payload).unwrap();
        assert_eq!(
            weather_heading(&outcome),
            Some((Text::CurrentWeather, Text::CurrentWeatherSubtitle))
        );

        let failed = WeatherOutcome::Failed {
            reason: UNAVAILABLE.to_string(),
        };
        assert_eq!(weather_heading(&failed), None);
    }
}
