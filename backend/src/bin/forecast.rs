use chrono::Utc;
use clap::Parser;
use leyva_backend::{config::WeatherConfig, forecast::resolve_outcome};
use shared::{
    display::{format_temperature, DayLabel, WeatherIcon},
    i18n::Language,
    trip::colombia_today,
    Text, WeatherOutcome,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Print the Villa de Leyva forecast the site would show right now"
)]
struct Args {
    #[command(flatten)]
    weather: WeatherConfig,

    /// Label language, `es` or `en`
    #[arg(long, default_value = "es")]
    lang: Language,

    /// Print the raw outcome as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let client = args.weather.client()?;
    let today = colombia_today(Utc::now());
    let outcome = resolve_outcome(&client, &args.weather.plan(), today).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let lang = args.lang;
    let heading = match &outcome {
        WeatherOutcome::TripForecast { .. } => Text::TripWeather,
        WeatherOutcome::CurrentForecast { .. } => Text::CurrentWeather,
        WeatherOutcome::Failed { reason } => {
            eprintln!("{reason}");
            return Ok(());
        }
    };
    println!("{}", heading.get(lang));

    if let WeatherOutcome::CurrentForecast {
        current: Some(now), ..
    } = &outcome
    {
        println!(
            "  {} {}",
            WeatherIcon::from_code(now.weather_code).glyph(),
            format_temperature(now.temperature, lang)
        );
    }

    if outcome.days().is_empty() {
        println!("  {}", Text::NoWeatherData.get(lang));
    }
    for day in outcome.days() {
        let label = DayLabel::new(day.date, lang);
        println!(
            "  {} {} {:>2}  {}  {} {}  {} {}",
            label.weekday,
            label.month,
            label.day,
            WeatherIcon::from_code(day.weather_code).glyph(),
            Text::High.get(lang),
            format_temperature(day.max_temp, lang),
            Text::Low.get(lang),
            format_temperature(day.min_temp, lang),
        );
    }
    Ok(())
}
