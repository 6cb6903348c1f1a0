use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tower_load_calculator::forecast::{DEFAULT_DAYS_AHEAD, WeatherPredictor, summarize};

const HISTORY_PREVIEW_DAYS: usize = 7;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Synthetic short-range temperature forecast"
)]
struct Cli {
    /// City name used to label the forecast
    #[arg(long)]
    city: String,

    /// Days to forecast
    #[arg(long, default_value_t = DEFAULT_DAYS_AHEAD)]
    days: usize,

    /// Seed for reproducible history and jitter
    #[arg(long)]
    seed: Option<u64>,

    /// Print the last week of synthetic history before the forecast
    #[arg(long)]
    show_history: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let today = chrono::Local::now().date_naive();
    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    let predictor = WeatherPredictor::with_rng(&mut rng);

    if cli.show_history {
        println!("=== Last {HISTORY_PREVIEW_DAYS} days of synthetic history ===");
        for (date, temperature) in predictor.recent_history(HISTORY_PREVIEW_DAYS, today) {
            println!("{}: {:.1} °C", date.format("%Y-%m-%d"), temperature);
        }
        println!();
    }

    let forecast = predictor.predict_temperature_with(&cli.city, cli.days, today, &mut rng)?;

    println!("=== {} forecast, next {} days ===", forecast.city, forecast.days.len());
    for day in &forecast.days {
        println!(
            "Day {} ({}): {:.1} °C | wind {:.1} m/s",
            day.day,
            day.date.format("%Y-%m-%d"),
            day.temperature,
            day.wind_speed
        );
    }

    if let Some(summary) = summarize(&forecast.days) {
        println!();
        println!("Average temperature: {:.1} °C", summary.avg_temperature);
        println!("Average wind speed: {:.1} m/s", summary.avg_wind_speed);
        println!("Maximum temperature: {:.1} °C", summary.max_temperature);
        println!("Minimum temperature: {:.1} °C", summary.min_temperature);
    }

    Ok(())
}
