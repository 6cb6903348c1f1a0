//! Synthetic temperature history and a moving-average forecast.
//!
//! No observations are fetched. A year of daily temperatures is fabricated from a
//! sinusoidal seasonal cycle plus uniform noise, and the forecast extrapolates the last
//! month with a 7-day moving average, a linear trend, a small seasonal term and jitter.

use std::f64::consts::PI;

use chrono::{Days, Local, NaiveDate};
use log::debug;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tower_core::constants::DAYS_PER_YEAR;
use tower_core::rounding::round1;

/// Days of synthetic history generated by default.
pub const HISTORY_DAYS: usize = 365;
/// Number of trailing days used as the forecast basis.
pub const RECENT_WINDOW_DAYS: usize = 30;
/// Moving-average window in days.
pub const SMA_WINDOW_DAYS: usize = 7;
/// Forecast horizon used when none is given.
pub const DEFAULT_DAYS_AHEAD: usize = 7;

const BASE_TEMPERATURE_C: f64 = 20.0;
const SEASONAL_AMPLITUDE_C: f64 = 10.0;
const HISTORY_NOISE_C: f64 = 5.0;
const FORECAST_SEASONAL_AMPLITUDE_C: f64 = 2.0;
const FORECAST_NOISE_C: f64 = 2.0;
const BASE_WIND_SPEED_M_S: f64 = 15.0;
const WIND_NOISE_M_S: f64 = 10.0;
const MIN_WIND_SPEED_M_S: f64 = 5.0;
const MAX_WIND_SPEED_M_S: f64 = 35.0;

/// Errors produced by the forecast generator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ForecastError {
    #[error("city name must not be empty")]
    MissingCity,
    #[error("history is empty")]
    EmptyHistory,
    #[error("at least {required} days of history are needed (have {available})")]
    InsufficientHistory { required: usize, available: usize },
    #[error("forecast horizon must be at least one day")]
    NoDays,
}

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// 1-based offset from today.
    pub day: usize,
    pub date: NaiveDate,
    /// Temperature in °C, one decimal.
    pub temperature: f64,
    /// Wind speed in m/s, one decimal.
    pub wind_speed: f64,
}

/// Headline statistics over a forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    pub avg_temperature: f64,
    pub avg_wind_speed: f64,
    pub max_temperature: f64,
    pub min_temperature: f64,
}

/// City forecast returned to front-ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub city: String,
    pub days: Vec<ForecastDay>,
}

/// Holds a daily temperature history and extrapolates from it.
#[derive(Debug, Clone)]
pub struct WeatherPredictor {
    history: Vec<f64>,
}

impl WeatherPredictor {
    /// Create a predictor with a fresh year of synthetic history.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Create a predictor whose synthetic history is drawn from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            history: generate_sample_history(HISTORY_DAYS, rng),
        }
    }

    /// Use caller-provided daily temperatures, oldest first.
    pub fn from_history(history: Vec<f64>) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// The last `count` history entries dated backwards from `today`, oldest first.
    /// The newest entry is dated `today`.
    pub fn recent_history(&self, count: usize, today: NaiveDate) -> Vec<(NaiveDate, f64)> {
        let recent = &self.history[self.history.len().saturating_sub(count)..];
        let newest = recent.len().saturating_sub(1);
        recent
            .iter()
            .enumerate()
            .filter_map(|(index, &temperature)| {
                today
                    .checked_sub_days(Days::new((newest - index) as u64))
                    .map(|date| (date, temperature))
            })
            .collect()
    }

    /// Forecast `days_ahead` days for `city` starting tomorrow, using the ambient RNG.
    pub fn predict_temperature(
        &self,
        city: &str,
        days_ahead: usize,
    ) -> Result<Forecast, ForecastError> {
        let today = Local::now().date_naive();
        self.predict_temperature_with(city, days_ahead, today, &mut rand::rng())
    }

    /// Forecast relative to `today`, drawing jitter from `rng`.
    pub fn predict_temperature_with<R: Rng + ?Sized>(
        &self,
        city: &str,
        days_ahead: usize,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Forecast, ForecastError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ForecastError::MissingCity);
        }
        if days_ahead == 0 {
            return Err(ForecastError::NoDays);
        }
        if self.history.len() < SMA_WINDOW_DAYS {
            return Err(ForecastError::InsufficientHistory {
                required: SMA_WINDOW_DAYS,
                available: self.history.len(),
            });
        }

        let recent = &self.history[self.history.len().saturating_sub(RECENT_WINDOW_DAYS)..];
        let base = simple_moving_average(recent, SMA_WINDOW_DAYS)?;
        let trend = (recent[recent.len() - 1] - recent[recent.len() - SMA_WINDOW_DAYS])
            / SMA_WINDOW_DAYS as f64;
        debug!("forecast basis for {city}: sma={base:.3} trend={trend:.4}/day");

        let mut days = Vec::with_capacity(days_ahead);
        for day in 1..=days_ahead {
            let offset = day as f64;
            let seasonal = (2.0 * PI * offset / DAYS_PER_YEAR).sin() * FORECAST_SEASONAL_AMPLITUDE_C;
            let variation = rng.random_range(-FORECAST_NOISE_C..FORECAST_NOISE_C);
            let temperature = base + trend * offset + seasonal + variation;

            let wind_speed = (BASE_WIND_SPEED_M_S + rng.random_range(-WIND_NOISE_M_S..WIND_NOISE_M_S))
                .clamp(MIN_WIND_SPEED_M_S, MAX_WIND_SPEED_M_S);

            days.push(ForecastDay {
                day,
                date: today + Days::new(day as u64),
                temperature: round1(temperature),
                wind_speed: round1(wind_speed),
            });
        }

        Ok(Forecast {
            city: city.to_string(),
            days,
        })
    }
}

impl Default for WeatherPredictor {
    fn default() -> Self {
        Self::new()
    }
}

/// Fabricate `days` of daily temperatures: seasonal sine plus uniform noise, one decimal.
pub fn generate_sample_history<R: Rng + ?Sized>(days: usize, rng: &mut R) -> Vec<f64> {
    (0..days)
        .map(|i| {
            let seasonal = SEASONAL_AMPLITUDE_C * (2.0 * PI * i as f64 / DAYS_PER_YEAR).sin();
            let noise = rng.random_range(-HISTORY_NOISE_C..HISTORY_NOISE_C);
            round1(BASE_TEMPERATURE_C + seasonal + noise)
        })
        .collect()
}

/// Mean of the last `window` samples, or of all samples when fewer are available.
pub fn simple_moving_average(data: &[f64], window: usize) -> Result<f64, ForecastError> {
    if data.is_empty() || window == 0 {
        return Err(ForecastError::EmptyHistory);
    }
    let tail = &data[data.len().saturating_sub(window)..];
    Ok(tail.iter().sum::<f64>() / tail.len() as f64)
}

/// Averages (one decimal) and temperature extremes of a forecast.
pub fn summarize(days: &[ForecastDay]) -> Option<ForecastSummary> {
    if days.is_empty() {
        return None;
    }
    let n = days.len() as f64;
    let avg_temperature = days.iter().map(|d| d.temperature).sum::<f64>() / n;
    let avg_wind_speed = days.iter().map(|d| d.wind_speed).sum::<f64>() / n;
    let max_temperature = days
        .iter()
        .map(|d| d.temperature)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_temperature = days
        .iter()
        .map(|d| d.temperature)
        .fold(f64::INFINITY, f64::min);

    Some(ForecastSummary {
        avg_temperature: round1(avg_temperature),
        avg_wind_speed: round1(avg_wind_speed),
        max_temperature,
        min_temperature,
    })
}
