use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, Layer};

use crate::services::fetcher::CountrySource;
use crate::types::external::RcCountry;
use crate::utils::error::ApiError;

pub fn countries(v: Value) -> Vec<RcCountry> {
    serde_json::from_value(v).expect("country fixture")
}

/// Small dataset shaped like the restcountries v3.1 payload.
pub fn sample() -> Vec<RcCountry> {
    countries(serde_json::json!([
      {
        "name": { "common": "Brazil", "official": "Federative Republic of Brazil" },
        "cca2": "BR",
        "area": 8515767.0,
        "population": 212559409,
        "languages": { "por": "Portuguese" },
        "currencies": { "BRL": { "name": "Brazilian real", "symbol": "R$" } },
        "landlocked": false,
        "gini": { "2019": 53.4 },
        "subregion": "South America",
        "timezones": ["UTC-05:00", "UTC-04:00", "UTC-03:00", "UTC-02:00"]
      },
      {
        "name": { "common": "Chad" },
        "area": 1284000.0,
        "population": 16425859,
        "languages": { "ara": "Arabic", "fra": "French" },
        "currencies": { "XAF": { "name": "Central African CFA franc", "symbol": "Fr" } },
        "landlocked": true,
        "gini": { "2011": 43.3 },
        "subregion": "Middle Africa",
        "timezones": ["UTC+01:00"]
      },
      {
        "name": { "common": "Angola" },
        "area": 1246700.0,
        "population": 32866268,
        "languages": { "por": "Portuguese" },
        "currencies": { "AOA": { "name": "Angolan kwanza", "symbol": "Kz" } },
        "landlocked": false,
        "gini": { "2000": 52.0, "2018": 51.3 },
        "subregion": "Middle Africa",
        "timezones": ["UTC+01:00"]
      },
      {
        "name": { "common": "Ecuador" },
        "area": 276841.0,
        "population": 17643060,
        "languages": { "spa": "Spanish" },
        "currencies": { "USD": { "name": "United States dollar", "symbol": "$" } },
        "landlocked": false,
        "subregion": "South America",
        "timezones": ["UTC-06:00", "UTC-05:00"]
      },
      {
        "name": { "common": "Antarctica" },
        "area": 14000000.0,
        "population": 1000,
        "landlocked": false,
        "timezones": ["UTC-03:00", "UTC+03:00"]
      }
    ]))
}

/// In-memory source that counts how often it is asked for data.
pub struct StubSource {
    countries: Vec<RcCountry>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new(countries: Vec<RcCountry>) -> Self {
        Self { countries, calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountrySource for StubSource {
    async fn all_countries(&self) -> Result<Vec<RcCountry>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.countries.clone())
    }
}

/// Source whose upstream is always unavailable.
pub struct DownSource;

#[async_trait]
impl CountrySource for DownSource {
    async fn all_countries(&self) -> Result<Vec<RcCountry>, ApiError> {
        Err(ApiError::External("HTTP error! status: 503".into()))
    }
}

/// Layer counting events emitted at one level.
#[derive(Clone)]
pub struct LevelCounter {
    level: Level,
    hits: Arc<AtomicUsize>,
}

impl LevelCounter {
    pub fn new(level: Level) -> Self {
        Self { level, hits: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == self.level {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }
    }
}
