use reqwest::Client;
use std::{env, str::FromStr, sync::Arc, time::Duration};

use crate::services::fetcher::{
    CountrySource, HttpCountrySource, DEFAULT_COUNTRIES_URL, DEFAULT_RETRIES,
};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CountrySource>,
}

impl AppState {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self { source }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Print the eight demo queries and exit.
    Report,
    /// Serve the queries over HTTP.
    Serve,
}

impl FromStr for AppMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" => Ok(AppMode::Report),
            "serve" => Ok(AppMode::Serve),
            other => Err(anyhow::anyhow!("APP_MODE must be report or serve, got {:?}", other)),
        }
    }
}

#[derive(Debug)]
pub struct AppConfig {
    pub mode: AppMode,
    pub port: u16,
    pub countries_url: String,
    pub fetch_retries: u32,
    pub external_timeout_ms: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let mode: AppMode = env::var("APP_MODE").unwrap_or_else(|_| "report".into()).parse()?;
        let port: u16 = env::var("PORT").unwrap_or_else(|_| "8080".into()).parse()?;
        let countries_url = env::var("COUNTRIES_URL").unwrap_or_else(|_| DEFAULT_COUNTRIES_URL.into());
        let fetch_retries: u32 = match env::var("FETCH_RETRIES") {
            Ok(s) => s.parse()?,
            Err(_) => DEFAULT_RETRIES,
        };
        // unset means no client-side timeout
        let external_timeout_ms: Option<u64> = env::var("EXTERNAL_TIMEOUT_MS")
            .ok()
            .map(|s| s.parse::<u64>())
            .transpose()?;
        Ok(Self { mode, port, countries_url, fetch_retries, external_timeout_ms })
    }

    pub fn build_state(&self) -> Result<AppState, anyhow::Error> {
        let mut builder = Client::builder();
        if let Some(ms) = self.external_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder.build()?;

        let source = HttpCountrySource::new(http, self.countries_url.clone(), self.fetch_retries);
        Ok(AppState::new(Arc::new(source)))
    }
}
