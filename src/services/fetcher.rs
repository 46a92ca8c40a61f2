use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, warn};

use crate::types::external::RcCountry;
use crate::utils::error::ApiError;

pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";
pub const DEFAULT_RETRIES: u32 = 3;

/// Anything able to hand out the full country dataset.
///
/// Queries take a `&dyn CountrySource` instead of reaching for the network
/// themselves, so callers can swap in a canned or cached dataset.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn all_countries(&self) -> Result<Vec<RcCountry>, ApiError>;
}

/// Live restcountries source. Every call is a fresh round trip.
#[derive(Clone)]
pub struct HttpCountrySource {
    pub http: Client,
    pub url: String,
    pub retries: u32,
}

impl HttpCountrySource {
    pub fn new(http: Client, url: impl Into<String>, retries: u32) -> Self {
        Self { http, url: url.into(), retries }
    }
}

#[async_trait]
impl CountrySource for HttpCountrySource {
    async fn all_countries(&self) -> Result<Vec<RcCountry>, ApiError> {
        fetch_countries_data(&self.http, &self.url, self.retries).await
    }
}

/// GET `url` and parse the body, making at most `retries` attempts with no
/// delay in between. A body that fails to parse uses up an attempt just like a
/// transport failure or a non-2xx status. `0` still makes one attempt.
pub async fn fetch_countries_data(
    http: &Client,
    url: &str,
    retries: u32,
) -> Result<Vec<RcCountry>, ApiError> {
    let attempts = retries.max(1);
    let mut attempt = 1;
    loop {
        debug!(attempt, attempts, url, "fetching countries");
        match fetch_once(http, url).await {
            Ok(countries) => return Ok(countries),
            Err(e) if attempt >= attempts => {
                error!(error = %e, "Failed to fetch data after {} attempts", attempts);
                return Err(e);
            }
            Err(e) => {
                warn!(error = %e, attempt, attempts, "Retrying fetch... ({}/{})", attempt, attempts);
                attempt += 1;
            }
        }
    }
}

async fn fetch_once(http: &Client, url: &str) -> Result<Vec<RcCountry>, ApiError> {
    let resp = http
        .get(url)
        .send()
        .await
        .map_err(|e| ApiError::External(format!("Could not fetch data from restcountries: {}", e)))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::External(format!("HTTP error! status: {}", status.as_u16())));
    }

    resp.json()
        .await
        .map_err(|e| ApiError::External(format!("Could not parse countries: {}", e)))
}
