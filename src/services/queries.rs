use std::cmp::Ordering;

use crate::models::country::{GiniLeader, NameList};
use crate::services::fetcher::CountrySource;
use crate::types::external::RcCountry;
use crate::utils::error::ApiError;

// Records without `name.common` are skipped everywhere below: they cannot be
// reported by name, so they never show up in a result.

fn names<'a>(countries: impl IntoIterator<Item = &'a RcCountry>) -> NameList {
    countries
        .into_iter()
        .filter_map(RcCountry::common_name)
        .map(str::to_owned)
        .collect()
}

fn top_by<F>(countries: &[RcCountry], n: usize, cmp: F) -> NameList
where
    F: Fn(&RcCountry, &RcCountry) -> Ordering,
{
    // sort a view, the input stays untouched
    let mut sorted: Vec<&RcCountry> = countries.iter().collect();
    sorted.sort_by(|a, b| cmp(a, b));
    sorted
        .into_iter()
        .filter_map(RcCountry::common_name)
        .take(n)
        .map(str::to_owned)
        .collect()
}

pub fn top_by_area(countries: &[RcCountry], n: usize) -> NameList {
    top_by(countries, n, |a, b| b.area.total_cmp(&a.area))
}

pub fn top_by_population(countries: &[RcCountry], n: usize) -> NameList {
    top_by(countries, n, |a, b| b.population.cmp(&a.population))
}

pub fn by_language(countries: &[RcCountry], language: &str) -> NameList {
    names(countries.iter().filter(|c| {
        c.languages
            .as_ref()
            .is_some_and(|langs| langs.values().any(|l| l == language))
    }))
}

/// Matches on the currency's display name (e.g. "Euro"), not its ISO code.
pub fn by_currency(countries: &[RcCountry], currency: &str) -> NameList {
    names(countries.iter().filter(|c| {
        c.currencies
            .as_ref()
            .is_some_and(|curs| curs.values().any(|cur| cur.name.as_deref() == Some(currency)))
    }))
}

pub fn landlocked(countries: &[RcCountry]) -> NameList {
    names(countries.iter().filter(|c| c.landlocked))
}

/// Country whose largest Gini entry is the highest in the dataset. Ties go to
/// the first such country in input order.
pub fn highest_gini(countries: &[RcCountry]) -> GiniLeader {
    let mut leader = GiniLeader::default();
    for c in countries {
        let (Some(name), Some(gini)) = (c.common_name(), c.gini.as_ref()) else {
            continue;
        };
        let Some(max) = gini.values().copied().reduce(f64::max) else {
            continue;
        };
        if max > leader.gini {
            leader = GiniLeader { name: Some(name.to_owned()), gini: max };
        }
    }
    leader
}

pub fn by_subregion(countries: &[RcCountry], subregion: &str) -> NameList {
    names(countries.iter().filter(|c| c.subregion.as_deref() == Some(subregion)))
}

pub fn by_timezone(countries: &[RcCountry], timezone: &str) -> NameList {
    names(countries.iter().filter(|c| c.timezones.iter().any(|tz| tz == timezone)))
}

pub async fn top_countries_by_area(src: &dyn CountrySource, n: usize) -> Result<NameList, ApiError> {
    let countries = src.all_countries().await?;
    Ok(top_by_area(&countries, n))
}

pub async fn top_countries_by_population(
    src: &dyn CountrySource,
    n: usize,
) -> Result<NameList, ApiError> {
    let countries = src.all_countries().await?;
    Ok(top_by_population(&countries, n))
}

pub async fn countries_by_language(
    src: &dyn CountrySource,
    language: &str,
) -> Result<NameList, ApiError> {
    let countries = src.all_countries().await?;
    Ok(by_language(&countries, language))
}

pub async fn countries_by_currency(
    src: &dyn CountrySource,
    currency: &str,
) -> Result<NameList, ApiError> {
    let countries = src.all_countries().await?;
    Ok(by_currency(&countries, currency))
}

pub async fn landlocked_countries(src: &dyn CountrySource) -> Result<NameList, ApiError> {
    let countries = src.all_countries().await?;
    Ok(landlocked(&countries))
}

pub async fn country_with_highest_gini(src: &dyn CountrySource) -> Result<GiniLeader, ApiError> {
    let countries = src.all_countries().await?;
    Ok(highest_gini(&countries))
}

pub async fn countries_by_subregion(
    src: &dyn CountrySource,
    subregion: &str,
) -> Result<NameList, ApiError> {
    let countries = src.all_countries().await?;
    Ok(by_subregion(&countries, subregion))
}

pub async fn countries_by_timezone(
    src: &dyn CountrySource,
    timezone: &str,
) -> Result<NameList, ApiError> {
    let countries = src.all_countries().await?;
    Ok(by_timezone(&countries, timezone))
}
