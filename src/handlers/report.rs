use serde::Serialize;
use std::io::{self, Write};
use tracing::info;

use crate::services::fetcher::CountrySource;
use crate::services::queries;
use crate::utils::error::ApiError;

const QUERY_COUNT: usize = 8;

/// Runs the report and fails if any query failed, so the exit status of the
/// demo reflects an unreachable upstream.
pub async fn report<O: Write, E: Write>(
    src: &dyn CountrySource,
    out: &mut O,
    err: &mut E,
) -> Result<(), anyhow::Error> {
    let failed = run_report(src, out, err).await?;
    if failed > 0 {
        return Err(anyhow::anyhow!("{} of {} queries failed", failed, QUERY_COUNT));
    }
    Ok(())
}

/// Runs every query once with the demo arguments, printing each label and its
/// result as JSON to `out`. A failed query goes to `err` and the rest still
/// run. Returns how many queries failed.
pub async fn run_report<O: Write, E: Write>(
    src: &dyn CountrySource,
    out: &mut O,
    err: &mut E,
) -> io::Result<usize> {
    let mut failed = 0;

    emit(out, err, &mut failed, "Top 5 countries by area:",
        queries::top_countries_by_area(src, 5).await)?;
    emit(out, err, &mut failed, "Top 5 countries by population:",
        queries::top_countries_by_population(src, 5).await)?;
    emit(out, err, &mut failed, "Countries where Portuguese is spoken:",
        queries::countries_by_language(src, "Portuguese").await)?;
    emit(out, err, &mut failed, "Countries that accept USD:",
        queries::countries_by_currency(src, "USD").await)?;
    emit(out, err, &mut failed, "Landlocked countries:",
        queries::landlocked_countries(src).await)?;
    emit(out, err, &mut failed, "Country with the highest Gini index:",
        queries::country_with_highest_gini(src).await)?;
    emit(out, err, &mut failed, "Countries in Middle Africa:",
        queries::countries_by_subregion(src, "Middle Africa").await)?;
    emit(out, err, &mut failed, "Countries in timezone UTC+01:00:",
        queries::countries_by_timezone(src, "UTC+01:00").await)?;

    info!(failed, "report finished");
    Ok(failed)
}

fn emit<T: Serialize, O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    failed: &mut usize,
    label: &str,
    result: Result<T, ApiError>,
) -> io::Result<()> {
    match result {
        Ok(value) => {
            writeln!(out, "{}", label)?;
            let body = serde_json::to_string_pretty(&value).map_err(io::Error::from)?;
            writeln!(out, "{}", body)
        }
        Err(e) => {
            *failed += 1;
            writeln!(err, "{} failed: {}", label.trim_end_matches(':'), e)
        }
    }
}
