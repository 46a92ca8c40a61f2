use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::config::AppState;
use crate::services::queries;
use crate::utils::error::ApiError;

const DEFAULT_TOP_N: i64 = 10;

#[derive(Deserialize)]
pub struct TopParams {
    /// Non-positive values yield an empty list.
    pub n: Option<i64>,
}

impl TopParams {
    fn count(&self) -> usize {
        usize::try_from(self.n.unwrap_or(DEFAULT_TOP_N)).unwrap_or(0)
    }
}

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

pub async fn top_by_area(
    State(state): State<AppState>,
    Query(p): Query<TopParams>,
) -> Result<impl IntoResponse, ApiError> {
    let names = queries::top_countries_by_area(state.source.as_ref(), p.count()).await?;
    Ok((axum::http::StatusCode::OK, Json(names)))
}

pub async fn top_by_population(
    State(state): State<AppState>,
    Query(p): Query<TopParams>,
) -> Result<impl IntoResponse, ApiError> {
    let names = queries::top_countries_by_population(state.source.as_ref(), p.count()).await?;
    Ok((axum::http::StatusCode::OK, Json(names)))
}

pub async fn by_language(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require("language", &language)?;
    let names = queries::countries_by_language(state.source.as_ref(), &language).await?;
    Ok((axum::http::StatusCode::OK, Json(names)))
}

pub async fn by_currency(
    State(state): State<AppState>,
    Path(currency): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require("currency", &currency)?;
    let names = queries::countries_by_currency(state.source.as_ref(), &currency).await?;
    Ok((axum::http::StatusCode::OK, Json(names)))
}

pub async fn landlocked(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let names = queries::landlocked_countries(state.source.as_ref()).await?;
    Ok((axum::http::StatusCode::OK, Json(names)))
}

pub async fn highest_gini(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let leader = queries::country_with_highest_gini(state.source.as_ref()).await?;
    Ok((axum::http::StatusCode::OK, Json(leader)))
}

pub async fn by_subregion(
    State(state): State<AppState>,
    Path(subregion): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require("subregion", &subregion)?;
    let names = queries::countries_by_subregion(state.source.as_ref(), &subregion).await?;
    Ok((axum::http::StatusCode::OK, Json(names)))
}

pub async fn by_timezone(
    State(state): State<AppState>,
    Path(timezone): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require("timezone", &timezone)?;
    let names = queries::countries_by_timezone(state.source.as_ref(), &timezone).await?;
    Ok((axum::http::StatusCode::OK, Json(names)))
}

// Liveness only; does not touch the upstream.
pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(serde_json::json!({ "ok": true })))
}
