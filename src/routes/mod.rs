use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::AppState;
use crate::handlers::countries::{
    by_currency, by_language, by_subregion, by_timezone, health, highest_gini, landlocked,
    top_by_area, top_by_population,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/countries/top/area", get(top_by_area))
        .route("/countries/top/population", get(top_by_population))
        .route("/countries/language/:language", get(by_language))
        .route("/countries/currency/:currency", get(by_currency))
        .route("/countries/landlocked", get(landlocked))
        .route("/countries/gini/highest", get(highest_gini))
        .route("/countries/subregion/:subregion", get(by_subregion))
        .route("/countries/timezone/:timezone", get(by_timezone))
        .route("/healthz", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
