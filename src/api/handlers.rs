use std::str::FromStr;

use axum::extract::{Path, State};
use axum::Json;

use crate::api::{ApiError, AppState};
use crate::model::{Classification, Competition, ImageGallery, JourneyMap, UpcomingMatch};

/// The classification and fixtures routes are not parameterized by
/// competition; they answer for the CONMEBOL qualifiers, as the frontend
/// expects.
const DEFAULT_COMPETITION: Competition = Competition::Conmebol;

/// `GET /api/classification`
pub async fn classification_handler(
    State(state): State<AppState>,
) -> Result<Json<Classification>, ApiError> {
    let table = state.client.get_classification(DEFAULT_COMPETITION).await?;
    Ok(Json(table))
}

/// `GET /api/results` — merged best-effort view over every competition.
/// Never errors; a broken upstream page only thins the payload.
pub async fn results_handler(State(state): State<AppState>) -> Json<JourneyMap> {
    Json(state.client.get_all_results().await)
}

/// `GET /api/results/{competition}` — one competition. A failed scrape
/// degrades to `{}` (see [`crate::ScrapeClient::get_results_best_effort`]);
/// only an unknown slug errors.
pub async fn competition_results_handler(
    State(state): State<AppState>,
    Path(competition): Path<String>,
) -> Result<Json<JourneyMap>, ApiError> {
    let competition = Competition::from_str(&competition)
        .map_err(|_| ApiError::not_found(format!("unknown competition: {competition}")))?;
    Ok(Json(state.client.get_results_best_effort(competition).await))
}

/// `GET /api/matches`
pub async fn matches_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UpcomingMatch>>, ApiError> {
    let matches = state.client.get_matches(DEFAULT_COMPETITION).await?;
    Ok(Json(matches))
}

/// `GET /api/images` — `{}` when the configured page has no gallery or
/// fails to fetch; gallery scrapes share the results' best-effort posture.
pub async fn images_handler(State(state): State<AppState>) -> Json<ImageGallery> {
    Json(state.client.get_images_best_effort(&state.images_url).await)
}

/// Fallback for unknown routes; keeps 404s in the JSON envelope too.
pub async fn not_found_handler() -> ApiError {
    ApiError::not_found("route not found")
}
