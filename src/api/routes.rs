//! Router wiring.
//!
//! # Endpoints
//!
//! - `GET /api/classification` - standings table
//! - `GET /api/results` - merged journey map across all competitions
//! - `GET /api/results/{competition}` - one competition by slug
//! - `GET /api/matches` - upcoming fixtures
//! - `GET /api/images` - gallery of the configured page
//!
//! Everything else answers 404 with a JSON body. CORS is wide open: the API
//! is read-only and consumed by third-party frontends.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    classification_handler, competition_results_handler, images_handler, matches_handler,
    not_found_handler, results_handler,
};
use crate::api::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/classification", get(classification_handler))
        .route("/api/results", get(results_handler))
        .route("/api/results/{competition}", get(competition_results_handler))
        .route("/api/matches", get(matches_handler))
        .route("/api/images", get(images_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::Value;

    use super::*;
    use crate::ScrapeClient;

    fn test_server() -> TestServer {
        let state = AppState {
            client: ScrapeClient::new(),
            images_url: "http://localhost/unused".to_owned(),
        };
        TestServer::new(app_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let server = test_server();
        let response = server.get("/api/nope").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["error"], "route not found");
    }

    #[tokio::test]
    async fn test_unknown_competition_slug_is_json_404() {
        let server = test_server();
        let response = server.get("/api/results/bundesliga").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("unknown competition"));
    }
}
