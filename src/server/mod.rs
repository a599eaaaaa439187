//! Case-study data server
//!
//! One read-only JSON route with a CORS layer restricted to the configured
//! browser origin. The catalog is loaded once at startup and served as-is.

pub mod config;

use crate::model::record::Catalog;
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use std::fs;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use self::config::Settings;

/// Dataset compiled into the binary; settings can point at a file instead
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/case_studies.json");

/// Shared state handed to request handlers
pub struct AppState {
    pub catalog: Catalog,
}

/// Load the catalog from the override path, or the embedded dataset
pub fn load_catalog(data_path: Option<&str>) -> Result<Catalog> {
    let raw = match data_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path))?,
        None => EMBEDDED_CATALOG.to_string(),
    };

    serde_json::from_str(&raw).context("Failed to parse catalog JSON")
}

/// Build the router with its single data route and CORS restriction
pub fn build_router(state: Arc<AppState>, allowed_origin: &str) -> Result<Router> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .with_context(|| format!("Invalid allowed origin {}", allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET]);

    Ok(Router::new()
        .route("/api/data", get(get_data))
        .layer(cors)
        .with_state(state))
}

/// GET /api/data - the full catalog; query parameters are ignored
async fn get_data(State(state): State<Arc<AppState>>) -> Json<Catalog> {
    Json(state.catalog.clone())
}

/// Run the server until shutdown
pub async fn run(settings: Settings) -> Result<()> {
    let catalog = load_catalog(settings.data_path.as_deref())?;
    tracing::info!(records = catalog.items.len(), "catalog loaded");

    let state = Arc::new(AppState { catalog });
    let app = build_router(state, &settings.allowed_origin)?;

    let listener = tokio::net::TcpListener::bind(&settings.bind)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind))?;
    tracing::info!("listening on {}", settings.bind);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::normalize;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn fixture_catalog() -> Catalog {
        serde_json::from_str(
            r#"{
                "items": [
                    {
                        "item": {
                            "id": "case-study/quartz",
                            "additionalFields": {
                                "imageSrcUrl": "https://cdn.example.com/quartz.png",
                                "customer-name": "Quartz Financial",
                                "headline": "Quartz settles trades in minutes",
                                "headlineUrl": "https://example.com/quartz",
                                "descriptionSummary": "Quartz rebuilt its clearing pipeline.",
                                "displayLocation": "New York"
                            }
                        },
                        "tags": [
                            { "tagNamespaceId": "GLOBAL#industry", "name": "Finance" }
                        ]
                    },
                    {
                        "item": {
                            "id": "case-study/pinetree",
                            "additionalFields": {
                                "imageSrcUrl": "https://cdn.example.com/pinetree.png",
                                "customer-name": "Pinetree Robotics",
                                "headline": "Pinetree simulates assembly lines",
                                "headlineUrl": "https://example.com/pinetree",
                                "descriptionSummary": "Pinetree validates layouts in simulation.",
                                "displayLocation": "Tokyo"
                            }
                        },
                        "tags": []
                    }
                ]
            }"#,
        )
        .expect("fixture catalog")
    }

    fn test_app() -> Router {
        build_router(
            Arc::new(AppState {
                catalog: fixture_catalog(),
            }),
            "http://localhost:3000",
        )
        .expect("test router")
    }

    #[tokio::test]
    async fn test_get_data_returns_the_catalog() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::get("/api/data")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("data response");

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");
        let catalog: Catalog = serde_json::from_slice(&bytes).expect("catalog json");
        assert_eq!(catalog.items.len(), 2);

        let records = normalize(&catalog);
        assert_eq!(records[0].industry, "Finance");
        assert_eq!(records[1].industry, "");
    }

    #[tokio::test]
    async fn test_query_parameters_are_ignored() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::get("/api/data?page=3&industry=Finance")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("data response");

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");
        let catalog: Catalog = serde_json::from_slice(&bytes).expect("catalog json");
        assert_eq!(catalog.items.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = test_app();
        let response = app
            .oneshot(Request::get("/api/other").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_permits_only_the_configured_origin() {
        let app = test_app();
        let response = app
            .clone()
            .oneshot(
                Request::get("/api/data")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("allowed-origin response");

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("http://localhost:3000")
        );

        let response = app
            .oneshot(
                Request::get("/api/data")
                    .header(header::ORIGIN, "http://other.example")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("foreign-origin response");

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = load_catalog(None).expect("embedded catalog");
        // Enough records to spill onto a second page of 15.
        assert!(catalog.items.len() > 15);

        let records = normalize(&catalog);
        assert!(records.iter().any(|record| record.industry.is_empty()));
        assert!(records.iter().all(|record| !record.customer_name.is_empty()));
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let result = build_router(
            Arc::new(AppState {
                catalog: fixture_catalog(),
            }),
            "not an origin\u{7f}",
        );
        assert!(result.is_err());
    }
}
