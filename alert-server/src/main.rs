//! CanopyGuard Alert Backend Server
//!
//! HTTP front for the detection engine. The server owns everything the
//! engine refuses to know about: routes, CORS, the GeoJSON alert envelope,
//! simulated sensor feeds, and request validation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 CANOPYGUARD ALERT API                │
//! ├──────────────────────────────────────────────────────┤
//! │  ┌──────────┐  ┌────────────┐  ┌──────────────────┐  │
//! │  │  Routes  │  │  Envelope  │  │  Simulated scan  │  │
//! │  │  (Axum)  │  │  (GeoJSON) │  │  (4 sites)       │  │
//! │  └────┬─────┘  └─────┬──────┘  └────────┬─────────┘  │
//! │       └──────────────┼──────────────────┘            │
//! │                      ▼                               │
//! │            ┌──────────────────┐                      │
//! │            │ canopyguard-core │                      │
//! │            │  (pure verdicts) │                      │
//! │            └──────────────────┘                      │
//! └──────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod models;
mod scenarios;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let default_filter = if config.is_production() {
        "canopyguard_api=info,tower_http=info"
    } else {
        "canopyguard_api=debug,tower_http=debug"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("CanopyGuard Alert Server starting...");
    tracing::info!("Environment: {}", config.environment);

    let state = AppState {
        config: config.clone(),
    };
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::check))
        .route("/alerts", get(handlers::alerts::list))
        .route("/summary", get(handlers::alerts::summary))
        .route("/api/v1/detect/deforestation", post(handlers::detect::deforestation))
        .route("/api/v1/detect/mining", post(handlers::detect::mining))
        .route("/api/v1/detect/fire", post(handlers::detect::fire))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(AppState {
            config: config::Config::from_env(),
        })
    }

    #[test]
    fn test_health_route_is_up() {
        tokio_test::block_on(async {
            let resp = test_router()
                .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        });
    }

    #[test]
    fn test_unknown_route_is_404() {
        tokio_test::block_on(async {
            let resp = test_router()
                .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        });
    }

    #[test]
    fn test_alert_feed_is_geojson_features() {
        tokio_test::block_on(async {
            let resp = test_router()
                .oneshot(Request::builder().uri("/alerts").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);

            let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            let alerts = json["alerts"].as_array().unwrap();
            assert!(!alerts.is_empty());
            assert_eq!(alerts[0]["type"], "Feature");
            assert_eq!(alerts[0]["geometry"]["type"], "Point");
        });
    }

    #[test]
    fn test_detect_fire_roundtrip_over_http() {
        tokio_test::block_on(async {
            let body = serde_json::json!({
                "viirs_confidence_level": "high",
                "frp_mw": 125.0,
                "persistence_passes": 4,
                "spread_rate_ha_6h": 650.0,
                "in_protected_area": true
            });
            let resp = test_router()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/v1/detect/fire")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(body.to_string()))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);

            let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(json["detected"], true);
            assert_eq!(json["verdict"]["severity"], "CRITICAL");
            assert_eq!(json["verdict"]["immediate"], true);
        });
    }

    #[test]
    fn test_invalid_metrics_are_400() {
        tokio_test::block_on(async {
            let body = serde_json::json!({
                "bsi": 3.0,
                "bsi_change": 0.15,
                "dist_to_road_m": 450.0,
                "area_ha": 12.5
            });
            let resp = test_router()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/v1/detect/mining")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(body.to_string()))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        });
    }
}
