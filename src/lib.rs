pub mod client;
pub mod config;
pub mod db;
pub mod email;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::email::{DisabledNotifier, Notifier, SmtpNotifier};
use crate::state::{AppState, SharedState};

/// Build the notification transport from config. Without SMTP settings
/// the service still accepts submissions but every notification fails.
pub fn build_notifier(config: &Config) -> Arc<dyn Notifier> {
    match config.smtp.as_ref() {
        Some(smtp) => match SmtpNotifier::new(smtp) {
            Ok(notifier) => {
                tracing::info!("SMTP relay configured");
                Arc::new(notifier)
            }
            Err(e) => {
                tracing::warn!("SMTP relay not available: {e}");
                Arc::new(DisabledNotifier)
            }
        },
        None => {
            tracing::warn!("SMTP not configured, contact notifications will fail");
            Arc::new(DisabledNotifier)
        }
    }
}

pub fn build_app(pool: PgPool, config: Config, notifier: Arc<dyn Notifier>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("Invalid POSTBOX_CORS_ORIGIN"),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true);

    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        notifier,
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
