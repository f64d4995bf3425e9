use std::{str::FromStr, sync::Arc};

use crate::{config::Config, error::ApiError, main_lib::AppState};
use axum::{
    http::{HeaderValue, StatusCode},
    routing::get,
    Router,
};
use rust_decimal::Decimal;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod currencies;
mod exchange;
mod exchange_rates;

pub async fn healthz() -> &'static str {
    "ok"
}

/// Treats absent and blank form or query values the same way.
/// Non-blank values are passed on exactly as sent.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses a decimal as sent by clients, accepting exponent notation too.
/// Digit-group separators such as `1_000` are rejected.
pub(crate) fn parse_decimal(raw: &str, message: &str) -> Result<Decimal, ApiError> {
    let raw = raw.trim();
    if raw.contains('_') {
        return Err(ApiError::BadRequest(message.to_string()));
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| ApiError::BadRequest(message.to_string()))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let router = Router::new()
        .route("/healthz", get(healthz))
        .merge(currencies::router())
        .merge(exchange_rates::router())
        .merge(exchange::router())
        .with_state(state)
        .layer(cors);
    layered(router, config)
}

/// Request id, deadline and tracing layers shared by every route.
fn layered(router: Router, config: &Config) -> Router {
    router
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
