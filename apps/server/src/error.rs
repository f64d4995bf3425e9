use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use exchanger_core::currencies::CurrencyError;
use exchanger_core::errors::Error as CoreError;
use exchanger_core::fx::FxError;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    /// Request could not be read: missing fields, unparseable numbers, bad form bodies.
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::Validation(_) | CoreError::Fx(FxError::InvalidCurrencyPair(_)) => {
            StatusCode::BAD_REQUEST
        }
        CoreError::Currency(CurrencyError::NotFound(_) | CurrencyError::NoneFound) => {
            StatusCode::NOT_FOUND
        }
        CoreError::Fx(FxError::RateNotFound { .. } | FxError::NoneFound) => StatusCode::NOT_FOUND,
        CoreError::Currency(CurrencyError::AlreadyExists(_))
        | CoreError::Fx(FxError::RateAlreadyExists { .. }) => StatusCode::CONFLICT,
        CoreError::Cancelled(_) => StatusCode::REQUEST_TIMEOUT,
        CoreError::Database(_) | CoreError::Unexpected(_) | CoreError::Fx(FxError::ConversionError(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) if e.is_internal() => {
                tracing::error!("Request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
            ApiError::Core(e) => (core_status(e), e.to_string()),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        };
        (status, Json(ErrorBody { message: msg })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
