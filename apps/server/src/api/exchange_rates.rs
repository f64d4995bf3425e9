use std::sync::Arc;

use crate::{
    api::{parse_decimal, present},
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    routing::get,
    Form, Json, Router,
};
use exchanger_core::fx::{CurrencyPair, ExchangeRate};
use serde::Deserialize;

const INVALID_RATE: &str = "invalid rate format";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewExchangeRateForm {
    base_currency_code: Option<String>,
    target_currency_code: Option<String>,
    rate: Option<String>,
}

#[derive(Deserialize)]
struct UpdateExchangeRateForm {
    rate: Option<String>,
}

async fn get_exchange_rates(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ExchangeRate>>> {
    let rates = state.fx_service.get_all_exchange_rates().await?;
    Ok(Json(rates))
}

async fn get_exchange_rate(
    Path(pair): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ExchangeRate>> {
    let pair = CurrencyPair::parse(&pair)?;
    let rate = state
        .fx_service
        .get_exchange_rate(&pair.base, &pair.target)
        .await?;
    Ok(Json(rate))
}

async fn add_exchange_rate(
    State(state): State<Arc<AppState>>,
    form: Result<Form<NewExchangeRateForm>, FormRejection>,
) -> ApiResult<(StatusCode, Json<ExchangeRate>)> {
    let Form(form) = form.map_err(|_| ApiError::BadRequest("invalid form data".into()))?;
    let (Some(base), Some(target), Some(rate)) = (
        present(form.base_currency_code),
        present(form.target_currency_code),
        present(form.rate),
    ) else {
        return Err(ApiError::BadRequest("all fields are required".into()));
    };
    let rate = parse_decimal(&rate, INVALID_RATE)?;

    let created = state
        .fx_service
        .add_exchange_rate(&base, &target, rate)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_exchange_rate(
    Path(pair): Path<String>,
    State(state): State<Arc<AppState>>,
    form: Result<Form<UpdateExchangeRateForm>, FormRejection>,
) -> ApiResult<Json<ExchangeRate>> {
    let pair = CurrencyPair::parse(&pair)?;
    let Form(form) = form.map_err(|_| ApiError::BadRequest("invalid form data".into()))?;
    let rate = present(form.rate).ok_or_else(|| ApiError::BadRequest("rate is required".into()))?;
    let rate = parse_decimal(&rate, INVALID_RATE)?;

    let updated = state
        .fx_service
        .update_exchange_rate(&pair.base, &pair.target, rate)
        .await?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/exchangeRates",
            get(get_exchange_rates).post(add_exchange_rate),
        )
        .route(
            "/exchangeRate/{pair}",
            get(get_exchange_rate).patch(update_exchange_rate),
        )
}
