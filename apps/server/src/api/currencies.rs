use std::sync::Arc;

use crate::{
    api::present,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    routing::get,
    Form, Json, Router,
};
use exchanger_core::currencies::{Currency, NewCurrency};
use serde::Deserialize;

#[derive(Deserialize)]
struct NewCurrencyForm {
    name: Option<String>,
    code: Option<String>,
    sign: Option<String>,
}

async fn get_currencies(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Currency>>> {
    let currencies = state.currency_service.get_all_currencies().await?;
    Ok(Json(currencies))
}

async fn get_currency(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Currency>> {
    let currency = state.currency_service.get_currency_by_code(&code).await?;
    Ok(Json(currency))
}

async fn add_currency(
    State(state): State<Arc<AppState>>,
    form: Result<Form<NewCurrencyForm>, FormRejection>,
) -> ApiResult<(StatusCode, Json<Currency>)> {
    let Form(form) = form.map_err(|_| ApiError::BadRequest("invalid form data".into()))?;
    let (Some(name), Some(code), Some(sign)) =
        (present(form.name), present(form.code), present(form.sign))
    else {
        return Err(ApiError::BadRequest("all fields are required".into()));
    };

    let created = state
        .currency_service
        .add_currency(NewCurrency::new(code, name, sign))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/currencies", get(get_currencies).post(add_currency))
        .route("/currency/{code}", get(get_currency))
}
