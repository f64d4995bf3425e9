use std::sync::Arc;

use crate::{
    api::{parse_decimal, present},
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use exchanger_core::fx::CurrencyConversion;
use serde::Deserialize;

#[derive(Deserialize)]
struct ExchangeQuery {
    from: Option<String>,
    to: Option<String>,
    amount: Option<String>,
}

async fn convert(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ExchangeQuery>, QueryRejection>,
) -> ApiResult<Json<CurrencyConversion>> {
    let Query(query) =
        query.map_err(|_| ApiError::BadRequest("invalid query parameters".into()))?;
    let (Some(from), Some(to), Some(amount)) =
        (present(query.from), present(query.to), present(query.amount))
    else {
        return Err(ApiError::BadRequest(
            "from, to, and amount parameters are required".into(),
        ));
    };
    let amount = parse_decimal(&amount, "invalid amount format")?;

    let conversion = state
        .conversion_service
        .convert_currency(&from, &to, amount)
        .await?;
    Ok(Json(conversion))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/exchange", get(convert))
}
