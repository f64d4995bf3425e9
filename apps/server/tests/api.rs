use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use exchanger_server::{api::app_router, build_state, config::Config};
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";

async fn build_test_router() -> (TempDir, Router) {
    let tmp = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(10),
        anchor_currency: "USD".to_string(),
        log_format: "text".to_string(),
    };
    let state = build_state(&config).await.unwrap();
    (tmp, app_router(state, &config))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn submit(app: &Router, method: Method, uri: &str, form: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}

fn close_to(value: &Value, expected: f64) -> bool {
    value
        .as_f64()
        .map(|v| (v - expected).abs() < 1e-6)
        .unwrap_or(false)
}

#[tokio::test]
async fn healthz_works() {
    let (_tmp, app) = build_test_router().await;

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn seeded_currencies_are_listed() {
    let (_tmp, app) = build_test_router().await;

    let (status, json) = get(&app, "/currencies").await;
    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["USD", "RUB", "EUR"]);

    let (status, json) = get(&app, "/currency/EUR").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Euro");
    assert_eq!(json["sign"], "€");
    assert!(json["id"].is_number());
}

#[tokio::test]
async fn unknown_currency_is_not_found() {
    let (_tmp, app) = build_test_router().await;

    let (status, json) = get(&app, "/currency/XYZ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["message"].as_str().unwrap().contains("XYZ"));
}

#[tokio::test]
async fn add_currency_flow() {
    let (_tmp, app) = build_test_router().await;

    let (status, json) = submit(
        &app,
        Method::POST,
        "/currencies",
        "name=Japanese+yen&code=JPY&sign=%C2%A5",
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["code"], "JPY");
    assert_eq!(json["name"], "Japanese yen");
    assert_eq!(json["sign"], "¥");

    let (status, _) = submit(
        &app,
        Method::POST,
        "/currencies",
        "name=Yen&code=JPY&sign=Y",
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, json) = submit(&app, Method::POST, "/currencies", "name=Franc&code=CHF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "all fields are required");

    let (status, json) = get(&app, "/currencies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn non_form_body_is_rejected() {
    let (_tmp, app) = build_test_router().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/currencies")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Yen","code":"JPY","sign":"Y"}"#))
        .unwrap();
    let (status, json) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "invalid form data");
}

#[tokio::test]
async fn exchange_rate_lifecycle() {
    let (_tmp, app) = build_test_router().await;

    let (status, _) = get(&app, "/exchangeRates").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, created) = submit(
        &app,
        Method::POST,
        "/exchangeRates",
        "baseCurrencyCode=USD&targetCurrencyCode=EUR&rate=0.9",
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["baseCurrency"]["code"], "USD");
    assert_eq!(created["targetCurrency"]["code"], "EUR");
    assert!(close_to(&created["rate"], 0.9));

    let (status, _) = submit(
        &app,
        Method::POST,
        "/exchangeRates",
        "baseCurrencyCode=USD&targetCurrencyCode=EUR&rate=0.95",
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, fetched) = get(&app, "/exchangeRate/USDEUR").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);

    let (status, updated) =
        submit(&app, Method::PATCH, "/exchangeRate/USDEUR", "rate=0.95").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert!(close_to(&updated["rate"], 0.95));

    let (status, json) = get(&app, "/exchangeRates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn exchange_rate_request_errors() {
    let (_tmp, app) = build_test_router().await;

    let (status, _) = get(&app, "/exchangeRate/USDEU").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/exchangeRate/USDEUR").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = submit(
        &app,
        Method::POST,
        "/exchangeRates",
        "baseCurrencyCode=USD&targetCurrencyCode=EUR",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "all fields are required");

    let (status, json) = submit(
        &app,
        Method::POST,
        "/exchangeRates",
        "baseCurrencyCode=USD&targetCurrencyCode=EUR&rate=abc",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "invalid rate format");

    let (status, _) = submit(
        &app,
        Method::POST,
        "/exchangeRates",
        "baseCurrencyCode=USD&targetCurrencyCode=JPY&rate=150",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = submit(&app, Method::PATCH, "/exchangeRate/USDEUR", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "rate is required");

    let (status, _) = submit(&app, Method::PATCH, "/exchangeRate/USDEUR", "rate=1.1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = submit(&app, Method::PATCH, "/exchangeRate/USD", "rate=1.1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn exchange_resolves_direct_inverse_and_bridge() {
    let (_tmp, app) = build_test_router().await;
    for form in [
        "baseCurrencyCode=USD&targetCurrencyCode=EUR&rate=0.9",
        "baseCurrencyCode=USD&targetCurrencyCode=RUB&rate=90",
    ] {
        let (status, _) = submit(&app, Method::POST, "/exchangeRates", form).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = get(&app, "/exchange?from=USD&to=EUR&amount=100").await;
    assert_eq!(status, StatusCode::OK);
    assert!(close_to(&json["rate"], 0.9));
    assert!(close_to(&json["convertedAmount"], 90.0));
    assert!(close_to(&json["amount"], 100.0));

    let (status, json) = get(&app, "/exchange?from=EUR&to=USD&amount=90").await;
    assert_eq!(status, StatusCode::OK);
    assert!(close_to(&json["convertedAmount"], 100.0));

    let (status, json) = get(&app, "/exchange?from=RUB&to=EUR&amount=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["baseCurrency"]["code"], "RUB");
    assert_eq!(json["targetCurrency"]["code"], "EUR");
    assert!(close_to(&json["rate"], 0.01));
    assert!(close_to(&json["convertedAmount"], 1.0));
}

#[tokio::test]
async fn exchange_request_errors() {
    let (_tmp, app) = build_test_router().await;

    let (status, json) = get(&app, "/exchange?from=USD&to=EUR").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "from, to, and amount parameters are required");

    let (status, json) = get(&app, "/exchange?from=USD&to=EUR&amount=ten").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "invalid amount format");

    let (status, _) = get(&app, "/exchange?from=USD&to=EUR&amount=-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/exchange?from=USD&to=XYZ&amount=5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/exchange?from=USD&to=EUR&amount=5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn exchange_takes_codes_and_amounts_as_sent() {
    let (_tmp, app) = build_test_router().await;
    let (status, _) = submit(
        &app,
        Method::POST,
        "/exchangeRates",
        "baseCurrencyCode=USD&targetCurrencyCode=EUR&rate=0.9",
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = get(&app, "/exchange?from=%20USD&to=EUR&amount=5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = get(&app, "/exchange?from=USD&to=EUR&amount=1_000").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "invalid amount format");

    let (status, json) = get(&app, "/exchange?from=USD&to=EUR&amount=5").await;
    assert_eq!(status, StatusCode::OK);
    assert!(close_to(&json["convertedAmount"], 4.5));
}
