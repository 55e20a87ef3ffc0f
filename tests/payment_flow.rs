mod common;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use sample_services::config::PaymentMode;
use serde_json::json;

use common::{payment_app, post_json, spawn_account_service, spawn_router};

#[tokio::test]
async fn credit_then_pay_scenario() {
    let (addr, accounts) = spawn_account_service().await;
    let payments = payment_app(addr, PaymentMode::CheckThenDebit);

    let credited: serde_json::Value = reqwest::Client::new()
        .post(format!("http://{}/credit", addr))
        .json(&json!({ "accountId": "1", "amount": 500.0 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(credited, json!({ "accountId": "1", "balance": 1500.0 }));

    let (status, body) =
        post_json(&payments, "/pay", json!({ "accountId": "1", "amount": 2000.0 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Insufficient funds" }));
    assert_eq!(accounts.store.balance("1").await, Some(1500.0));

    let (status, body) =
        post_json(&payments, "/pay", json!({ "accountId": "1", "amount": 1500.0 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "accountId": "1", "amount": 1500.0, "status": "Payment processed" })
    );
    assert_eq!(accounts.store.balance("1").await, Some(0.0));
}

#[tokio::test]
async fn pay_reduces_balance_by_exact_amount() {
    let (addr, accounts) = spawn_account_service().await;
    let payments = payment_app(addr, PaymentMode::CheckThenDebit);

    let (status, _) =
        post_json(&payments, "/pay", json!({ "accountId": "2", "amount": 250.25 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(accounts.store.balance("2").await, Some(1749.75));
}

#[tokio::test]
async fn unknown_account_fails_balance_fetch() {
    let (addr, accounts) = spawn_account_service().await;
    let payments = payment_app(addr, PaymentMode::CheckThenDebit);

    let (status, body) =
        post_json(&payments, "/pay", json!({ "accountId": "ghost", "amount": 1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Failed to fetch balance" }));
    assert_eq!(accounts.store.balance("ghost").await, None);
}

#[tokio::test]
async fn unreachable_account_service_is_a_payment_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let payments = payment_app(addr, PaymentMode::CheckThenDebit);

    let (status, body) =
        post_json(&payments, "/pay", json!({ "accountId": "1", "amount": 1 })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Payment error" }));
}

#[tokio::test]
async fn atomic_mode_debits_in_one_call() {
    let (addr, accounts) = spawn_account_service().await;
    let payments = payment_app(addr, PaymentMode::AtomicDebit);

    let (status, body) =
        post_json(&payments, "/pay", json!({ "accountId": "1", "amount": 1000.01 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Insufficient funds");
    assert_eq!(accounts.store.balance("1").await, Some(1000.0));

    let (status, body) =
        post_json(&payments, "/pay", json!({ "accountId": "ghost", "amount": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Failed to fetch balance");

    let (status, body) =
        post_json(&payments, "/pay", json!({ "accountId": "1", "amount": 1000 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Payment processed");
    assert_eq!(accounts.store.balance("1").await, Some(0.0));
}

#[tokio::test]
async fn refused_debit_is_a_payment_error() {
    let stub = Router::new()
        .route(
            "/balance",
            get(|| async { Json(json!({ "accountId": "1", "balance": 100.0 })) }),
        )
        .route("/credit", post(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let addr = spawn_router(stub).await;
    let payments = payment_app(addr, PaymentMode::CheckThenDebit);

    let (status, body) =
        post_json(&payments, "/pay", json!({ "accountId": "1", "amount": 10 })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Payment error" }));
}

#[tokio::test]
async fn balance_body_without_balance_is_a_payment_error() {
    let stub = Router::new().route(
        "/balance",
        get(|| async { Json(json!({ "accountId": "1" })) }),
    );
    let addr = spawn_router(stub).await;
    let payments = payment_app(addr, PaymentMode::CheckThenDebit);

    let (status, body) =
        post_json(&payments, "/pay", json!({ "accountId": "1", "amount": 10 })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Payment error" }));
}
