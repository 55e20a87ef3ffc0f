//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sample_services::{
    config::{AccountCreation, PaymentMode},
    routes,
    services::{account_client::AccountClient, account_store::AccountStore},
    state::{AccountState, PaymentState},
};
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

/// Send a GET request through the router and decode the JSON body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Serve an account service with the demo accounts on an ephemeral port.
pub async fn spawn_account_service() -> (SocketAddr, AccountState) {
    let state = AccountState::new(AccountStore::seeded(AccountCreation::CreateOnDemand));
    let addr = spawn_router(routes::account_router(state.clone())).await;

    (addr, state)
}

/// Serve any router on an ephemeral port, e.g. a stand-in account service.
pub async fn spawn_router(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Payment router whose account client points at `addr`.
pub fn payment_app(addr: SocketAddr, mode: PaymentMode) -> Router {
    let base = Url::parse(&format!("http://{}", addr)).unwrap();
    let client = AccountClient::new(&base, Duration::from_secs(2)).unwrap();
    routes::payment_router(PaymentState::new(client, mode))
}
