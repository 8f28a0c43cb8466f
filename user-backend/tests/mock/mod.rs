use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::Mutex;

pub const USER_ID: &str = "abcd1234";
pub const CRASH_USER_ID: &str = "boom";
/// Served in the service's older shape: split stake balances, no `stake_balance`.
pub const LEGACY_USER_ID: &str = "efgh5678";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// In-process stand-in for the user service, recording every request it sees.
pub struct MockServer {
    addr: SocketAddr,
    state: MockState,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .route("/api/user", any(handle))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub async fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().await.clone()
    }
}

pub fn user_json(userid: &str, address: &str, wallet_type: &str) -> Value {
    json!({
        "id": "7f7d0d4e-2c1b-4e0f-9a51-5f6f0d1c2b3a",
        "userid": userid,
        "wallet_address": address,
        "wallet_type": wallet_type,
        "balance": 100.5,
        "perp_balance": 20.0,
        "escrow_balance": 0.0,
        "stake_balance": 10.0,
        "frozen_balance": 1.25,
        "created_at": "2024-11-02T10:00:00Z"
    })
}

pub fn legacy_user_json() -> Value {
    json!({
        "id": "0b9c1c2e-6f3a-4d7b-a1e2-7c9d8e6f5a40",
        "userid": LEGACY_USER_ID,
        "wallet_address": "0xdef",
        "wallet_type": "ecdsa",
        "balance": 42.0,
        "perp_balance": 3.5,
        "escrow_balance": 0.0,
        "frozen_balance": 0.0,
        "blu_stake_balance": 8.0,
        "blp_stake_balance": 2.0,
        "blu_stake_pending": 0.0,
        "blp_stake_pending": 0.0,
        "total_balance": 55.5,
        "created_at": "2024-11-06T10:00:00Z"
    })
}

fn stakes() -> Vec<Value> {
    vec![
        json!({ "id": "s1", "userid": USER_ID, "stake_type": "BLU", "amount": 5.0, "created_at": "2024-11-03T10:00:00Z" }),
        json!({ "id": "s2", "userid": USER_ID, "stake_type": "BLP", "amount": 7.5, "created_at": "2024-11-04T10:00:00Z" }),
        json!({ "id": "s3", "userid": USER_ID, "stake_type": "BLU", "amount": 1.0, "created_at": "2024-11-05T10:00:00Z" }),
    ]
}

fn deposit(address: &str, wallet_type: &str) -> Value {
    json!({
        "id": "d1",
        "userid": USER_ID,
        "wallet_address": address,
        "wallet_type": wallet_type,
        "chain_id": "421614",
        "block": "14",
        "block_hash": "9fe46736",
        "tx_hash": "e9f1fe39",
        "sender": "70997970c51812dc3a010c7d01b50e0d17dc79c8",
        "deposit_nonce": "4",
        "asset": "0000000000000000000000000000000000000000",
        "amount": "100000000000000000000",
        "value": 300000.0,
        "created_at": "2024-11-02T11:00:00Z"
    })
}

fn ok(data: Value) -> Response {
    (StatusCode::OK, Json(json!({ "data": data, "status": 200 }))).into_response()
}

fn not_found(details: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "code": 404, "message": "user not found", "details": details, "origin": "mock" })),
    )
        .into_response()
}

fn param<'a>(q: &'a HashMap<String, String>, key: &str) -> &'a str {
    q.get(key).map(String::as_str).unwrap_or_default()
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    Query(q): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let body_json = serde_json::from_str::<Value>(&body).ok();
    state.requests.lock().await.push(Recorded {
        method: method.clone(),
        query: q.clone(),
        body: body_json,
    });

    match (method, param(&q, "query")) {
        (Method::POST, "get-user-by-address") | (Method::GET, "get-user-by-address") => {
            ok(user_json(USER_ID, param(&q, "address"), param(&q, "type")))
        }
        (Method::GET, "get-user-by-id") => match param(&q, "user-id") {
            USER_ID => ok(user_json(USER_ID, "0xabc", "ecdsa")),
            LEGACY_USER_ID => ok(legacy_user_json()),
            CRASH_USER_ID => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            other => not_found(other),
        },
        (Method::GET, "get-deposits-by-user-id") => match param(&q, "user-id") {
            USER_ID => ok(json!([deposit("0xabc", "ecdsa")])),
            other => not_found(other),
        },
        (Method::GET, "get-deposits-by-user-address") => ok(json!([deposit(
            param(&q, "wallet-address"),
            param(&q, "wallet-type")
        )])),
        (Method::GET, "get-stakes-by-user-id") | (Method::GET, "get-stakes-by-user-address") => {
            let stake_type = q.get("stake-type");
            let limit = q
                .get("limit")
                .and_then(|l| l.parse::<usize>().ok())
                .unwrap_or(usize::MAX);
            let list: Vec<Value> = stakes()
                .into_iter()
                .filter(|s| stake_type.map_or(true, |t| s["stake_type"] == t.as_str()))
                .take(limit)
                .collect();
            ok(Value::Array(list))
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "code": 400, "message": "Malformed request", "details": "Invalid query parameter" })),
        )
            .into_response(),
    }
}
