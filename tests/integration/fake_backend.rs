//! Minimal stand-in for the REST backend

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Form, Json, Router,
};
use serde_json::{json, Value};

pub const TOKEN: &str = "secret-token";
pub const EMAIL: &str = "admin@company.com";
pub const PASSWORD: &str = "secret";

#[derive(Default)]
pub struct FakeState {
    pub assets: Vec<Value>,
    /// Authorization header of every request, in arrival order
    pub seen_auth: Vec<Option<String>>,
}

pub type Shared = Arc<Mutex<FakeState>>;

fn authorize(state: &Shared, headers: &HeaderMap) -> Result<(), Response> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let expected = format!("Bearer {}", TOKEN);
    let ok = header.as_deref() == Some(expected.as_str());
    state.lock().unwrap().seen_auth.push(header);
    if ok {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Could not validate credentials"})),
        )
            .into_response())
    }
}

async fn login(Form(form): Form<HashMap<String, String>>) -> Response {
    let username = form.get("username").map(String::as_str);
    let password = form.get("password").map(String::as_str);
    if username == Some(EMAIL) && password == Some(PASSWORD) {
        Json(json!({"access_token": TOKEN, "token_type": "bearer"})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Incorrect email or password"})),
        )
            .into_response()
    }
}

async fn signup(Json(body): Json<Value>) -> Response {
    if body["email"] == EMAIL {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Email already registered"})),
        )
            .into_response();
    }
    Json(json!({"message": "User created"})).into_response()
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    Json(json!({"id": 1, "email": EMAIL, "company": "Acme", "role": "Admin"})).into_response()
}

async fn list_assets(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    let assets = state.lock().unwrap().assets.clone();
    Json(Value::Array(assets)).into_response()
}

async fn create_asset(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    if !body["cost"].is_number() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [
                {"loc": ["body", "cost"], "msg": "Input should be a valid number"},
            ]})),
        )
            .into_response();
    }
    let mut state = state.lock().unwrap();
    if state.assets.iter().any(|a| a["serial"] == body["serial"]) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Asset with this serial already exists."})),
        )
            .into_response();
    }
    state.assets.push(body.clone());
    Json(json!({"message": "Asset created successfully", "asset": body})).into_response()
}

async fn delete_asset(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    let mut state = state.lock().unwrap();
    let before = state.assets.len();
    state.assets.retain(|a| a["id"] != id.as_str());
    if state.assets.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Asset not found"}))).into_response();
    }
    Json(json!({"message": "Asset deleted successfully"})).into_response()
}

async fn empty_list(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    Json(json!([])).into_response()
}

async fn summary(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    let total = state.lock().unwrap().assets.len();
    Json(json!({"total_assets": total})).into_response()
}

async fn boom() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Serve the fake backend on an ephemeral port; returns its base URL
pub async fn spawn() -> (String, Shared) {
    let state: Shared = Arc::new(Mutex::new(FakeState::default()));
    let app = Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/users/me", get(me))
        .route("/assets", get(list_assets).post(create_asset))
        .route("/assets/:id", delete(delete_asset))
        .route("/maintenance", get(empty_list))
        .route("/licenses", get(empty_list))
        .route("/departments", get(empty_list))
        .route("/report/summary", get(summary))
        .route("/boom", get(boom))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake backend stopped");
    });

    (format!("http://{}", addr), state)
}
