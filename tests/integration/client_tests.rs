//! HTTP client and remote session against the fake backend

use std::sync::Arc;

use assethub::{
    backend::Backend,
    client::{
        token::{MemoryTokenStore, TokenStore},
        ApiClient,
    },
    config::ApiConfig,
    error::{AppError, ErrorKind},
    forms::{AssetDraft, LoginDraft},
    models::{Collection, LoginForm},
    session::Session,
    views::View,
};
use serde_json::{json, Value};

use crate::fake_backend::{self, EMAIL, PASSWORD, TOKEN};

fn client(base_url: &str, tokens: Arc<MemoryTokenStore>) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    ApiClient::new(&config, tokens).expect("client")
}

fn laptop(id: &str, serial: &str) -> AssetDraft {
    AssetDraft {
        id: id.into(),
        asset_type: "Laptop".into(),
        brand: "Dell".into(),
        model: "5420".into(),
        serial: serial.into(),
        purchase_date: "2024-01-01".into(),
        cost: "999.99".into(),
        warranty_status: "Active".into(),
        status: "Available".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let (url, state) = fake_backend::spawn().await;
    let api = client(&url, Arc::new(MemoryTokenStore::with_token(TOKEN)));

    let body = api.get("/assets").await.unwrap();
    assert_eq!(body, json!([]));

    let seen = state.lock().unwrap().seen_auth.clone();
    assert_eq!(seen, vec![Some(format!("Bearer {}", TOKEN))]);
}

#[tokio::test]
async fn test_no_header_without_token() {
    let (url, state) = fake_backend::spawn().await;
    let api = client(&url, Arc::new(MemoryTokenStore::new()));

    let err = api.get("/report/summary").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(state.lock().unwrap().seen_auth, vec![None]);
}

#[tokio::test]
async fn test_401_clears_stored_token() {
    let (url, _state) = fake_backend::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::with_token("expired"));
    let api = client(&url, tokens.clone());

    let err = api.get("/assets").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(tokens.load(), None);
    assert!(!api.is_authenticated());
}

#[tokio::test]
async fn test_401_forces_login_view() {
    let (url, _state) = fake_backend::spawn().await;
    let session = Session::remote(client(&url, Arc::new(MemoryTokenStore::with_token("expired"))));
    assert_eq!(session.current_view().await, View::Dashboard);

    let ticket = session.navigate(View::Inventory).await;
    let outcome = session.refresh(Collection::Assets).await;

    assert_eq!(session.settle(ticket, outcome).await, View::Login);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_backend_detail_string_is_surfaced() {
    let (url, _state) = fake_backend::spawn().await;
    let api = client(&url, Arc::new(MemoryTokenStore::with_token(TOKEN)));
    let asset = json!({"id": "IT-001", "serial": "SN1", "cost": 10.0});

    api.post("/assets", &asset).await.unwrap();
    let err = api.post("/assets", &asset).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Backend);
    assert_eq!(err.user_message(), "Asset with this serial already exists.");
}

#[tokio::test]
async fn test_backend_detail_list_is_joined() {
    let (url, _state) = fake_backend::spawn().await;
    let api = client(&url, Arc::new(MemoryTokenStore::with_token(TOKEN)));

    let err = api
        .post("/assets", &json!({"id": "IT-001", "cost": "lots"}))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Api { status: 422, .. }));
    assert_eq!(err.user_message(), "Input should be a valid number");
}

#[tokio::test]
async fn test_failure_without_body_is_generic() {
    let (url, _state) = fake_backend::spawn().await;
    let api = client(&url, Arc::new(MemoryTokenStore::new()));

    let err = api.get("/boom").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BackendGeneric);
    assert_eq!(err.user_message(), "Request failed with status 500");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Nothing listens on the discard port
    let api = client("http://127.0.0.1:9", Arc::new(MemoryTokenStore::new()));
    let err = api.get("/assets").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_login_stores_token() {
    let (url, _state) = fake_backend::spawn().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    let api = client(&url, tokens.clone());

    let wrong = LoginForm {
        username: EMAIL.into(),
        password: "nope".into(),
    };
    let err = api.login(&wrong).await.unwrap_err();
    assert_eq!(err.user_message(), "Incorrect email or password");
    assert_eq!(tokens.load(), None);

    let right = LoginForm {
        username: EMAIL.into(),
        password: PASSWORD.into(),
    };
    api.login(&right).await.unwrap();
    assert_eq!(tokens.load().as_deref(), Some(TOKEN));

    let profile = api.me().await.unwrap();
    assert_eq!(profile.email, EMAIL);
}

#[tokio::test]
async fn test_asset_scenario_sends_numeric_cost() {
    let (url, state) = fake_backend::spawn().await;
    let session = Session::remote(client(&url, Arc::new(MemoryTokenStore::new())));
    assert_eq!(session.current_view().await, View::Login);

    let ticket = session.ticket().await;
    let login = LoginDraft {
        email: EMAIL.into(),
        password: PASSWORD.into(),
    };
    let outcome = session.login(login).await;
    assert_eq!(session.settle(ticket, outcome).await, View::Dashboard);

    let ticket = session.navigate(View::CreateAsset).await;
    let outcome = session.submit_asset(laptop("IT-001", "SN1")).await;
    assert_eq!(session.settle(ticket, outcome).await, View::Inventory);

    let sent = state.lock().unwrap().assets[0].clone();
    assert_eq!(sent["cost"], json!(999.99));
    assert_eq!(sent["type"], "Laptop");

    let snapshot = session.store.snapshot().await;
    assert_eq!(snapshot.assets.len(), 1);
    assert_eq!(snapshot.assets[0].cost, 999.99);
}

#[tokio::test]
async fn test_delete_missing_leaves_collection_unchanged() {
    let (url, _state) = fake_backend::spawn().await;
    let session = Session::remote(client(&url, Arc::new(MemoryTokenStore::with_token(TOKEN))));
    session.submit_asset(laptop("IT-001", "SN1")).await.unwrap();

    let err = session.store.delete(Collection::Assets, "IT-999").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(session.store.snapshot().await.keys(Collection::Assets), vec!["IT-001"]);

    session.store.delete(Collection::Assets, "IT-001").await.unwrap();
    assert!(session.store.snapshot().await.assets.is_empty());
}

#[tokio::test]
async fn test_backend_summary() {
    let (url, _state) = fake_backend::spawn().await;
    let api = client(&url, Arc::new(MemoryTokenStore::with_token(TOKEN)));
    assert_eq!(api.summary().await.unwrap()["total_assets"], 0);
}

#[tokio::test]
async fn test_delete_targets_id_with_reserved_characters() {
    let (url, state) = fake_backend::spawn().await;
    {
        let mut state = state.lock().unwrap();
        state.assets.push(json!({"id": "LAB#7", "serial": "SN7", "cost": 1.0}));
        state.assets.push(json!({"id": "LAB", "serial": "SN8", "cost": 1.0}));
        state.assets.push(json!({"id": "LAB/2?x=1", "serial": "SN9", "cost": 1.0}));
    }
    let api = client(&url, Arc::new(MemoryTokenStore::with_token(TOKEN)));

    Backend::delete(&api, Collection::Assets, "LAB#7").await.unwrap();
    Backend::delete(&api, Collection::Assets, "LAB/2?x=1").await.unwrap();

    let remaining: Vec<Value> = state.lock().unwrap().assets.iter().map(|a| a["id"].clone()).collect();
    assert_eq!(remaining, vec![json!("LAB")]);
}
