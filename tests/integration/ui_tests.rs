//! Web UI routes, driven in-process

use std::sync::Arc;

use assethub::{
    backend::LocalBackend,
    client::{token::MemoryTokenStore, ApiClient},
    config::{AppConfig, BackendMode},
    create_router,
    models::Collection,
    session::Session,
    AppState,
};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

fn local_state() -> AppState {
    let mut config = AppConfig::default();
    config.api.mode = BackendMode::Local;
    AppState {
        config: Arc::new(config),
        session: Arc::new(Session::local(Arc::new(LocalBackend::new()))),
    }
}

fn signed_out_state() -> AppState {
    let config = AppConfig::default();
    let client = ApiClient::new(&config.api, Arc::new(MemoryTokenStore::new())).unwrap();
    AppState {
        config: Arc::new(config),
        session: Arc::new(Session::remote(client)),
    }
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

const LAPTOP: &str = "type=Laptop&brand=Dell&model=5420&serial=SN1&purchase_date=2024-01-01\
&cost=999.99&warranty_status=Active&status=Available&department=Information+Technology";

#[tokio::test]
async fn test_health_reports_mode() {
    let app = create_router(local_state());
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&text(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["mode"], "local");
}

#[tokio::test]
async fn test_views_render() {
    let app = create_router(local_state());
    for (uri, heading) in [
        ("/dashboard", "<h1>Dashboard</h1>"),
        ("/assets", "<h1>Asset Inventory</h1>"),
        ("/assets/new", "<h1>New Asset</h1>"),
        ("/maintenance", "<h1>Maintenance</h1>"),
        ("/licenses", "<h1>Software Licenses</h1>"),
        ("/departments", "<h1>Departments</h1>"),
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert!(text(response).await.contains(heading), "{}", uri);
    }
}

#[tokio::test]
async fn test_login_page_skipped_in_local_mode() {
    let app = create_router(local_state());
    let response = get(&app, "/login").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test]
async fn test_lowercase_department_code_is_rejected_locally() {
    let state = local_state();
    let app = create_router(state.clone());

    let response = post_form(&app, "/departments", "name=Information+Technology&code=it").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/departments");
    assert_eq!(state.session.store.snapshot().await.len(Collection::Departments), 0);

    let page = text(get(&app, "/departments").await).await;
    assert!(page.contains("Department code must be 2-4 uppercase letters"));
    // The rejected draft is still in the form
    assert!(page.contains(r#"name="code" value="it""#));
}

#[tokio::test]
async fn test_create_asset_flow() {
    let state = local_state();
    let app = create_router(state.clone());

    post_form(&app, "/departments", "name=Information+Technology&code=IT").await;
    get(&app, "/assets/new").await;
    let response = post_form(&app, "/assets", LAPTOP).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/assets");

    let page = text(get(&app, "/assets").await).await;
    assert!(page.contains("Asset IT-001 created"));
    assert!(page.contains("<td>IT-001</td>"));

    let snapshot = state.session.store.snapshot().await;
    assert_eq!(snapshot.assets[0].cost, 999.99);
}

#[tokio::test]
async fn test_non_numeric_cost_stays_on_form() {
    let state = local_state();
    let app = create_router(state.clone());

    get(&app, "/assets/new").await;
    let body = LAPTOP.replace("cost=999.99", "cost=abc");
    let response = post_form(&app, "/assets", &body).await;
    assert_eq!(location(&response), "/assets/new");

    let page = text(get(&app, "/assets/new").await).await;
    assert!(page.contains("Cost must be a number"));
    assert!(state.session.store.snapshot().await.assets.is_empty());
}

#[tokio::test]
async fn test_search_filters_inventory() {
    let state = local_state();
    let app = create_router(state.clone());
    post_form(&app, "/departments", "name=Information+Technology&code=IT").await;
    post_form(&app, "/assets", LAPTOP).await;
    let printer = LAPTOP
        .replace("type=Laptop", "type=Printer")
        .replace("brand=Dell", "brand=HP")
        .replace("serial=SN1", "serial=SN2");
    post_form(&app, "/assets", &printer).await;

    let page = text(get(&app, "/assets?search=hp").await).await;
    assert!(page.contains("Showing 1 of 2 assets"));
    assert!(page.contains("<td>IT-002</td>"));

    let page = text(get(&app, "/assets?search=&type=Laptop&status=").await).await;
    assert!(page.contains("<td>IT-001</td>"));
    assert!(!page.contains("<td>IT-002</td>"));
}

#[tokio::test]
async fn test_row_actions() {
    let state = local_state();
    let app = create_router(state.clone());
    post_form(&app, "/departments", "name=Information+Technology&code=IT").await;
    post_form(&app, "/assets", LAPTOP).await;
    post_form(&app, "/users", "name=Kofi").await;

    let response = post_form(&app, "/assignments", "asset_id=IT-001&assignee=Kofi&location=HQ").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let response = post_form(&app, "/actions/assets/retire/IT-001", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let snapshot = state.session.store.snapshot().await;
    let asset = snapshot.asset("IT-001").unwrap();
    assert_eq!(asset.status.label(), "Retired");
    assert_eq!(asset.assignee, None);
    assert_eq!(snapshot.assignments.len(), 1);
    assert_eq!(snapshot.locations, vec!["HQ".to_string()]);

    let response = post_form(&app, "/actions/assets/explode/IT-001", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(state.session.banner().await.unwrap().text.contains("Unknown action"));

    post_form(&app, "/actions/assets/delete/IT-001", "").await;
    assert!(state.session.store.snapshot().await.assets.is_empty());
}

#[tokio::test]
async fn test_csv_export() {
    let state = local_state();
    let app = create_router(state.clone());
    post_form(&app, "/departments", "name=Research%2C+Development&code=RND").await;

    let response = get(&app, "/export/departments").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        r#"attachment; filename="departments-report.csv""#
    );
    let body = text(response).await;
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("id,code,name,location,head_of_department,contact_email,contact_phone")
    );
    assert_eq!(lines.next(), Some(r#"1,RND,"Research, Development",,,,"#));

    let response = get(&app, "/export/widgets").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_export_has_header_only() {
    let app = create_router(local_state());
    let body = text(get(&app, "/export/licenses").await).await;
    assert_eq!(body.lines().count(), 1);
}

#[tokio::test]
async fn test_signed_out_requests_go_to_login() {
    let state = signed_out_state();
    let app = create_router(state.clone());

    let response = get(&app, "/dashboard").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let response = post_form(&app, "/assets", LAPTOP).await;
    assert_eq!(location(&response), "/login");

    let response = get(&app, "/").await;
    assert_eq!(location(&response), "/login");

    let page = text(get(&app, "/login").await).await;
    assert!(page.contains("Sign In"));
}

#[tokio::test]
async fn test_row_action_on_id_with_reserved_characters() {
    let state = local_state();
    let app = create_router(state.clone());
    post_form(&app, "/assets", &format!("id=LAB%237&{}", LAPTOP)).await;
    let plain = LAPTOP.replace("serial=SN1", "serial=SN2");
    post_form(&app, "/assets", &format!("id=LAB&{}", plain)).await;

    let page = text(get(&app, "/assets").await).await;
    assert!(page.contains(r#"action="/actions/assets/delete/LAB%237""#));

    post_form(&app, "/actions/assets/delete/LAB%237", "").await;
    assert_eq!(state.session.store.snapshot().await.keys(Collection::Assets), vec!["LAB"]);
}
