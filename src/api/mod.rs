//! HTTP handlers for the AssetHub web UI
//!
//! GET routes render a view; POST routes run one session flow and redirect
//! to whatever view is current afterwards (post/redirect/get).

pub mod actions;
pub mod auth;
pub mod forms;
pub mod health;
pub mod pages;
pub mod reports;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{error::AppError, error::AppResult, session::Session, views::View, AppState};

/// Extractor that rejects requests while no account is signed in
pub struct SignedIn;

#[async_trait]
impl FromRequestParts<AppState> for SignedIn {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if state.session.is_authenticated() {
            Ok(SignedIn)
        } else {
            state.session.navigate(View::Login).await;
            Err(AppError::Unauthorized("Not authenticated".to_string()))
        }
    }
}

/// Settle a flow and redirect to the resulting view
pub(crate) async fn finish(session: &Session, ticket: u64, outcome: AppResult<Option<View>>) -> Redirect {
    let view = session.settle(ticket, outcome).await;
    Redirect::to(view.path())
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Account
        .route("/", get(pages::index))
        .route("/login", get(pages::login).post(auth::login))
        .route("/signup", get(pages::signup).post(auth::signup))
        .route("/logout", post(auth::logout))
        // Views and their forms
        .route("/dashboard", get(pages::dashboard))
        .route("/assets", get(pages::inventory).post(forms::submit_asset))
        .route("/assets/new", get(pages::new_asset))
        .route("/assets/cancel", post(forms::cancel_asset_edit))
        .route("/maintenance", get(pages::maintenance).post(forms::submit_maintenance))
        .route("/licenses", get(pages::licenses).post(forms::submit_license))
        .route("/departments", get(pages::departments).post(forms::submit_department))
        .route("/departments/cancel", post(forms::cancel_department_edit))
        .route("/users", post(forms::add_user))
        .route("/assignments", post(forms::assign))
        // Row actions and reloads
        .route("/actions/:collection/:action/:id", post(actions::run_action))
        .route("/refresh/:collection", post(actions::refresh))
        // Reports
        .route("/export/:report", get(reports::export_csv))
        .route("/reports/summary", get(reports::summary))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
