//! View pages

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{services::search::InventoryQuery, views::View, AppState};

async fn show(state: &AppState, view: View, query: &InventoryQuery) -> Response {
    let entered = state.session.enter(view).await;
    if entered != view {
        return Redirect::to(entered.path()).into_response();
    }
    Html(state.session.render(view, query).await).into_response()
}

/// Send the browser to the current view
pub async fn index(State(state): State<AppState>) -> Redirect {
    let current = state.session.current_view().await;
    let view = match (state.session.is_authenticated(), current.requires_auth()) {
        (false, _) => View::Login,
        (true, false) => View::Dashboard,
        (true, true) => current,
    };
    Redirect::to(view.path())
}

pub async fn login(State(state): State<AppState>) -> Response {
    // Nothing to sign in to without a backend
    if state.session.client().is_none() {
        return Redirect::to(View::Dashboard.path()).into_response();
    }
    show(&state, View::Login, &InventoryQuery::default()).await
}

pub async fn signup(State(state): State<AppState>) -> Response {
    if state.session.client().is_none() {
        return Redirect::to(View::Dashboard.path()).into_response();
    }
    show(&state, View::Signup, &InventoryQuery::default()).await
}

pub async fn dashboard(State(state): State<AppState>) -> Response {
    show(&state, View::Dashboard, &InventoryQuery::default()).await
}

pub async fn inventory(State(state): State<AppState>, Query(query): Query<InventoryQuery>) -> Response {
    show(&state, View::Inventory, &query).await
}

pub async fn new_asset(State(state): State<AppState>) -> Response {
    show(&state, View::CreateAsset, &InventoryQuery::default()).await
}

pub async fn maintenance(State(state): State<AppState>) -> Response {
    show(&state, View::Maintenance, &InventoryQuery::default()).await
}

pub async fn licenses(State(state): State<AppState>) -> Response {
    show(&state, View::Licenses, &InventoryQuery::default()).await
}

pub async fn departments(State(state): State<AppState>) -> Response {
    show(&state, View::Departments, &InventoryQuery::default()).await
}
