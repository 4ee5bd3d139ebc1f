//! Form submissions

use axum::{extract::State, response::Redirect, Form};

use super::{finish, SignedIn};
use crate::{
    forms::{AssetDraft, AssignmentDraft, DepartmentDraft, LicenseDraft, MaintenanceDraft, UserDraft},
    AppState,
};

pub async fn submit_asset(
    State(state): State<AppState>,
    _user: SignedIn,
    Form(draft): Form<AssetDraft>,
) -> Redirect {
    let ticket = state.session.ticket().await;
    let outcome = state.session.submit_asset(draft).await;
    finish(&state.session, ticket, outcome).await
}

pub async fn cancel_asset_edit(State(state): State<AppState>, _user: SignedIn) -> Redirect {
    let ticket = state.session.ticket().await;
    let outcome = state.session.cancel_asset_edit().await;
    finish(&state.session, ticket, outcome).await
}

pub async fn submit_maintenance(
    State(state): State<AppState>,
    _user: SignedIn,
    Form(draft): Form<MaintenanceDraft>,
) -> Redirect {
    let ticket = state.session.ticket().await;
    let outcome = state.session.submit_maintenance(draft).await;
    finish(&state.session, ticket, outcome).await
}

pub async fn submit_license(
    State(state): State<AppState>,
    _user: SignedIn,
    Form(draft): Form<LicenseDraft>,
) -> Redirect {
    let ticket = state.session.ticket().await;
    let outcome = state.session.submit_license(draft).await;
    finish(&state.session, ticket, outcome).await
}

pub async fn submit_department(
    State(state): State<AppState>,
    _user: SignedIn,
    Form(draft): Form<DepartmentDraft>,
) -> Redirect {
    let ticket = state.session.ticket().await;
    let outcome = state.session.submit_department(draft).await;
    finish(&state.session, ticket, outcome).await
}

pub async fn cancel_department_edit(State(state): State<AppState>, _user: SignedIn) -> Redirect {
    let ticket = state.session.ticket().await;
    let outcome = state.session.cancel_department_edit().await;
    finish(&state.session, ticket, outcome).await
}

pub async fn add_user(
    State(state): State<AppState>,
    _user: SignedIn,
    Form(draft): Form<UserDraft>,
) -> Redirect {
    let ticket = state.session.ticket().await;
    let outcome = state.session.add_user(draft).await;
    finish(&state.session, ticket, outcome).await
}

pub async fn assign(
    State(state): State<AppState>,
    _user: SignedIn,
    Form(draft): Form<AssignmentDraft>,
) -> Redirect {
    let ticket = state.session.ticket().await;
    let outcome = state.session.assign(draft).await;
    finish(&state.session, ticket, outcome).await
}
