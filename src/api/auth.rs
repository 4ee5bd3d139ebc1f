//! Sign-in, sign-up, and sign-out

use axum::{extract::State, response::Redirect, Form};

use super::finish;
use crate::{
    forms::{LoginDraft, SignupDraft},
    views::View,
    AppState,
};

pub async fn login(State(state): State<AppState>, Form(draft): Form<LoginDraft>) -> Redirect {
    let session = &state.session;
    let ticket = session.ticket().await;
    tracing::info!("Sign-in attempt for {}", draft.email);
    let outcome = session.login(draft).await;
    finish(session, ticket, outcome).await
}

pub async fn signup(State(state): State<AppState>, Form(draft): Form<SignupDraft>) -> Redirect {
    let session = &state.session;
    let ticket = session.ticket().await;
    let outcome = session.signup(draft).await;
    finish(session, ticket, outcome).await
}

pub async fn logout(State(state): State<AppState>) -> Redirect {
    let session = &state.session;
    if let Err(err) = session.logout().await {
        session.report(&err).await;
    }
    let view = if session.client().is_some() {
        View::Login
    } else {
        session.current_view().await
    };
    Redirect::to(view.path())
}
