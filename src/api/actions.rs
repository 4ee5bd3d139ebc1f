//! Row actions and manual reloads

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use super::{finish, SignedIn};
use crate::{models::Collection, AppState};

pub async fn run_action(
    State(state): State<AppState>,
    _user: SignedIn,
    Path((collection, action, id)): Path<(String, String, String)>,
) -> Redirect {
    let session = &state.session;
    let ticket = session.ticket().await;
    let outcome = match collection.parse::<Collection>() {
        Ok(collection) => session.run_action(collection, &action, &id).await,
        Err(err) => Err(err),
    };
    finish(session, ticket, outcome).await
}

pub async fn refresh(
    State(state): State<AppState>,
    _user: SignedIn,
    Path(collection): Path<String>,
) -> Redirect {
    let session = &state.session;
    let ticket = session.ticket().await;
    let outcome = match collection.parse::<Collection>() {
        Ok(collection) => session.refresh(collection).await,
        Err(err) => Err(err),
    };
    finish(session, ticket, outcome).await
}
