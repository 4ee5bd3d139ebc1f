//! CSV downloads and the summary report

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Local;
use serde::Serialize;
use serde_json::Value;

use super::SignedIn;
use crate::{
    error::AppResult,
    models::Collection,
    services::stats::{self, DashboardSummary},
    AppState,
};

pub async fn export_csv(
    State(state): State<AppState>,
    _user: SignedIn,
    Path(report): Path<String>,
) -> AppResult<impl IntoResponse> {
    let collection: Collection = report.parse()?;
    let report = state.session.export(collection).await?;
    let disposition = format!("attachment; filename=\"{}\"", report.filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.body,
    ))
}

#[derive(Serialize)]
pub struct SummaryResponse {
    /// Computed from the collections held in memory
    pub dashboard: DashboardSummary,
    /// As reported by the backend
    pub backend: Value,
}

pub async fn summary(State(state): State<AppState>, _user: SignedIn) -> AppResult<Json<SummaryResponse>> {
    let session = &state.session;
    let backend = session.store.summary().await?;
    let snapshot = session.store.snapshot().await;

    Ok(Json(SummaryResponse {
        dashboard: stats::summarize(&snapshot, Local::now().date_naive()),
        backend,
    }))
}
