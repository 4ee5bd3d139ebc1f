//! AssetHub IT Asset Management
//!
//! Web front end for tracking hardware assets, maintenance, software
//! licenses, and departments. Entity data lives in a REST backend (or in
//! memory, in local mode); this crate keeps the working copy, validates
//! forms, and renders the UI.

use std::sync::Arc;

pub mod api;
pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod services;
pub mod session;
pub mod views;

pub use api::create_router;
pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub session: Arc<session::Session>,
}
