//! Views and navigation
//!
//! The UI is a fixed set of views. Every navigation goes through
//! [`Router::set_current_view`], and every view is rendered from scratch out
//! of a store snapshot by [`render`].

pub mod actions;
pub mod asset_form;
pub mod auth;
pub mod dashboard;
pub mod departments;
pub mod inventory;
pub mod layout;
pub mod licenses;
pub mod maintenance;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    forms::FormDrafts,
    models::AccountProfile,
    services::{search::InventoryQuery, StoreSnapshot},
};

pub use actions::ActionTable;
pub use layout::{Banner, BannerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Login,
    Signup,
    Dashboard,
    Inventory,
    CreateAsset,
    Maintenance,
    Licenses,
    Departments,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Login,
        View::Signup,
        View::Dashboard,
        View::Inventory,
        View::CreateAsset,
        View::Maintenance,
        View::Licenses,
        View::Departments,
    ];

    /// Sidebar entries, in display order
    pub const NAV: [View; 5] = [
        View::Dashboard,
        View::Inventory,
        View::Maintenance,
        View::Licenses,
        View::Departments,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            View::Login => "/login",
            View::Signup => "/signup",
            View::Dashboard => "/dashboard",
            View::Inventory => "/assets",
            View::CreateAsset => "/assets/new",
            View::Maintenance => "/maintenance",
            View::Licenses => "/licenses",
            View::Departments => "/departments",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Sign In",
            View::Signup => "Create Account",
            View::Dashboard => "Dashboard",
            View::Inventory => "Assets",
            View::CreateAsset => "New Asset",
            View::Maintenance => "Maintenance",
            View::Licenses => "Licenses",
            View::Departments => "Departments",
        }
    }

    pub fn from_path(path: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.path() == path)
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, View::Login | View::Signup)
    }
}

/// Current view plus a navigation ticket.
///
/// The ticket changes on every transition, including re-entering the same
/// view, so a completion holding an old ticket can tell that the user has
/// moved on.
#[derive(Debug, Clone)]
pub struct Router {
    current: View,
    ticket: u64,
}

impl Router {
    pub fn new(initial: View) -> Self {
        Self {
            current: initial,
            ticket: 0,
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.ticket == ticket
    }

    /// Total over `View`: any view can be entered from any other
    pub fn set_current_view(&mut self, view: View) -> u64 {
        self.current = view;
        self.ticket += 1;
        self.ticket
    }

    /// Switch only if nothing navigated since `ticket` was taken
    pub fn navigate_if_current(&mut self, ticket: u64, view: View) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("Skipping stale navigation to {:?}", view);
            return false;
        }
        self.set_current_view(view);
        true
    }
}

/// Everything a view needs to draw itself
pub struct RenderContext<'a> {
    pub snapshot: &'a StoreSnapshot,
    pub drafts: &'a FormDrafts,
    pub query: &'a InventoryQuery,
    pub banner: Option<&'a Banner>,
    pub profile: Option<&'a AccountProfile>,
    pub today: NaiveDate,
}

/// Render a whole page for `view`
pub fn render(view: View, ctx: &RenderContext<'_>) -> String {
    let body = match view {
        View::Login => auth::render_login(ctx),
        View::Signup => auth::render_signup(ctx),
        View::Dashboard => dashboard::render(ctx),
        View::Inventory => inventory::render(ctx),
        View::CreateAsset => asset_form::render(ctx),
        View::Maintenance => maintenance::render(ctx),
        View::Licenses => licenses::render(ctx),
        View::Departments => departments::render(ctx),
    };
    layout::page(view, ctx, &body)
}
