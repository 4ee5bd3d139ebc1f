//! Dashboard aggregates
//!
//! Plain functions over the current snapshot; they are cheap enough to
//! recompute on every render.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    models::{Asset, AssetStatus, LicenseStatus, MaintenanceRecord, SoftwareLicense},
    services::store::StoreSnapshot,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_assets: usize,
    /// Known statuses first, in form order, then anything unexpected
    pub assets_by_status: IndexMap<String, usize>,
    pub total_licenses: usize,
    pub licenses_by_status: IndexMap<String, usize>,
    pub total_asset_cost: f64,
    pub total_maintenance_cost: f64,
    pub total_license_cost: f64,
    pub upcoming_maintenance: usize,
    pub expired_licenses: usize,
}

pub fn assets_by_status(assets: &[Asset]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = AssetStatus::ALL
        .iter()
        .map(|s| (s.label().to_string(), 0))
        .collect();
    for asset in assets {
        *counts.entry(asset.status.label().to_string()).or_insert(0) += 1;
    }
    counts
}

pub fn licenses_by_status(licenses: &[SoftwareLicense]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = LicenseStatus::ALL
        .iter()
        .map(|s| (s.label().to_string(), 0))
        .collect();
    for license in licenses {
        *counts.entry(license.status.label().to_string()).or_insert(0) += 1;
    }
    counts
}

pub fn total_asset_cost(assets: &[Asset]) -> f64 {
    assets.iter().map(|a| a.cost).sum()
}

pub fn total_maintenance_cost(records: &[MaintenanceRecord]) -> f64 {
    records.iter().map(|r| r.cost).sum()
}

pub fn total_license_cost(licenses: &[SoftwareLicense]) -> f64 {
    licenses.iter().map(|l| l.cost).sum()
}

/// Records dated today or later.
///
/// Compares raw date strings against today's ISO date; ISO 8601 strings sort
/// lexicographically in calendar order, so a datetime on today's date counts.
pub fn upcoming_maintenance(records: &[MaintenanceRecord], today: NaiveDate) -> usize {
    let today = today.format("%Y-%m-%d").to_string();
    records
        .iter()
        .filter_map(|r| r.date.as_deref())
        .filter(|date| *date >= today.as_str())
        .count()
}

/// Licenses whose expiry date has passed, whatever their recorded status
pub fn expired_licenses(licenses: &[SoftwareLicense], today: NaiveDate) -> usize {
    let today = today.format("%Y-%m-%d").to_string();
    licenses
        .iter()
        .filter(|l| !l.expiry_date.is_empty() && l.expiry_date.as_str() < today.as_str())
        .count()
}

pub fn summarize(snapshot: &StoreSnapshot, today: NaiveDate) -> DashboardSummary {
    DashboardSummary {
        total_assets: snapshot.assets.len(),
        assets_by_status: assets_by_status(&snapshot.assets),
        total_licenses: snapshot.licenses.len(),
        licenses_by_status: licenses_by_status(&snapshot.licenses),
        total_asset_cost: total_asset_cost(&snapshot.assets),
        total_maintenance_cost: total_maintenance_cost(&snapshot.maintenance),
        total_license_cost: total_license_cost(&snapshot.licenses),
        upcoming_maintenance: upcoming_maintenance(&snapshot.maintenance, today),
        expired_licenses: expired_licenses(&snapshot.licenses, today),
    }
}
