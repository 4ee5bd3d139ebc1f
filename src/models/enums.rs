//! Shared domain vocabularies

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a hardware asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    Available,
    #[serde(alias = "Deployed")]
    Active,
    #[serde(rename = "Under Maintenance", alias = "Under Repair")]
    UnderMaintenance,
    Retired,
    #[serde(other)]
    Unknown,
}

impl AssetStatus {
    /// Statuses offered by the asset form, in display order
    pub const ALL: [AssetStatus; 4] = [
        AssetStatus::Available,
        AssetStatus::Active,
        AssetStatus::UnderMaintenance,
        AssetStatus::Retired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Active => "Active",
            AssetStatus::UnderMaintenance => "Under Maintenance",
            AssetStatus::Retired => "Retired",
            AssetStatus::Unknown => "Unknown",
        }
    }

    /// Parse a form value, accepting the older UI labels
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Available" => Some(AssetStatus::Available),
            "Active" | "Deployed" => Some(AssetStatus::Active),
            "Under Maintenance" | "Under Repair" => Some(AssetStatus::UnderMaintenance),
            "Retired" => Some(AssetStatus::Retired),
            _ => None,
        }
    }

    /// Whether an asset in this state is out with someone
    pub fn is_deployed(&self) -> bool {
        matches!(self, AssetStatus::Active | AssetStatus::UnderMaintenance)
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// LicenseStatus
// ---------------------------------------------------------------------------

/// Software license status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseStatus {
    Active,
    Expired,
    Renewed,
    #[serde(other)]
    Unknown,
}

impl LicenseStatus {
    pub const ALL: [LicenseStatus; 3] = [
        LicenseStatus::Active,
        LicenseStatus::Expired,
        LicenseStatus::Renewed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LicenseStatus::Active => "Active",
            LicenseStatus::Expired => "Expired",
            LicenseStatus::Renewed => "Renewed",
            LicenseStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Active" => Some(LicenseStatus::Active),
            "Expired" => Some(LicenseStatus::Expired),
            "Renewed" => Some(LicenseStatus::Renewed),
            _ => None,
        }
    }
}

impl std::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Select vocabularies
// ---------------------------------------------------------------------------

/// Asset types offered by the asset form
pub const ASSET_TYPES: [&str; 7] = [
    "Laptop", "Desktop", "Monitor", "Printer", "Server", "Network", "Other",
];

/// Warranty states offered by the asset form
pub const WARRANTY_STATUSES: [&str; 3] = ["Active", "Expired", "No Warranty"];

/// Roles offered on signup
pub const ACCOUNT_ROLES: [&str; 3] = ["Admin", "Manager", "Viewer"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_status_accepts_legacy_labels() {
        let status: AssetStatus = serde_json::from_str("\"Deployed\"").unwrap();
        assert_eq!(status, AssetStatus::Active);
        let status: AssetStatus = serde_json::from_str("\"Under Repair\"").unwrap();
        assert_eq!(status, AssetStatus::UnderMaintenance);
        assert_eq!(AssetStatus::parse("Under Repair"), Some(AssetStatus::UnderMaintenance));
    }

    #[test]
    fn test_asset_status_serializes_canonical_label() {
        let json = serde_json::to_string(&AssetStatus::UnderMaintenance).unwrap();
        assert_eq!(json, "\"Under Maintenance\"");
    }

    #[test]
    fn test_unrecognised_status_is_unknown() {
        let status: LicenseStatus = serde_json::from_str("\"Suspended\"").unwrap();
        assert_eq!(status, LicenseStatus::Unknown);
    }
}
