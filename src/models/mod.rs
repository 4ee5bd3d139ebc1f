//! Data models for AssetHub

pub mod account;
pub mod asset;
pub mod assignment;
pub mod department;
pub mod enums;
pub mod license;
pub mod maintenance;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

// Re-export commonly used types
pub use account::{AccountProfile, LoginForm, SignupRequest};
pub use asset::{Asset, AssetPatch, NewAsset};
pub use assignment::{ActivityLogEntry, Assignment, LocalUser};
pub use department::{Department, NewDepartment};
pub use enums::{AssetStatus, LicenseStatus};
pub use license::{NewLicense, SoftwareLicense};
pub use maintenance::{MaintenanceRecord, NewMaintenance};

/// Backend-owned entity collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Assets,
    Maintenance,
    Licenses,
    Departments,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Assets,
        Collection::Maintenance,
        Collection::Licenses,
        Collection::Departments,
    ];

    /// Resource path on the REST backend
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Assets => "/assets",
            Collection::Maintenance => "/maintenance",
            Collection::Licenses => "/licenses",
            Collection::Departments => "/departments",
        }
    }

    pub fn slug(&self) -> &'static str {
        &self.path()[1..]
    }

    /// Singular noun used in activity log lines
    pub fn noun(&self) -> &'static str {
        match self {
            Collection::Assets => "asset",
            Collection::Maintenance => "maintenance record",
            Collection::Licenses => "license",
            Collection::Departments => "department",
        }
    }
}

impl std::str::FromStr for Collection {
    type Err = crate::error::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| crate::error::AppError::NotFound(format!("Unknown collection '{}'", s)))
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// A record held in one of the backend collections
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Identifier used in `/{collection}/{id}` paths
    fn key(&self) -> String;
}
