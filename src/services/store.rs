//! In-memory entity store
//!
//! Every collection is a plain ordered `Vec` replaced wholesale on refresh.
//! All mutation goes through the named operations below so that each one
//! can log an activity line and trigger the follow-up refresh.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use chrono::Local;
use serde_json::Value;
use tokio::sync::RwLock;
use validator::Validate;

use crate::{
    backend::Backend,
    error::{AppError, AppResult},
    models::{
        ActivityLogEntry, Asset, AssetPatch, AssetStatus, Assignment, Collection, Department,
        Entity, LocalUser, MaintenanceRecord, NewAsset, NewDepartment, NewLicense,
        NewMaintenance, SoftwareLicense,
    },
};

/// Point-in-time copy of every collection, handed to the views
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub assets: Vec<Asset>,
    pub maintenance: Vec<MaintenanceRecord>,
    pub licenses: Vec<SoftwareLicense>,
    pub departments: Vec<Department>,
    pub users: Vec<LocalUser>,
    pub locations: Vec<String>,
    pub assignments: Vec<Assignment>,
    /// Newest first
    pub activity: Vec<ActivityLogEntry>,
    pub loading: HashSet<Collection>,
}

impl StoreSnapshot {
    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.key() == id)
    }

    pub fn is_loading(&self, collection: Collection) -> bool {
        self.loading.contains(&collection)
    }

    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Assets => self.assets.len(),
            Collection::Maintenance => self.maintenance.len(),
            Collection::Licenses => self.licenses.len(),
            Collection::Departments => self.departments.len(),
        }
    }

    /// Keys of every record in `collection`, in order
    pub fn keys(&self, collection: Collection) -> Vec<String> {
        match collection {
            Collection::Assets => self.assets.iter().map(Entity::key).collect(),
            Collection::Maintenance => self.maintenance.iter().map(Entity::key).collect(),
            Collection::Licenses => self.licenses.iter().map(Entity::key).collect(),
            Collection::Departments => self.departments.iter().map(Entity::key).collect(),
        }
    }

    /// Department code for an asset's department field, which may hold
    /// either the department name or its code
    pub fn department_code(&self, department: &str) -> Option<String> {
        let department = department.trim();
        self.departments
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(department) || d.code == department)
            .map(|d| d.code.clone())
            .or_else(|| {
                crate::models::department::is_valid_department_code(department)
                    .then(|| department.to_string())
            })
    }

    /// Next free `{CODE}-{NNN}` asset ID for a department code
    pub fn next_asset_id(&self, code: &str) -> AppResult<String> {
        let prefix = format!("{}-", code);
        let next = match self
            .assets
            .iter()
            .filter_map(|a| a.id.strip_prefix(&prefix))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
        {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                AppError::Validation(format!(
                    "No free {} asset number left; enter an asset ID",
                    code
                ))
            })?,
            None => 1,
        };
        Ok(format!("{}{:03}", prefix, next))
    }

    fn replace(&mut self, collection: Collection, rows: Vec<Value>) -> AppResult<()> {
        match collection {
            Collection::Assets => self.assets = decode(rows)?,
            Collection::Maintenance => self.maintenance = decode(rows)?,
            Collection::Licenses => self.licenses = decode(rows)?,
            Collection::Departments => self.departments = decode(rows)?,
        }
        Ok(())
    }
}

fn decode<E: Entity>(rows: Vec<Value>) -> AppResult<Vec<E>> {
    Ok(serde_json::from_value(Value::Array(rows))?)
}

#[derive(Default)]
struct StoreState {
    data: StoreSnapshot,
    /// Latest refresh ticket issued per collection
    generations: HashMap<Collection, u64>,
}

impl StoreState {
    fn begin_refresh(&mut self, collection: Collection) -> u64 {
        let generation = self.generations.entry(collection).or_insert(0);
        *generation += 1;
        self.data.loading.insert(collection);
        *generation
    }

    fn is_current(&self, collection: Collection, ticket: u64) -> bool {
        self.generations.get(&collection).copied() == Some(ticket)
    }

    fn log(&mut self, text: String) {
        tracing::info!("{}", text);
        self.data.activity.insert(0, ActivityLogEntry::now(text));
    }
}

/// Shared store for all entity collections
pub struct EntityStore {
    backend: Arc<dyn Backend>,
    state: RwLock<StoreState>,
}

impl EntityStore {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            state: RwLock::new(StoreState::default()),
        }
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.data.clone()
    }

    /// Reload one collection from the backend, replacing it wholesale.
    ///
    /// A response that arrives after a newer refresh of the same collection
    /// was started is dropped, so the newest request always wins.
    pub async fn refresh(&self, collection: Collection) -> AppResult<()> {
        let ticket = self.state.write().await.begin_refresh(collection);

        let result = self.backend.list(collection).await;

        let mut state = self.state.write().await;
        if !state.is_current(collection, ticket) {
            tracing::debug!("Discarding stale {} response (ticket {})", collection, ticket);
            return Ok(());
        }
        state.data.loading.remove(&collection);

        match result {
            Ok(rows) => {
                let count = rows.len();
                state.data.replace(collection, rows)?;
                tracing::debug!("Refreshed {} ({} records)", collection, count);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to refresh {}: {}", collection, e);
                Err(e)
            }
        }
    }

    /// Refresh every backend collection concurrently
    pub async fn refresh_all(&self) -> AppResult<()> {
        let (assets, maintenance, licenses, departments) = tokio::join!(
            self.refresh(Collection::Assets),
            self.refresh(Collection::Maintenance),
            self.refresh(Collection::Licenses),
            self.refresh(Collection::Departments),
        );
        assets.and(maintenance).and(licenses).and(departments)
    }

    async fn log(&self, text: String) {
        self.state.write().await.log(text);
    }

    /// Create an asset; returns its ID, generated from the department code
    /// when the request leaves it empty
    pub async fn create_asset(&self, mut data: NewAsset) -> AppResult<String> {
        {
            let state = self.state.read().await;
            if data.id.trim().is_empty() {
                let code = data
                    .department
                    .as_deref()
                    .and_then(|d| state.data.department_code(d))
                    .ok_or_else(|| {
                        AppError::Validation(
                            "Asset ID is required when no department code is known".to_string(),
                        )
                    })?;
                data.id = state.data.next_asset_id(&code)?;
            }
            if state.data.asset(&data.id).is_some() {
                return Err(AppError::Conflict(format!("Asset '{}' already exists", data.id)));
            }
        }
        data.validate()?;
        if !data.status.is_deployed() && data.assignee.is_some() {
            return Err(AppError::Validation(format!(
                "A {} asset cannot have an assignee",
                data.status.label().to_lowercase()
            )));
        }

        let id = data.id.clone();
        self.backend
            .create(Collection::Assets, serde_json::to_value(&data)?)
            .await?;
        self.log(format!("Added asset {} ({} {})", id, data.brand, data.model)).await;
        self.refresh(Collection::Assets).await?;
        Ok(id)
    }

    pub async fn create_maintenance(&self, data: NewMaintenance) -> AppResult<()> {
        data.validate()?;
        self.backend
            .create(Collection::Maintenance, serde_json::to_value(&data)?)
            .await?;
        self.log(format!("Logged maintenance on {}: {}", data.asset_id, data.activity)).await;
        self.refresh(Collection::Maintenance).await
    }

    pub async fn create_license(&self, data: NewLicense) -> AppResult<()> {
        data.validate()?;
        self.backend
            .create(Collection::Licenses, serde_json::to_value(&data)?)
            .await?;
        self.log(format!("Added license {} ({})", data.name, data.vendor)).await;
        self.refresh(Collection::Licenses).await
    }

    pub async fn create_department(&self, data: NewDepartment) -> AppResult<()> {
        data.validate()?;
        self.backend
            .create(Collection::Departments, serde_json::to_value(&data)?)
            .await?;
        self.log(format!("Added department {} ({})", data.name, data.code)).await;
        self.refresh(Collection::Departments).await
    }

    pub async fn update_department(&self, id: &str, data: NewDepartment) -> AppResult<()> {
        data.validate()?;
        self.backend
            .update(Collection::Departments, id, serde_json::to_value(&data)?)
            .await?;
        self.log(format!("Updated department {} ({})", data.name, data.code)).await;
        self.refresh(Collection::Departments).await
    }

    /// Replace an asset's editable fields; the ID itself never changes
    pub async fn update_asset_details(&self, id: &str, mut data: NewAsset) -> AppResult<()> {
        data.id = id.to_string();
        data.validate()?;
        if !data.status.is_deployed() && data.assignee.is_some() {
            return Err(AppError::Validation(format!(
                "A {} asset cannot have an assignee",
                data.status.label().to_lowercase()
            )));
        }
        self.backend
            .update(Collection::Assets, id, serde_json::to_value(&data)?)
            .await?;
        self.log(format!("Updated asset {}", id)).await;
        self.refresh(Collection::Assets).await
    }

    pub async fn update_asset(&self, id: &str, patch: AssetPatch) -> AppResult<()> {
        self.backend
            .update(Collection::Assets, id, serde_json::to_value(&patch)?)
            .await?;
        self.refresh(Collection::Assets).await
    }

    pub async fn delete(&self, collection: Collection, id: &str) -> AppResult<()> {
        self.backend.delete(collection, id).await?;
        self.log(format!("Deleted {} {}", collection.noun(), id)).await;
        self.refresh(collection).await
    }

    async fn require_asset(&self, id: &str) -> AppResult<Asset> {
        self.state
            .read()
            .await
            .data
            .asset(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Take an asset out of service; the assignee is released
    pub async fn retire_asset(&self, id: &str) -> AppResult<()> {
        let asset = self.require_asset(id).await?;
        let patch = AssetPatch {
            status: Some(AssetStatus::Retired),
            assignee: Some(None),
            ..Default::default()
        };
        self.update_asset(id, patch).await?;
        let text = match asset.assignee {
            Some(assignee) => format!("Retired asset {} (was assigned to {})", id, assignee),
            None => format!("Retired asset {}", id),
        };
        self.log(text).await;
        Ok(())
    }

    /// Mark an asset as being serviced
    pub async fn begin_maintenance(&self, id: &str) -> AppResult<()> {
        let asset = self.require_asset(id).await?;
        if asset.status == AssetStatus::Retired {
            return Err(AppError::Validation(format!("Asset {} is retired", id)));
        }
        let patch = AssetPatch {
            status: Some(AssetStatus::UnderMaintenance),
            ..Default::default()
        };
        self.update_asset(id, patch).await?;
        self.log(format!("Sent asset {} for maintenance", id)).await;
        Ok(())
    }

    /// Hand an asset to someone, recording the assignment
    pub async fn assign_asset(
        &self,
        id: &str,
        assignee: &str,
        location: Option<String>,
    ) -> AppResult<()> {
        let assignee = assignee.trim();
        if assignee.is_empty() {
            return Err(AppError::Validation("Assignee is required".to_string()));
        }
        let asset = self.require_asset(id).await?;
        if asset.status == AssetStatus::Retired {
            return Err(AppError::Validation(format!(
                "Asset {} is retired and cannot be assigned",
                id
            )));
        }

        let patch = AssetPatch {
            status: Some(AssetStatus::Active),
            assignee: Some(Some(assignee.to_string())),
            location: location.clone().map(Some),
            ..Default::default()
        };
        self.update_asset(id, patch).await?;

        let mut state = self.state.write().await;
        if let Some(location) = &location {
            if !state.data.locations.contains(location) {
                state.data.locations.push(location.clone());
            }
        }
        state.data.assignments.push(Assignment {
            asset_id: id.to_string(),
            assignee: assignee.to_string(),
            location: location.clone(),
            date: Local::now().date_naive().to_string(),
        });
        state.log(match location {
            Some(location) => format!("Assigned asset {} to {} at {}", id, assignee, location),
            None => format!("Assigned asset {} to {}", id, assignee),
        });
        Ok(())
    }

    /// Local-only user record
    pub async fn add_user(&self, user: LocalUser) -> AppResult<()> {
        let name = user.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("User name is required".to_string()));
        }
        let mut state = self.state.write().await;
        if state.data.users.iter().any(|u| u.name == name) {
            return Err(AppError::Conflict(format!("User {} already exists", name)));
        }
        state.data.users.push(LocalUser {
            name: name.clone(),
            department: user.department,
        });
        state.log(format!("Added user {}", name));
        Ok(())
    }

    /// Backend aggregate report
    pub async fn summary(&self) -> AppResult<Value> {
        self.backend.summary().await
    }
}
