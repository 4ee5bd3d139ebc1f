//! In-memory backend used by the standalone prototype mode

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Map, Value};
use tokio::sync::Mutex;

use super::{record_key, Backend};
use crate::{
    error::{AppError, AppResult},
    models::Collection,
};

#[derive(Default)]
struct LocalData {
    rows: HashMap<Collection, Vec<Value>>,
    next_id: i64,
}

impl LocalData {
    fn rows(&mut self, collection: Collection) -> &mut Vec<Value> {
        self.rows.entry(collection).or_default()
    }

    fn position(&mut self, collection: Collection, id: &str) -> Option<usize> {
        self.rows(collection)
            .iter()
            .position(|row| record_key(row).as_deref() == Some(id))
    }

    /// Reject a second record sharing `field` with `value`
    fn ensure_unique(
        &mut self,
        collection: Collection,
        field: &str,
        value: Option<&Value>,
        message: &str,
    ) -> AppResult<()> {
        let Some(value) = value else {
            return Ok(());
        };
        if self.rows(collection).iter().any(|row| row.get(field) == Some(value)) {
            return Err(AppError::api(400, Some(message.to_string())));
        }
        Ok(())
    }
}

/// Entity collections held in process memory; nothing is persisted
pub struct LocalBackend {
    data: Mutex<LocalData>,
}

impl LocalBackend {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(LocalData {
                rows: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Seed a collection, replacing what was there
    pub async fn seed(&self, collection: Collection, rows: Vec<Value>) {
        let mut data = self.data.lock().await;
        let max_id = rows
            .iter()
            .filter_map(|row| row.get("id").and_then(Value::as_i64))
            .max()
            .unwrap_or(0);
        data.next_id = data.next_id.max(max_id + 1);
        data.rows.insert(collection, rows);
    }
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for LocalBackend {
    async fn list(&self, collection: Collection) -> AppResult<Vec<Value>> {
        let mut data = self.data.lock().await;
        Ok(data.rows(collection).clone())
    }

    async fn create(&self, collection: Collection, payload: Value) -> AppResult<Value> {
        let Value::Object(mut row) = payload else {
            return Err(AppError::BadRequest("Expected a JSON object".to_string()));
        };

        let mut data = self.data.lock().await;
        match collection {
            Collection::Assets => {
                let id = row
                    .get("id")
                    .and_then(Value::as_str)
                    .filter(|id| !id.is_empty())
                    .ok_or_else(|| AppError::api(422, Some("Asset ID is required.".to_string())))?
                    .to_string();
                if data.position(collection, &id).is_some() {
                    return Err(AppError::Conflict(format!("Asset '{}' already exists.", id)));
                }
                data.ensure_unique(
                    collection,
                    "serial",
                    row.get("serial"),
                    "Asset with this serial already exists.",
                )?;
            }
            Collection::Licenses => {
                data.ensure_unique(
                    collection,
                    "license_key",
                    row.get("license_key"),
                    "License with this key already exists.",
                )?;
                assign_id(&mut data, &mut row);
            }
            Collection::Departments => {
                data.ensure_unique(
                    collection,
                    "code",
                    row.get("code"),
                    "Department code already exists.",
                )?;
                assign_id(&mut data, &mut row);
            }
            Collection::Maintenance => {
                if row.get("date").map_or(true, Value::is_null) {
                    let now = Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
                    row.insert("date".to_string(), Value::String(now));
                }
                assign_id(&mut data, &mut row);
            }
        }

        let row = Value::Object(row);
        data.rows(collection).push(row.clone());
        tracing::debug!("Local backend created {} record", collection.noun());

        Ok(json!({
            "message": format!("{} added successfully", capitalize(collection.noun())),
            "record": row,
        }))
    }

    async fn update(&self, collection: Collection, id: &str, patch: Value) -> AppResult<Value> {
        let Value::Object(fields) = patch else {
            return Err(AppError::BadRequest("Expected a JSON object".to_string()));
        };

        let mut data = self.data.lock().await;
        let index = data
            .position(collection, id)
            .ok_or_else(|| not_found(collection))?;
        let row = &mut data.rows(collection)[index];
        if let Value::Object(existing) = row {
            for (key, value) in fields {
                // Only fields the record already has are writable
                if key != "id" && existing.contains_key(&key) {
                    existing.insert(key, value);
                }
            }
        }

        Ok(json!({
            "message": format!("{} '{}' updated successfully.", capitalize(collection.noun()), id),
            "record": row.clone(),
        }))
    }

    async fn delete(&self, collection: Collection, id: &str) -> AppResult<()> {
        let mut data = self.data.lock().await;
        let index = data
            .position(collection, id)
            .ok_or_else(|| not_found(collection))?;
        data.rows(collection).remove(index);
        Ok(())
    }

    async fn summary(&self) -> AppResult<Value> {
        let mut data = self.data.lock().await;
        let mut counts = Map::new();
        for collection in Collection::ALL {
            let len = data.rows(collection).len();
            counts.insert(collection.slug().to_string(), json!(len));
        }
        let total_cost: f64 = data
            .rows(Collection::Assets)
            .iter()
            .filter_map(|row| row.get("cost").and_then(Value::as_f64))
            .sum();
        counts.insert("total_asset_cost".to_string(), json!(total_cost));
        Ok(Value::Object(counts))
    }
}

fn assign_id(data: &mut LocalData, row: &mut Map<String, Value>) {
    row.insert("id".to_string(), json!(data.next_id));
    data.next_id += 1;
}

fn not_found(collection: Collection) -> AppError {
    AppError::NotFound(format!("{} not found.", capitalize(collection.noun())))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
