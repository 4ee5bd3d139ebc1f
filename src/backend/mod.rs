//! Collection-level access to entity data
//!
//! The store only ever talks to a [`Backend`]; the REST client and the
//! in-memory prototype both implement it.

pub mod local;

use async_trait::async_trait;
use serde_json::Value;

use crate::{error::AppResult, models::Collection};

pub use local::LocalBackend;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch the whole collection
    async fn list(&self, collection: Collection) -> AppResult<Vec<Value>>;

    /// Create one record; the response body is opaque to callers
    async fn create(&self, collection: Collection, payload: Value) -> AppResult<Value>;

    /// Apply a partial update to the record with `id`
    async fn update(&self, collection: Collection, id: &str, patch: Value) -> AppResult<Value>;

    async fn delete(&self, collection: Collection, id: &str) -> AppResult<()>;

    /// Aggregate report, shape owned by the backend
    async fn summary(&self) -> AppResult<Value>;
}

/// Stringified `id` of a JSON record, whether numeric or textual
pub(crate) fn record_key(row: &Value) -> Option<String> {
    match row.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_key_handles_both_id_kinds() {
        assert_eq!(record_key(&json!({"id": "IT-001"})), Some("IT-001".to_string()));
        assert_eq!(record_key(&json!({"id": 7})), Some("7".to_string()));
        assert_eq!(record_key(&json!({"name": "x"})), None);
    }
}
