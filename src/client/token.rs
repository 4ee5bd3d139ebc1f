//! Bearer token persistence

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use serde_json::{Map, Value};

use crate::error::AppResult;

/// Fixed key the token is stored under
pub const TOKEN_KEY: &str = "token";

/// Holds the single bearer credential used for all authenticated calls
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// Token kept in a small JSON file, `{"token": "..."}`.
///
/// The file is read once on construction; saves and clears write through.
pub struct FileTokenStore {
    path: PathBuf,
    cached: RwLock<Option<String>>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = read_map(&path)
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_string);
        Self {
            path,
            cached: RwLock::new(cached),
        }
    }

    fn write_map(&self, map: Map<String, Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_vec_pretty(&Value::Object(map))?)?;
        Ok(())
    }
}

fn read_map(path: &Path) -> Map<String, Value> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Map::new(),
        Err(e) => {
            tracing::warn!("Could not read session file {}: {}", path.display(), e);
            return Map::new();
        }
    };
    match serde_json::from_str(&contents) {
        Ok(Value::Object(map)) => map,
        _ => {
            tracing::warn!("Ignoring malformed session file {}", path.display());
            Map::new()
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        self.cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &str) -> AppResult<()> {
        let mut cached = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        let mut map = read_map(&self.path);
        map.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_map(map)?;
        *cached = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let mut cached = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        if cached.take().is_none() {
            return Ok(());
        }
        let mut map = read_map(&self.path);
        map.remove(TOKEN_KEY);
        self.write_map(map)
    }
}

/// Process-local token, for tests and the local prototype
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &str) -> AppResult<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("assethub-test-{}-{}", std::process::id(), name))
            .join("session.json")
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = temp_path("round-trip");
        let store = FileTokenStore::new(&path);
        assert_eq!(store.load(), None);

        store.save("abc123").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc123"));
        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[TOKEN_KEY], "abc123");

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_file_store_reads_file_once() {
        let path = temp_path("cached");
        FileTokenStore::new(&path).save("abc123").unwrap();

        let store = FileTokenStore::new(&path);
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
        assert_eq!(store.load().as_deref(), Some("abc123"));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        assert!(FileTokenStore::new(&path).load().is_none());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_clear_without_token_is_noop() {
        let store = FileTokenStore::new(temp_path("noop"));
        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::with_token("t");
        assert_eq!(store.load().as_deref(), Some("t"));
        store.clear().unwrap();
        assert!(store.load().is_none());
    }
}
