//! Key-value persistence for the session record.

use super::error::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::fs;

/// Durable key-value facility. Values are serialized JSON text.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<directory>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.directory.join(format!("{key}.json")))
    }
}

#[async_trait]
impl SessionStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(path, value).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local storage; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a usable map.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl SessionStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn file_storage_set_get_delete() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("nested"));

        assert!(storage.get("ecospeche_user").await.unwrap().is_none());

        storage
            .set("ecospeche_user", r#"{"email":"a@b.com"}"#.to_string())
            .await
            .unwrap();
        assert!(temp.path().join("nested/ecospeche_user.json").exists());
        assert_eq!(
            storage.get("ecospeche_user").await.unwrap().as_deref(),
            Some(r#"{"email":"a@b.com"}"#)
        );

        storage.delete("ecospeche_user").await.unwrap();
        assert!(storage.get("ecospeche_user").await.unwrap().is_none());

        // Deleting a missing key is fine
        storage.delete("ecospeche_user").await.unwrap();
    }

    #[tokio::test]
    async fn file_storage_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());

        let err = storage.set("../escape", String::new()).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
        assert!(storage.get("").await.is_err());
    }

    #[tokio::test]
    async fn memory_storage_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("k", "1".to_string()).await.unwrap();
        storage.set("k", "2".to_string()).await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("2"));
    }
}
