use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::{InventoryError, Result};
use crate::models::Instance;

/// Owns the instance collection read from a JSON file.
///
/// The file is read lazily on first access and cached until [`InstanceStore::refresh`]
/// is called. Readers receive a shared `Arc` of the collection, so a refresh never
/// mutates a collection someone else is holding.
#[derive(Debug)]
pub struct InstanceStore {
    path: PathBuf,
    degrade_on_load_error: bool,
    cache: RwLock<Option<Arc<Vec<Instance>>>>,
}

impl InstanceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            degrade_on_load_error: false,
            cache: RwLock::new(None),
        }
    }

    /// When enabled, a failed load is logged and the store serves an empty collection
    /// instead of returning the error.
    pub fn degrade_on_load_error(mut self, enabled: bool) -> Self {
        self.degrade_on_load_error = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file and replace the cached collection.
    ///
    /// On failure the previously cached collection, if any, is left untouched.
    pub async fn load(&self) -> Result<Arc<Vec<Instance>>> {
        let loaded = Arc::new(self.read_or_degrade().await?);
        *self.cache.write().await = Some(loaded.clone());
        Ok(loaded)
    }

    pub async fn get_all(&self) -> Result<Arc<Vec<Instance>>> {
        if let Some(cached) = self.cache.read().await.as_ref() {
            return Ok(cached.clone());
        }
        let mut slot = self.cache.write().await;
        // Another request may have loaded while we waited for the write lock.
        if let Some(cached) = slot.as_ref() {
            return Ok(cached.clone());
        }
        let loaded = Arc::new(self.read_or_degrade().await?);
        *slot = Some(loaded.clone());
        Ok(loaded)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Instance>> {
        let instances = self.get_all().await?;
        Ok(instances.iter().find(|i| i.id == id).cloned())
    }

    /// Drop the cached collection; the next read goes back to the file.
    pub async fn refresh(&self) {
        *self.cache.write().await = None;
        tracing::info!(path = %self.path.display(), "Instance cache invalidated");
    }

    async fn read_or_degrade(&self) -> Result<Vec<Instance>> {
        match read_instances_file(&self.path).await {
            Ok(instances) => {
                tracing::info!(path = %self.path.display(), count = instances.len(), "Loaded instances");
                Ok(instances)
            }
            Err(e) if self.degrade_on_load_error => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to load instances; continuing with an empty collection");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

pub async fn read_instances_file(path: &Path) -> Result<Vec<Instance>> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(InventoryError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(InventoryError::Io(e)),
    };
    parse_instances(&content)
}

/// Parse the data file content: a JSON array of instance records with unique
/// `id` and `uid` values.
pub fn parse_instances(content: &str) -> Result<Vec<Instance>> {
    let entries: Vec<Value> = serde_json::from_str(content)
        .map_err(|e| InventoryError::Format(format!("expected a JSON array of instances: {}", e)))?;

    let mut instances = Vec::with_capacity(entries.len());
    let mut seen_ids = HashSet::new();
    let mut seen_uids = HashSet::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let instance: Instance = serde_json::from_value(entry)
            .map_err(|e| InventoryError::Format(format!("record {}: {}", index, e)))?;
        if !seen_ids.insert(instance.id) {
            return Err(InventoryError::Format(format!(
                "record {}: duplicate instance id {}",
                index, instance.id
            )));
        }
        if !seen_uids.insert(instance.uid.clone()) {
            return Err(InventoryError::Format(format!(
                "record {}: duplicate instance uid {}",
                index, instance.uid
            )));
        }
        instances.push(instance);
    }
    Ok(instances)
}
