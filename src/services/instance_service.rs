use crate::error::{InventoryError, Result};
use crate::models::{Instance, InstanceFilter, InstancePage, InstanceRole, Statistics, TypeOs, User};
use crate::services::catalog::{unique_managers, unique_os_types, unique_roles};
use crate::services::query_engine::query_instances;
use crate::services::record_store::InstanceStore;
use crate::services::statistics::compute_statistics;

pub async fn list_instances(
    store: &InstanceStore,
    page: i64,
    page_size: i64,
    filter: &InstanceFilter,
) -> Result<InstancePage> {
    let instances = store.get_all().await?;
    Ok(query_instances(&instances, page, page_size, filter))
}

pub async fn get_instance(store: &InstanceStore, instance_id: i64) -> Result<Instance> {
    store
        .get_by_id(instance_id)
        .await?
        .ok_or(InventoryError::InstanceNotFound(instance_id))
}

pub async fn get_statistics(store: &InstanceStore) -> Result<Statistics> {
    let instances = store.get_all().await?;
    Ok(compute_statistics(&instances))
}

pub async fn list_roles(store: &InstanceStore) -> Result<Vec<InstanceRole>> {
    let instances = store.get_all().await?;
    Ok(unique_roles(&instances))
}

pub async fn list_managers(store: &InstanceStore) -> Result<Vec<User>> {
    let instances = store.get_all().await?;
    Ok(unique_managers(&instances))
}

pub async fn list_os_types(store: &InstanceStore) -> Result<Vec<TypeOs>> {
    let instances = store.get_all().await?;
    Ok(unique_os_types(&instances))
}

/// Invalidate the cache and load the file again. Returns the number of records.
pub async fn refresh_instances(store: &InstanceStore) -> Result<usize> {
    store.refresh().await;
    let instances = store.get_all().await?;
    Ok(instances.len())
}
