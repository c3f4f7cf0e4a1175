pub mod catalog;
pub mod instance_service;
pub mod query_engine;
pub mod record_store;
pub mod statistics;

// Re-export commonly used functions
pub use instance_service::{
    get_instance, get_statistics, list_instances, list_managers, list_os_types, list_roles,
    refresh_instances,
};
pub use query_engine::query_instances;
pub use record_store::{parse_instances, read_instances_file, InstanceStore};
pub use statistics::compute_statistics;
