use std::collections::HashSet;
use std::hash::Hash;

use crate::models::{Instance, InstanceRole, TypeOs, User};

fn unique_by<T, K, F, G>(instances: &[Instance], key: F, value: G) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&Instance) -> K,
    G: Fn(&Instance) -> T,
{
    let mut seen = HashSet::new();
    instances
        .iter()
        .filter(|&i| seen.insert(key(i)))
        .map(value)
        .collect()
}

/// Distinct roles in first-seen order.
pub fn unique_roles(instances: &[Instance]) -> Vec<InstanceRole> {
    unique_by(instances, |i| i.instance_role.id, |i| i.instance_role.clone())
}

/// Distinct managers in first-seen order.
pub fn unique_managers(instances: &[Instance]) -> Vec<User> {
    unique_by(instances, |i| i.manager.id, |i| i.manager.clone())
}

/// Distinct OS families in first-seen order.
pub fn unique_os_types(instances: &[Instance]) -> Vec<TypeOs> {
    unique_by(instances, |i| i.os_type.value, |i| i.os_type.clone())
}
