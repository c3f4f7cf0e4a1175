mod common;

use inventory::services::catalog::{unique_managers, unique_os_types, unique_roles};
use inventory::services::compute_statistics;

use common::sample_instances;

#[test]
fn test_statistics_over_twelve() {
    let stats = compute_statistics(&sample_instances(12));
    assert_eq!(stats.total, 12);
    assert_eq!(stats.gpu_servers, 4);
    assert_eq!(stats.non_gpu_servers, 8);
    assert_eq!(stats.gpu_percentage, 33.33);

    assert_eq!(stats.by_os_type.get("Ubuntu 22.04"), Some(&6));
    assert_eq!(stats.by_os_type.get("Windows Server 2022"), Some(&6));
    assert_eq!(stats.by_role.len(), 4);
    assert!(stats.by_role.values().all(|&c| c == 3));
    assert_eq!(stats.by_manager.get("Bruce Wayne"), Some(&4));
}

#[test]
fn test_distribution_counts_sum_to_total() {
    for count in [1, 5, 7, 13] {
        let stats = compute_statistics(&sample_instances(count));
        let total = count as usize;
        assert_eq!(stats.gpu_servers + stats.non_gpu_servers, total);
        assert_eq!(stats.by_os_type.values().sum::<usize>(), total);
        assert_eq!(stats.by_role.values().sum::<usize>(), total);
        assert_eq!(stats.by_manager.values().sum::<usize>(), total);
    }
}

#[test]
fn test_percentage_rounds_to_two_places() {
    // Ids 3 and 6 are GPU servers: 2/7 = 28.571...
    let stats = compute_statistics(&sample_instances(7));
    assert_eq!(stats.gpu_percentage, 28.57);
}

#[test]
fn test_empty_collection_is_all_zero() {
    let stats = compute_statistics(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.gpu_servers, 0);
    assert_eq!(stats.non_gpu_servers, 0);
    assert_eq!(stats.gpu_percentage, 0.0);
    assert!(stats.by_os_type.is_empty());
    assert!(stats.by_role.is_empty());
    assert!(stats.by_manager.is_empty());
}

#[test]
fn test_unique_roles_in_first_seen_order() {
    let roles = unique_roles(&sample_instances(12));
    let ids: Vec<i64> = roles.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(roles[1].slug, "database-server");
}

#[test]
fn test_unique_managers_and_types() {
    let instances = sample_instances(12);
    let managers: Vec<String> = unique_managers(&instances).iter().map(|u| u.username.clone()).collect();
    assert_eq!(managers, vec!["jdoe", "asmith", "bwayne"]);

    let types: Vec<i64> = unique_os_types(&instances).iter().map(|t| t.value).collect();
    assert_eq!(types, vec![1, 2]);
}

#[test]
fn test_catalog_of_empty_collection() {
    assert!(unique_roles(&[]).is_empty());
    assert!(unique_managers(&[]).is_empty());
}
