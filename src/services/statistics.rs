use crate::models::{Instance, Statistics};

/// Distribution counts over the whole collection, computed in one pass.
pub fn compute_statistics(instances: &[Instance]) -> Statistics {
    let mut stats = Statistics::default();
    if instances.is_empty() {
        return stats;
    }

    for instance in instances {
        stats.total += 1;
        if instance.is_gpu_server {
            stats.gpu_servers += 1;
        }
        *stats.by_os_type.entry(instance.os.display.clone()).or_insert(0) += 1;
        *stats.by_role.entry(instance.instance_role.name.clone()).or_insert(0) += 1;
        *stats.by_manager.entry(instance.manager.full_name()).or_insert(0) += 1;
    }
    stats.non_gpu_servers = stats.total - stats.gpu_servers;
    stats.gpu_percentage = round2(stats.gpu_servers as f64 / stats.total as f64 * 100.0);
    stats
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn empty_collection_is_zeroed() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.gpu_percentage, 0.0);
    }
}
