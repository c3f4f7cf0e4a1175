use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub gpu_servers: usize,
    pub non_gpu_servers: usize,
    pub gpu_percentage: f64,
    /// Instance count per OS display name.
    pub by_os_type: BTreeMap<String, usize>,
    /// Instance count per role name.
    pub by_role: BTreeMap<String, usize>,
    /// Instance count per manager full name.
    pub by_manager: BTreeMap<String, usize>,
}
