use serde::Serialize;

/// Optional predicates applied to the instance list. All present predicates are
/// combined with AND; a `None` field places no constraint.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceFilter {
    /// Manager user id.
    pub user_id: Option<i64>,
    pub role_id: Option<i64>,
    /// Case-insensitive substring of the instance IP address.
    pub name: Option<String>,
    /// Case-insensitive substring of the IP address, manager username or manager full name.
    pub keyword: Option<String>,
    pub type_value: Option<i64>,
    pub is_gpu_server: Option<bool>,
}
