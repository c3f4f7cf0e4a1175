use serde::{Deserialize, Serialize};

/// Functional classification of an instance (web, database, compute, ...).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstanceRole {
    pub id: i64,
    pub name: String,
    pub slug: String,
}
