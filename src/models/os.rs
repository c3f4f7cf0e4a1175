use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Os {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub os_type: i64,
    pub display: String,
}
