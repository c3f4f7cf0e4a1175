use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::instance_role::InstanceRole;
use crate::models::os::Os;
use crate::models::type_os::TypeOs;
use crate::models::user::User;

/// A managed server record as stored in the data file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Instance {
    pub uid: String,
    pub id: i64,
    /// IPv4 address of the machine. Not validated.
    pub name: String,
    pub manager: User,
    #[serde(rename = "type")]
    pub os_type: TypeOs,
    pub os: Os,
    pub is_gpu_server: bool,
    pub instance_role: InstanceRole,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}
