pub mod app_state;
pub mod instance;
pub mod instance_filter;
pub mod instance_role;
pub mod os;
pub mod pagination;
pub mod statistics;
pub mod type_os;
pub mod user;

pub use app_state::AppState;
pub use instance::Instance;
pub use instance_filter::InstanceFilter;
pub use instance_role::InstanceRole;
pub use os::Os;
pub use pagination::{InstancePage, PaginationInfo, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use statistics::Statistics;
pub use type_os::TypeOs;
pub use user::User;
