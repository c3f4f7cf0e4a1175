use serde::Serialize;

use crate::models::instance::Instance;
use crate::models::instance_filter::InstanceFilter;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of filtered instances plus the metadata needed to walk the rest.
#[derive(Serialize, Clone, Debug)]
pub struct InstancePage {
    pub data: Vec<Instance>,
    pub pagination: PaginationInfo,
    pub filters: InstanceFilter,
}
