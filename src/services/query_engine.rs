use crate::models::{
    Instance, InstanceFilter, InstancePage, PaginationInfo, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

/// Pages start at 1; anything lower is treated as the first page.
pub fn normalize_page(page: i64) -> usize {
    if page < 1 {
        1
    } else {
        usize::try_from(page).unwrap_or(usize::MAX)
    }
}

/// Sizes outside `1..=MAX_PAGE_SIZE` fall back to [`DEFAULT_PAGE_SIZE`].
pub fn normalize_page_size(page_size: i64) -> usize {
    if (1..=MAX_PAGE_SIZE as i64).contains(&page_size) {
        page_size as usize
    } else {
        DEFAULT_PAGE_SIZE
    }
}

impl InstanceFilter {
    /// Trim string predicates and drop blank ones.
    pub fn normalized(&self) -> InstanceFilter {
        fn clean(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }
        InstanceFilter {
            user_id: self.user_id,
            role_id: self.role_id,
            name: clean(&self.name),
            keyword: clean(&self.keyword),
            type_value: self.type_value,
            is_gpu_server: self.is_gpu_server,
        }
    }

    /// Expects a filter already passed through [`InstanceFilter::normalized`].
    pub fn matches(&self, instance: &Instance) -> bool {
        if let Some(user_id) = self.user_id {
            if instance.manager.id != user_id {
                return false;
            }
        }
        if let Some(role_id) = self.role_id {
            if instance.instance_role.id != role_id {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if !instance.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            let hit = instance.name.to_lowercase().contains(&keyword)
                || instance.manager.username.to_lowercase().contains(&keyword)
                || instance.manager.full_name().to_lowercase().contains(&keyword);
            if !hit {
                return false;
            }
        }
        if let Some(type_value) = self.type_value {
            if instance.os_type.value != type_value {
                return false;
            }
        }
        if let Some(gpu) = self.is_gpu_server {
            if instance.is_gpu_server != gpu {
                return false;
            }
        }
        true
    }
}

/// Filter `instances` in order and cut out the requested page.
///
/// A page past the end is not an error: it comes back empty with the usual metadata.
pub fn query_instances(
    instances: &[Instance],
    page: i64,
    page_size: i64,
    filter: &InstanceFilter,
) -> InstancePage {
    let page = normalize_page(page);
    let page_size = normalize_page_size(page_size);
    let filter = filter.normalized();

    let filtered: Vec<&Instance> = instances.iter().filter(|i| filter.matches(i)).collect();
    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(page_size);
    let offset = (page - 1).saturating_mul(page_size);

    let data = filtered
        .into_iter()
        .skip(offset)
        .take(page_size)
        .cloned()
        .collect();

    InstancePage {
        data,
        pagination: PaginationInfo {
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
        filters: filter,
    }
}
