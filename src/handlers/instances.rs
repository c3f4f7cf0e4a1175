use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::error::{InventoryError, Result};
use crate::models::{
    AppState, Instance, InstanceFilter, InstancePage, InstanceRole, Statistics, TypeOs, User,
    DEFAULT_PAGE_SIZE,
};
use crate::services;
use crate::utils::{parse_optional_flag, parse_optional_id, parse_optional_int};

/// Validated form of the list query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: i64,
    pub page_size: i64,
    pub filter: InstanceFilter,
}

impl ListParams {
    /// Out-of-range `page`/`page_size` are left for the query engine to clamp;
    /// only unparsable values and non-positive ids are rejected here.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self> {
        let page = parse_optional_int(params.get("page"), "page")?.unwrap_or(1);
        let page_size = parse_optional_int(params.get("page_size"), "page_size")?
            .unwrap_or(DEFAULT_PAGE_SIZE as i64);
        let filter = InstanceFilter {
            user_id: parse_optional_id(params.get("user_id"), "user_id")?,
            role_id: parse_optional_id(params.get("role_id"), "role_id")?,
            name: params.get("name").cloned(),
            keyword: params.get("keyword").cloned(),
            type_value: parse_optional_int(params.get("type_value"), "type_value")?,
            is_gpu_server: parse_optional_flag(params.get("is_gpu_server"), "is_gpu_server")?,
        };
        Ok(Self { page, page_size, filter })
    }
}

pub async fn list_instances(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<InstancePage>> {
    let params = ListParams::from_query(&params)?;
    let page = services::list_instances(&state.store, params.page, params.page_size, &params.filter).await?;
    tracing::debug!(
        page = page.pagination.page,
        returned = page.data.len(),
        total = page.pagination.total_items,
        "Listed instances"
    );
    Ok(Json(page))
}

pub async fn instance_detail(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
) -> Result<Json<Instance>> {
    let id = parse_optional_id(Some(&instance_id), "instance_id")?
        .ok_or_else(|| InventoryError::Validation("instance_id is required".into()))?;
    let instance = services::get_instance(&state.store, id).await?;
    Ok(Json(instance))
}

pub async fn statistics_overview(State(state): State<AppState>) -> Result<Json<Statistics>> {
    Ok(Json(services::get_statistics(&state.store).await?))
}

pub async fn roles_list(State(state): State<AppState>) -> Result<Json<Vec<InstanceRole>>> {
    Ok(Json(services::list_roles(&state.store).await?))
}

pub async fn managers_list(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    Ok(Json(services::list_managers(&state.store).await?))
}

pub async fn os_types_list(State(state): State<AppState>) -> Result<Json<Vec<TypeOs>>> {
    Ok(Json(services::list_os_types(&state.store).await?))
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub status: &'static str,
    pub total: usize,
}

pub async fn refresh_post(State(state): State<AppState>) -> Result<Json<RefreshResponse>> {
    let total = services::refresh_instances(&state.store).await?;
    Ok(Json(RefreshResponse { status: "refreshed", total }))
}
