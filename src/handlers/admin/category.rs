use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::AppState;
use crate::mapper::Mapper;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{Category, CategoryMapper};

#[derive(Debug, Deserialize)]
pub struct CategoryDto {
    pub id: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: i32,
    pub name: String,
    #[serde(default)]
    pub sort: i32,
}

/// POST /admin/category
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CategoryDto>,
) -> ApiResult<Category> {
    let mut category = Category {
        kind: dto.kind,
        name: dto.name,
        sort: dto.sort,
        // new categories start disabled
        status: 0,
        ..Default::default()
    };

    state
        .categories
        .execute(&CategoryMapper::INSERT, Some(&mut category))
        .await?;

    Ok(ApiResponse::created(category))
}

/// PUT /admin/category
pub async fn update(
    State(state): State<AppState>,
    Json(dto): Json<CategoryDto>,
) -> ApiResult<Category> {
    let id = dto.id.ok_or_else(|| ApiError::bad_request("Category id is required"))?;

    let mut category = state
        .categories
        .inner()
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Category {} not found", id)))?;

    category.kind = dto.kind;
    category.name = dto.name;
    category.sort = dto.sort;

    state
        .categories
        .execute(&CategoryMapper::UPDATE, Some(&mut category))
        .await?;

    Ok(ApiResponse::success(category))
}
