use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::AppState;
use crate::mapper::Mapper;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{Employee, EmployeeMapper};

#[derive(Debug, Deserialize)]
pub struct EmployeeDto {
    pub id: Option<i64>,
    pub username: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub sex: String,
}

/// POST /admin/employee - create an employee, audit fields filled from the caller
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<EmployeeDto>,
) -> ApiResult<Employee> {
    let mut employee = Employee {
        username: dto.username,
        name: dto.name,
        phone: dto.phone,
        sex: dto.sex,
        status: 1,
        ..Default::default()
    };

    state
        .employees
        .execute(&EmployeeMapper::INSERT, Some(&mut employee))
        .await?;

    Ok(ApiResponse::created(employee))
}

/// PUT /admin/employee - edit an existing employee
pub async fn update(
    State(state): State<AppState>,
    Json(dto): Json<EmployeeDto>,
) -> ApiResult<Employee> {
    let id = dto.id.ok_or_else(|| ApiError::bad_request("Employee id is required"))?;

    let mut employee = state
        .employees
        .inner()
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Employee {} not found", id)))?;

    employee.username = dto.username;
    employee.name = dto.name;
    employee.phone = dto.phone;
    employee.sex = dto.sex;

    state
        .employees
        .execute(&EmployeeMapper::UPDATE, Some(&mut employee))
        .await?;

    Ok(ApiResponse::success(employee))
}

/// GET /admin/employee/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Employee> {
    let employee = state
        .employees
        .inner()
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Employee {} not found", id)))?;

    Ok(ApiResponse::success(employee))
}
