use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::cabang::dtos::{CreateCabangDto, UpdateCabangDto};
use crate::features::cabang::models::Cabang;
use crate::features::cabang::services::CabangService;
use crate::shared::constants::BRANCH_PAGE_SIZE;
use crate::shared::types::{ApiResponse, PaginateQuery, PaginatedResponse};
use crate::shared::validation::KODE_REGEX;

/// List every branch
#[utoipa::path(
    get,
    path = "/api/admin/cabang",
    responses(
        (status = 200, description = "All branches", body = ApiResponse<Vec<Cabang>>)
    ),
    tag = "admin"
)]
pub async fn list_cabang(
    State(service): State<Arc<CabangService>>,
) -> Result<Json<ApiResponse<Vec<Cabang>>>> {
    let rows = service.get_all().await?;
    Ok(Json(ApiResponse::success(Some(rows), None)))
}

/// Paginated branch listing with search across code, manager name and work unit
#[utoipa::path(
    get,
    path = "/api/admin/cabang/paginate",
    params(PaginateQuery),
    responses(
        (status = 200, description = "One page of branches", body = PaginatedResponse<Cabang>)
    ),
    tag = "admin"
)]
pub async fn paginate_cabang(
    State(service): State<Arc<CabangService>>,
    Query(query): Query<PaginateQuery>,
) -> Result<Json<PaginatedResponse<Cabang>>> {
    let limit = query.limit_or(BRANCH_PAGE_SIZE);
    let paged = service.paginate(&query, limit).await?;
    Ok(Json(PaginatedResponse::new(query.page(), paged)))
}

/// Get one branch by code
#[utoipa::path(
    get,
    path = "/api/admin/cabang/{kode_cabang}",
    params(("kode_cabang" = String, Path, description = "Branch code")),
    responses(
        (status = 200, description = "Branch", body = ApiResponse<Cabang>),
        (status = 404, description = "Branch not found")
    ),
    tag = "admin"
)]
pub async fn get_cabang(
    State(service): State<Arc<CabangService>>,
    Path(kode_cabang): Path<String>,
) -> Result<Json<ApiResponse<Cabang>>> {
    let cabang = service.get_by_kode(&kode_cabang).await?;
    Ok(Json(ApiResponse::success(Some(cabang), None)))
}

/// Create a branch
#[utoipa::path(
    post,
    path = "/api/admin/cabang",
    request_body = CreateCabangDto,
    responses(
        (status = 200, description = "Created branch", body = ApiResponse<Cabang>),
        (status = 400, description = "Validation error")
    ),
    tag = "admin"
)]
pub async fn create_cabang(
    State(service): State<Arc<CabangService>>,
    Json(payload): Json<CreateCabangDto>,
) -> Result<Json<ApiResponse<Cabang>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if !KODE_REGEX.is_match(&payload.kode_cabang) {
        return Err(AppError::Validation(
            "Invalid kode_cabang format".to_string(),
        ));
    }

    let cabang = service.create(&payload).await?;
    Ok(Json(ApiResponse::success(Some(cabang), None)))
}

/// Update a branch
#[utoipa::path(
    put,
    path = "/api/admin/cabang/{kode_cabang}",
    params(("kode_cabang" = String, Path, description = "Branch code")),
    request_body = UpdateCabangDto,
    responses(
        (status = 200, description = "Branch updated"),
        (status = 404, description = "Branch not found")
    ),
    tag = "admin"
)]
pub async fn update_cabang(
    State(service): State<Arc<CabangService>>,
    Path(kode_cabang): Path<String>,
    Json(payload): Json<UpdateCabangDto>,
) -> Result<Json<ApiResponse<()>>> {
    let updated = service.update(&kode_cabang, &payload).await?;
    if !updated {
        return Err(AppError::NotFound("Cabang not found".to_string()));
    }
    Ok(Json(ApiResponse::success(
        None,
        Some("Cabang updated successfully".to_string()),
    )))
}

/// Delete a branch
#[utoipa::path(
    delete,
    path = "/api/admin/cabang/{kode_cabang}",
    params(("kode_cabang" = String, Path, description = "Branch code")),
    responses(
        (status = 200, description = "Branch deleted"),
        (status = 404, description = "Branch not found")
    ),
    tag = "admin"
)]
pub async fn delete_cabang(
    State(service): State<Arc<CabangService>>,
    Path(kode_cabang): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let deleted = service.delete(&kode_cabang).await?;
    if !deleted {
        return Err(AppError::NotFound("Cabang not found".to_string()));
    }
    Ok(Json(ApiResponse::success(
        None,
        Some("Cabang deleted successfully".to_string()),
    )))
}
