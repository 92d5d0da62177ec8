use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::areas::dtos::{AreaPayloadDto, AreaResponseDto, AreaTree, BranchNode};
use crate::features::areas::services::AreaService;
use crate::shared::types::ApiResponse;
use crate::shared::validation::KODE_REGEX;

/// List all areas (dropdown source for the dashboard filter)
#[utoipa::path(
    get,
    path = "/api/areas",
    responses(
        (status = 200, description = "List of areas", body = ApiResponse<Vec<AreaResponseDto>>)
    ),
    tag = "areas"
)]
pub async fn list_areas(
    State(service): State<Arc<AreaService>>,
) -> Result<Json<ApiResponse<Vec<AreaResponseDto>>>> {
    let areas = service.get_all().await?;
    let dtos: Vec<AreaResponseDto> = areas.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None)))
}

/// Get one area's assembled tree: branches with developers and K1 companies
#[utoipa::path(
    get,
    path = "/api/area/{kode_area}",
    params(
        ("kode_area" = String, Path, description = "Area code")
    ),
    responses(
        (status = 200, description = "Assembled area tree", body = ApiResponse<AreaTree>),
        (status = 404, description = "Area not found")
    ),
    tag = "areas"
)]
pub async fn get_area_tree(
    State(service): State<Arc<AreaService>>,
    Path(kode_area): Path<String>,
) -> Result<Json<ApiResponse<AreaTree>>> {
    let tree = service.get_tree(&kode_area).await?;
    Ok(Json(ApiResponse::success(Some(tree), None)))
}

/// Get one branch node with its developers and K1 companies
#[utoipa::path(
    get,
    path = "/api/branch/{kode_cabang}",
    params(
        ("kode_cabang" = String, Path, description = "Branch code")
    ),
    responses(
        (status = 200, description = "Branch with children", body = ApiResponse<BranchNode>),
        (status = 404, description = "Branch not found")
    ),
    tag = "areas"
)]
pub async fn get_branch_tree(
    State(service): State<Arc<AreaService>>,
    Path(kode_cabang): Path<String>,
) -> Result<Json<ApiResponse<BranchNode>>> {
    let branch = service.get_branch_tree(&kode_cabang).await?;
    Ok(Json(ApiResponse::success(Some(branch), None)))
}

// ==================== Admin handlers ====================

/// Create an area
#[utoipa::path(
    post,
    path = "/api/admin/area",
    request_body = AreaPayloadDto,
    responses(
        (status = 200, description = "Created area", body = ApiResponse<AreaResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "admin"
)]
pub async fn create_area(
    State(service): State<Arc<AreaService>>,
    Json(payload): Json<AreaPayloadDto>,
) -> Result<Json<ApiResponse<AreaResponseDto>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if !KODE_REGEX.is_match(&payload.kode_area) {
        return Err(AppError::Validation("Invalid kode_area format".to_string()));
    }

    let area = service.create(&payload).await?;
    Ok(Json(ApiResponse::success(Some(area.into()), None)))
}

/// Update an area
#[utoipa::path(
    put,
    path = "/api/admin/area/{kode_area}",
    params(("kode_area" = String, Path, description = "Area code")),
    request_body = AreaPayloadDto,
    responses(
        (status = 200, description = "Area updated"),
        (status = 404, description = "Area not found")
    ),
    tag = "admin"
)]
pub async fn update_area(
    State(service): State<Arc<AreaService>>,
    Path(kode_area): Path<String>,
    Json(payload): Json<AreaPayloadDto>,
) -> Result<Json<ApiResponse<()>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(&kode_area, &payload).await?;
    if !updated {
        return Err(AppError::NotFound("Area not found".to_string()));
    }
    Ok(Json(ApiResponse::success(
        None,
        Some("Area updated successfully".to_string()),
    )))
}

/// Delete an area
#[utoipa::path(
    delete,
    path = "/api/admin/area/{kode_area}",
    params(("kode_area" = String, Path, description = "Area code")),
    responses(
        (status = 200, description = "Area deleted"),
        (status = 404, description = "Area not found")
    ),
    tag = "admin"
)]
pub async fn delete_area(
    State(service): State<Arc<AreaService>>,
    Path(kode_area): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let deleted = service.delete(&kode_area).await?;
    if !deleted {
        return Err(AppError::NotFound("Area not found".to_string()));
    }
    Ok(Json(ApiResponse::success(
        None,
        Some("Area deleted successfully".to_string()),
    )))
}
