use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::developers::dtos::DeveloperPayloadDto;
use crate::features::developers::models::Developer;
use crate::features::developers::services::DeveloperService;
use crate::shared::constants::DEVELOPER_PAGE_SIZE;
use crate::shared::types::{ApiResponse, PaginateQuery, PaginatedResponse};
use crate::shared::validation::KODE_REGEX;

/// Developers of one branch, for the public map
#[utoipa::path(
    get,
    path = "/api/developers/{kode_cabang}",
    params(("kode_cabang" = String, Path, description = "Branch code")),
    responses(
        (status = 200, description = "Developers of the branch", body = ApiResponse<Vec<Developer>>)
    ),
    tag = "public"
)]
pub async fn list_developers_by_cabang(
    State(service): State<Arc<DeveloperService>>,
    Path(kode_cabang): Path<String>,
) -> Result<Json<ApiResponse<Vec<Developer>>>> {
    let rows = service.get_by_cabang(&kode_cabang).await?;
    Ok(Json(ApiResponse::success(Some(rows), None)))
}

/// List every developer
#[utoipa::path(
    get,
    path = "/api/admin/developers",
    responses(
        (status = 200, description = "All developers", body = ApiResponse<Vec<Developer>>)
    ),
    tag = "admin"
)]
pub async fn list_developers(
    State(service): State<Arc<DeveloperService>>,
) -> Result<Json<ApiResponse<Vec<Developer>>>> {
    let rows = service.get_all().await?;
    Ok(Json(ApiResponse::success(Some(rows), None)))
}

/// Paginated developer listing with search across branch code, developer and
/// project name
#[utoipa::path(
    get,
    path = "/api/admin/developers/paginate",
    params(PaginateQuery),
    responses(
        (status = 200, description = "One page of developers", body = PaginatedResponse<Developer>)
    ),
    tag = "admin"
)]
pub async fn paginate_developers(
    State(service): State<Arc<DeveloperService>>,
    Query(query): Query<PaginateQuery>,
) -> Result<Json<PaginatedResponse<Developer>>> {
    let limit = query.limit_or(DEVELOPER_PAGE_SIZE);
    let paged = service.paginate(&query, limit).await?;
    Ok(Json(PaginatedResponse::new(query.page(), paged)))
}

/// Get one developer by id
#[utoipa::path(
    get,
    path = "/api/admin/developers/{id_developer}",
    params(("id_developer" = i32, Path, description = "Developer id")),
    responses(
        (status = 200, description = "Developer", body = ApiResponse<Developer>),
        (status = 404, description = "Developer not found")
    ),
    tag = "admin"
)]
pub async fn get_developer(
    State(service): State<Arc<DeveloperService>>,
    Path(id_developer): Path<i32>,
) -> Result<Json<ApiResponse<Developer>>> {
    let developer = service.get_by_id(id_developer).await?;
    Ok(Json(ApiResponse::success(Some(developer), None)))
}

/// Create a developer
#[utoipa::path(
    post,
    path = "/api/admin/developers",
    request_body = DeveloperPayloadDto,
    responses(
        (status = 200, description = "Created developer", body = ApiResponse<Developer>),
        (status = 400, description = "Validation error")
    ),
    tag = "admin"
)]
pub async fn create_developer(
    State(service): State<Arc<DeveloperService>>,
    Json(payload): Json<DeveloperPayloadDto>,
) -> Result<Json<ApiResponse<Developer>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if !KODE_REGEX.is_match(&payload.kode_cabang) {
        return Err(AppError::Validation(
            "Invalid kode_cabang format".to_string(),
        ));
    }

    let developer = service.create(&payload).await?;
    Ok(Json(ApiResponse::success(Some(developer), None)))
}

/// Update a developer
#[utoipa::path(
    put,
    path = "/api/admin/developers/{id_developer}",
    params(("id_developer" = i32, Path, description = "Developer id")),
    request_body = DeveloperPayloadDto,
    responses(
        (status = 200, description = "Developer updated"),
        (status = 404, description = "Developer not found")
    ),
    tag = "admin"
)]
pub async fn update_developer(
    State(service): State<Arc<DeveloperService>>,
    Path(id_developer): Path<i32>,
    Json(payload): Json<DeveloperPayloadDto>,
) -> Result<Json<ApiResponse<()>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id_developer, &payload).await?;
    if !updated {
        return Err(AppError::NotFound("Developer not found".to_string()));
    }
    Ok(Json(ApiResponse::success(
        None,
        Some("Developer updated successfully".to_string()),
    )))
}

/// Delete a developer
#[utoipa::path(
    delete,
    path = "/api/admin/developers/{id_developer}",
    params(("id_developer" = i32, Path, description = "Developer id")),
    responses(
        (status = 200, description = "Developer deleted"),
        (status = 404, description = "Developer not found")
    ),
    tag = "admin"
)]
pub async fn delete_developer(
    State(service): State<Arc<DeveloperService>>,
    Path(id_developer): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    let deleted = service.delete(id_developer).await?;
    if !deleted {
        return Err(AppError::NotFound("Developer not found".to_string()));
    }
    Ok(Json(ApiResponse::success(
        None,
        Some("Developer deleted successfully".to_string()),
    )))
}
