use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::companies::dtos::CompanyPayloadDto;
use crate::features::companies::models::PerusahaanK1;
use crate::features::companies::services::CompanyService;
use crate::shared::constants::COMPANY_PAGE_SIZE;
use crate::shared::types::{ApiResponse, PaginateQuery, PaginatedResponse};

/// List every K1 company
#[utoipa::path(
    get,
    path = "/api/admin/k1",
    responses(
        (status = 200, description = "All K1 companies", body = ApiResponse<Vec<PerusahaanK1>>)
    ),
    tag = "admin"
)]
pub async fn list_companies(
    State(service): State<Arc<CompanyService>>,
) -> Result<Json<ApiResponse<Vec<PerusahaanK1>>>> {
    let rows = service.get_all().await?;
    Ok(Json(ApiResponse::success(Some(rows), None)))
}

/// Paginated K1 listing with search across company name, branch name and
/// branch code
#[utoipa::path(
    get,
    path = "/api/admin/k1/paginate",
    params(PaginateQuery),
    responses(
        (status = 200, description = "One page of K1 companies", body = PaginatedResponse<PerusahaanK1>)
    ),
    tag = "admin"
)]
pub async fn paginate_companies(
    State(service): State<Arc<CompanyService>>,
    Query(query): Query<PaginateQuery>,
) -> Result<Json<PaginatedResponse<PerusahaanK1>>> {
    let limit = query.limit_or(COMPANY_PAGE_SIZE);
    let paged = service.paginate(&query, limit).await?;
    Ok(Json(PaginatedResponse::new(query.page(), paged)))
}

/// Get one K1 company by id
#[utoipa::path(
    get,
    path = "/api/admin/k1/{id_k1}",
    params(("id_k1" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "K1 company", body = ApiResponse<PerusahaanK1>),
        (status = 404, description = "Company not found")
    ),
    tag = "admin"
)]
pub async fn get_company(
    State(service): State<Arc<CompanyService>>,
    Path(id_k1): Path<i32>,
) -> Result<Json<ApiResponse<PerusahaanK1>>> {
    let company = service.get_by_id(id_k1).await?;
    Ok(Json(ApiResponse::success(Some(company), None)))
}

/// Create a K1 company
#[utoipa::path(
    post,
    path = "/api/admin/k1",
    request_body = CompanyPayloadDto,
    responses(
        (status = 200, description = "Created K1 company", body = ApiResponse<PerusahaanK1>),
        (status = 400, description = "Validation error")
    ),
    tag = "admin"
)]
pub async fn create_company(
    State(service): State<Arc<CompanyService>>,
    Json(payload): Json<CompanyPayloadDto>,
) -> Result<Json<ApiResponse<PerusahaanK1>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.create(&payload).await?;
    Ok(Json(ApiResponse::success(Some(company), None)))
}

/// Update a K1 company
#[utoipa::path(
    put,
    path = "/api/admin/k1/{id_k1}",
    params(("id_k1" = i32, Path, description = "Company id")),
    request_body = CompanyPayloadDto,
    responses(
        (status = 200, description = "Company updated"),
        (status = 404, description = "Company not found")
    ),
    tag = "admin"
)]
pub async fn update_company(
    State(service): State<Arc<CompanyService>>,
    Path(id_k1): Path<i32>,
    Json(payload): Json<CompanyPayloadDto>,
) -> Result<Json<ApiResponse<()>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id_k1, &payload).await?;
    if !updated {
        return Err(AppError::NotFound("Company not found".to_string()));
    }
    Ok(Json(ApiResponse::success(
        None,
        Some("Company updated successfully".to_string()),
    )))
}

/// Delete a K1 company
#[utoipa::path(
    delete,
    path = "/api/admin/k1/{id_k1}",
    params(("id_k1" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company deleted"),
        (status = 404, description = "Company not found")
    ),
    tag = "admin"
)]
pub async fn delete_company(
    State(service): State<Arc<CompanyService>>,
    Path(id_k1): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    let deleted = service.delete(id_k1).await?;
    if !deleted {
        return Err(AppError::NotFound("Company not found".to_string()));
    }
    Ok(Json(ApiResponse::success(
        None,
        Some("Company deleted successfully".to_string()),
    )))
}
