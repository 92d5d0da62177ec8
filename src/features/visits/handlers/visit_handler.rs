use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::developers::services::DeveloperService;
use crate::features::visits::dtos::{
    DeveloperDetailDto, DeveloperStatusDto, UpdateVisitDto, VisitQuery,
};
use crate::features::visits::models::Visit;
use crate::features::visits::services::VisitService;
use crate::modules::storage::PhotoStore;
use crate::shared::types::ApiResponse;

/// Shared state of the visit handlers. The status overlay and the detail
/// endpoint also need the developer master data.
#[derive(Clone)]
pub struct VisitState {
    pub visits: Arc<VisitService>,
    pub developers: Arc<DeveloperService>,
    pub photos: Arc<PhotoStore>,
}

/// Visit history, optionally filtered by branch and developer name
#[utoipa::path(
    get,
    path = "/api/developer-visits",
    params(VisitQuery),
    responses(
        (status = 200, description = "Visit history, newest first", body = ApiResponse<Vec<Visit>>)
    ),
    tag = "visits"
)]
pub async fn list_visits(
    State(state): State<VisitState>,
    Query(query): Query<VisitQuery>,
) -> Result<Json<ApiResponse<Vec<Visit>>>> {
    let rows = state
        .visits
        .list(query.kode_cabang.as_deref(), query.nama_developer.as_deref())
        .await?;
    Ok(Json(ApiResponse::success(Some(rows), None)))
}

/// Log a visit
///
/// Accepts multipart/form-data with:
/// - `kode_cabang`, `nama_developer`, `visit_date` (YYYY-MM-DD): required
/// - `jumlah_kavling`, `ready_stock`, `sisa_potensi`, `terjual`: optional counters
/// - `foto_visit`: optional photo file
#[utoipa::path(
    post,
    path = "/api/developer-visits",
    request_body(content_type = "multipart/form-data", description = "Visit form fields plus optional foto_visit file"),
    responses(
        (status = 200, description = "Created visit", body = ApiResponse<Visit>),
        (status = 400, description = "Missing or malformed field")
    ),
    tag = "visits"
)]
pub async fn create_visit(
    State(state): State<VisitState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Visit>>> {
    let mut kode_cabang: Option<String> = None;
    let mut nama_developer: Option<String> = None;
    let mut visit_date: Option<NaiveDate> = None;
    let mut jumlah_kavling: Option<i32> = None;
    let mut ready_stock: Option<i32> = None;
    let mut sisa_potensi: Option<i32> = None;
    let mut terjual: Option<i32> = None;
    let mut foto: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "foto_visit" => {
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "foto".to_string());
                let bytes = field.bytes().await.map_err(|e| {
                    debug!("Failed to read photo bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read photo data: {}", e))
                })?;
                if !bytes.is_empty() {
                    foto = Some((file_name, bytes.to_vec()));
                }
            }
            "kode_cabang" => kode_cabang = Some(read_text(field).await?),
            "nama_developer" => nama_developer = Some(read_text(field).await?),
            "visit_date" => {
                let text = read_text(field).await?;
                let parsed = text.parse::<NaiveDate>().map_err(|_| {
                    AppError::BadRequest(format!("Invalid visit_date: {}", text))
                })?;
                visit_date = Some(parsed);
            }
            "jumlah_kavling" => jumlah_kavling = read_count(field).await?,
            "ready_stock" => ready_stock = read_count(field).await?,
            "sisa_potensi" => sisa_potensi = read_count(field).await?,
            "terjual" => terjual = read_count(field).await?,
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let kode_cabang = kode_cabang
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("kode_cabang is required".to_string()))?;
    let nama_developer = nama_developer
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("nama_developer is required".to_string()))?;
    let visit_date =
        visit_date.ok_or_else(|| AppError::BadRequest("visit_date is required".to_string()))?;

    let foto_visit = match foto {
        Some((name, bytes)) => Some(state.photos.save(&name, &bytes).await?),
        None => None,
    };

    let visit = state
        .visits
        .create(
            &kode_cabang,
            &nama_developer,
            visit_date,
            jumlah_kavling,
            ready_stock,
            sisa_potensi,
            terjual,
            foto_visit,
        )
        .await?;

    Ok(Json(ApiResponse::success(Some(visit), None)))
}

/// Update a visit
#[utoipa::path(
    put,
    path = "/api/developer-visits/{id_visit}",
    params(("id_visit" = i32, Path, description = "Visit id")),
    request_body = UpdateVisitDto,
    responses(
        (status = 200, description = "Visit updated"),
        (status = 404, description = "Visit not found")
    ),
    tag = "visits"
)]
pub async fn update_visit(
    State(state): State<VisitState>,
    Path(id_visit): Path<i32>,
    Json(payload): Json<UpdateVisitDto>,
) -> Result<Json<ApiResponse<()>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state.visits.update(id_visit, &payload).await?;
    if !updated {
        return Err(AppError::NotFound("Visit not found".to_string()));
    }
    Ok(Json(ApiResponse::success(
        None,
        Some("Visit updated successfully".to_string()),
    )))
}

/// Delete a visit
#[utoipa::path(
    delete,
    path = "/api/developer-visits/{id_visit}",
    params(("id_visit" = i32, Path, description = "Visit id")),
    responses(
        (status = 200, description = "Visit deleted"),
        (status = 404, description = "Visit not found")
    ),
    tag = "visits"
)]
pub async fn delete_visit(
    State(state): State<VisitState>,
    Path(id_visit): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    let deleted = state.visits.delete(id_visit).await?;
    if !deleted {
        return Err(AppError::NotFound("Visit not found".to_string()));
    }
    Ok(Json(ApiResponse::success(
        None,
        Some("Visit deleted successfully".to_string()),
    )))
}

/// Marker status overlay for one branch
#[utoipa::path(
    get,
    path = "/api/developer-status",
    params(("kode_cabang" = String, Query, description = "Branch code")),
    responses(
        (status = 200, description = "Per-developer marker status", body = ApiResponse<Vec<DeveloperStatusDto>>)
    ),
    tag = "visits"
)]
pub async fn developer_status(
    State(state): State<VisitState>,
    Query(query): Query<VisitQuery>,
) -> Result<Json<ApiResponse<Vec<DeveloperStatusDto>>>> {
    let kode_cabang = query
        .kode_cabang
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("kode_cabang is required".to_string()))?;

    let rows = state
        .visits
        .status_overlay(&state.developers, &kode_cabang)
        .await?;
    Ok(Json(ApiResponse::success(Some(rows), None)))
}

/// Developer master data plus latest visit
#[utoipa::path(
    get,
    path = "/api/developer-detail",
    params(
        ("kode_cabang" = String, Query, description = "Branch code"),
        ("nama_developer" = String, Query, description = "Developer name")
    ),
    responses(
        (status = 200, description = "Developer with its latest visit", body = ApiResponse<DeveloperDetailDto>),
        (status = 404, description = "Developer not found")
    ),
    tag = "visits"
)]
pub async fn developer_detail(
    State(state): State<VisitState>,
    Query(query): Query<VisitQuery>,
) -> Result<Json<ApiResponse<DeveloperDetailDto>>> {
    let kode_cabang = query
        .kode_cabang
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("kode_cabang is required".to_string()))?;
    let nama_developer = query
        .nama_developer
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("nama_developer is required".to_string()))?;

    let detail = state
        .visits
        .developer_detail(&state.developers, &kode_cabang, &nama_developer)
        .await?;
    Ok(Json(ApiResponse::success(Some(detail), None)))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String> {
    let name = field.name().unwrap_or("").to_string();
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read {} field: {}", name, e)))
}

/// Optional counter field. Blank means absent; anything else must be an integer.
async fn read_count(field: axum::extract::multipart::Field<'_>) -> Result<Option<i32>> {
    let name = field.name().unwrap_or("").to_string();
    let text = field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read {} field: {}", name, e)))?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    text.trim()
        .parse::<i32>()
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: {}", name, text)))
}
