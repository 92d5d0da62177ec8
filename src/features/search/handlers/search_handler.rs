use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::search::dtos::{SearchHit, SearchQuery};
use crate::features::search::services::SearchService;
use crate::shared::types::ApiResponse;

/// Search markers by name across developers and K1 companies
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Merged search hits", body = ApiResponse<Vec<SearchHit>>),
        (status = 400, description = "Missing search term")
    ),
    tag = "public"
)]
pub async fn search(
    State(service): State<Arc<SearchService>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<SearchHit>>>> {
    let term = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("q is required".to_string()))?;

    let hits = service.search(term).await?;
    Ok(Json(ApiResponse::success(Some(hits), None)))
}
