use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::dashboard::dtos::{RegionTreeDto, Statistics};
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Region-wide combined tree with statistics and viewport
#[utoipa::path(
    get,
    path = "/api/dashboard/region",
    responses(
        (status = 200, description = "Combined tree over all reachable areas", body = ApiResponse<RegionTreeDto>)
    ),
    tag = "dashboard"
)]
pub async fn region(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<RegionTreeDto>>> {
    let region = service.region_tree().await?;
    Ok(Json(ApiResponse::success(Some(region), None)))
}

/// Region-wide marker counts
#[utoipa::path(
    get,
    path = "/api/dashboard/statistics",
    responses(
        (status = 200, description = "Marker counts over all reachable areas", body = ApiResponse<Statistics>)
    ),
    tag = "dashboard"
)]
pub async fn statistics(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<Statistics>>> {
    let stats = service.statistics().await?;
    Ok(Json(ApiResponse::success(Some(stats), None)))
}
