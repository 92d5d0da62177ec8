use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::areas::models::Area;
use crate::shared::geo::parse_coord;

/// Area as returned by listing endpoints, with coordinates coerced to float
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AreaResponseDto {
    pub kode_area: String,
    pub nama_area: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Area> for AreaResponseDto {
    fn from(area: Area) -> Self {
        Self {
            latitude: parse_coord(area.latitude.as_deref()),
            longitude: parse_coord(area.longitude.as_deref()),
            kode_area: area.kode_area,
            nama_area: area.nama_area,
        }
    }
}

/// Create/update payload for an area
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AreaPayloadDto {
    #[validate(length(min = 1, message = "kode_area is required"))]
    pub kode_area: String,

    #[validate(length(min = 1, message = "nama_area is required"))]
    pub nama_area: String,

    pub latitude: Option<String>,
    pub longitude: Option<String>,
}
