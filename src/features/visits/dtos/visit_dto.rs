use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::developers::models::Developer;
use crate::features::visits::models::Visit;

/// Optional filters for the visit history listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct VisitQuery {
    pub kode_cabang: Option<String>,
    pub nama_developer: Option<String>,
}

/// JSON payload for updating a visit. The photo is only set on creation.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateVisitDto {
    #[validate(length(min = 1, message = "kode_cabang is required"))]
    pub kode_cabang: String,

    #[validate(length(min = 1, message = "nama_developer is required"))]
    pub nama_developer: String,

    pub visit_date: NaiveDate,
    pub jumlah_kavling: Option<i32>,
    pub ready_stock: Option<i32>,
    pub sisa_potensi: Option<i32>,
    pub terjual: Option<i32>,
}

/// Developer master data bundled with the latest visit, when there is one
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeveloperDetailDto {
    pub developer: Developer,
    pub visit: Option<Visit>,
}
