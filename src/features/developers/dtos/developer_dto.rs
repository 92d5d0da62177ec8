use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Create/update payload for a developer record
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DeveloperPayloadDto {
    pub kode_area: Option<String>,
    pub area: Option<String>,

    #[validate(length(min = 1, message = "kode_cabang is required"))]
    pub kode_cabang: String,

    pub cabang_padanan: Option<String>,
    pub project: Option<String>,

    #[validate(length(min = 1, message = "nama_developer is required"))]
    pub nama_developer: String,

    pub tipe: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub jumlah_kavling: Option<i32>,
    pub ready_stock: Option<i32>,
    pub sisa_potensi: Option<i32>,
    pub terjual: Option<i32>,
}
