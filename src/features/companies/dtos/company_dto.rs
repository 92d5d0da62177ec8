use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Create/update payload for a K1 company
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CompanyPayloadDto {
    #[validate(length(min = 1, message = "nama_perusahaan is required"))]
    pub nama_perusahaan: String,

    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub kode_cabang: Option<String>,
    pub nama_cabang: Option<String>,
    pub jumlah_payroll: Option<i32>,
}
