use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Create payload for a branch
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCabangDto {
    #[validate(length(min = 1, message = "kode_cabang is required"))]
    pub kode_cabang: String,
    pub nip: Option<String>,
    pub nama: Option<String>,
    pub gender: Option<String>,
    pub posisi: Option<String>,
    pub kelas: Option<String>,
    pub unit_kerja: Option<String>,
    pub kode_area: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub alamat: Option<String>,
    pub kel: Option<String>,
    pub kec: Option<String>,
    pub kota: Option<String>,
}

/// Update payload for a branch (key and NIP are immutable)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCabangDto {
    pub nama: Option<String>,
    pub gender: Option<String>,
    pub posisi: Option<String>,
    pub kelas: Option<String>,
    pub unit_kerja: Option<String>,
    pub kode_area: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub alamat: Option<String>,
    pub kel: Option<String>,
    pub kec: Option<String>,
    pub kota: Option<String>,
}
