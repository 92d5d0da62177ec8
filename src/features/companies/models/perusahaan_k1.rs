use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// K1 payroll company row
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct PerusahaanK1 {
    pub id_k1: i32,
    pub nama_perusahaan: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub kode_cabang: Option<String>,
    pub nama_cabang: Option<String>,
    pub jumlah_payroll: Option<i32>,
}
