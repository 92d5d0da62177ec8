use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Developer master row. The table column is `dev`; queries alias it to
/// `nama_developer`, the name every API consumer knows it by.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Developer {
    pub id_developer: i32,
    pub kode_area: Option<String>,
    pub area: Option<String>,
    pub kode_cabang: Option<String>,
    pub cabang_padanan: Option<String>,
    pub project: Option<String>,
    pub nama_developer: String,
    pub tipe: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub jumlah_kavling: Option<i32>,
    pub ready_stock: Option<i32>,
    pub sisa_potensi: Option<i32>,
    pub terjual: Option<i32>,
}
