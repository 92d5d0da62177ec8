use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One logged visit to a developer
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Visit {
    pub id_visit: i32,
    pub kode_cabang: String,
    pub nama_developer: String,
    pub visit_date: NaiveDate,
    pub jumlah_kavling: Option<i32>,
    pub ready_stock: Option<i32>,
    pub sisa_potensi: Option<i32>,
    pub terjual: Option<i32>,
    pub foto_visit: Option<String>,
    pub created_at: DateTime<Utc>,
}
