use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Branch master row. `nama` is the branch manager, `unit_kerja` the operating
/// unit the dashboard labels the branch with.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Cabang {
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
