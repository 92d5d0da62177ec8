use serde::Serialize;
use sqlx::FromRow;

/// Area master row. Coordinates stay as the raw imported text; coercion to
/// float happens at the DTO/tree boundary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Area {
    pub kode_area: String,
    pub nama_area: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}
