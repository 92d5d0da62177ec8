use chrono::NaiveDate;
use sqlx::FromRow;

/// Row of the `v_marker_developer_status` view. One row per developer that
/// has at least one visit; the status reflects the latest visit only.
#[derive(Debug, Clone, FromRow)]
pub struct DeveloperStatusRow {
    pub kode_cabang: Option<String>,
    pub nama_developer: String,
    pub visit_date: NaiveDate,
    pub status_marker: String,
}
