use sqlx::FromRow;

/// One row of the wide area ⋈ cabang ⋈ developer ⋈ perusahaan_k1 left join.
/// Everything past the area columns is nullable: an area without branches, or
/// a branch without developers/companies, still produces rows.
#[derive(Debug, Clone, FromRow)]
pub struct AreaTreeRow {
    pub kode_area: String,
    pub nama_area: String,
    pub area_lat: Option<String>,
    pub area_lon: Option<String>,

    pub kode_cabang: Option<String>,
    pub cabang_nama: Option<String>,
    pub cabang_nama_manager: Option<String>,
    pub cabang_lat: Option<String>,
    pub cabang_lon: Option<String>,

    pub developer_nama: Option<String>,
    pub developer_lat: Option<String>,
    pub developer_lon: Option<String>,
    pub developer_project: Option<String>,
    pub developer_tipe: Option<String>,

    pub k1_nama: Option<String>,
    pub k1_lat: Option<String>,
    pub k1_lon: Option<String>,
    pub k1_payroll: Option<i32>,
}

/// Same join rooted at a single branch (no area columns).
#[derive(Debug, Clone, FromRow)]
pub struct BranchTreeRow {
    pub kode_cabang: String,
    pub cabang_nama: Option<String>,
    pub cabang_nama_manager: Option<String>,
    pub cabang_lat: Option<String>,
    pub cabang_lon: Option<String>,

    pub developer_nama: Option<String>,
    pub developer_lat: Option<String>,
    pub developer_lon: Option<String>,
    pub developer_project: Option<String>,
    pub developer_tipe: Option<String>,

    pub k1_nama: Option<String>,
    pub k1_lat: Option<String>,
    pub k1_lon: Option<String>,
    pub k1_payroll: Option<i32>,
}
