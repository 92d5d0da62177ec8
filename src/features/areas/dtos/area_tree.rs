use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Assembled tree for one area: the output of the tree assembler. Derived per
/// request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AreaTree {
    pub kode_area: String,
    pub nama_area: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub branches: Vec<BranchNode>,
}

/// Branch node augmented with its de-duplicated child collections. Children
/// are always present, empty when the branch has no developers/companies.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BranchNode {
    pub kode_cabang: String,
    /// Work-unit name (what the dashboard labels the branch with)
    pub nama: Option<String>,
    /// Branch manager name
    pub nama_manager: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub developers: Vec<DeveloperNode>,
    #[serde(rename = "k1Companies")]
    pub k1_companies: Vec<CompanyNode>,
}

/// Developer entry within a branch. Identity for de-duplication is the
/// (nama, project) pair: same name under a different project is a distinct
/// entity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeveloperNode {
    pub nama: String,
    pub project: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub tipe: Option<String>,
}

/// K1 company entry within a branch, de-duplicated by name alone.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyNode {
    pub nama: String,
    pub payroll: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
