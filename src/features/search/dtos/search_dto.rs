use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// One merged search hit. `type` is `developer` or `k1`; `label` is the
/// display name of the matched entity.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchHit {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub kode_cabang: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}
