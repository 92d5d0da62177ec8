use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::constants::UNVISITED_MARKER_COLOR;

/// Traffic-light status of a developer marker, derived from the latest
/// visit's sales count against the master record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum StatusMarker {
    #[serde(rename = "MERAH")]
    Merah,
    #[serde(rename = "KUNING")]
    Kuning,
    #[serde(rename = "HIJAU")]
    Hijau,
}

impl StatusMarker {
    pub fn from_db(raw: &str) -> Option<Self> {
        match raw {
            "MERAH" => Some(Self::Merah),
            "KUNING" => Some(Self::Kuning),
            "HIJAU" => Some(Self::Hijau),
            _ => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Merah => "red",
            Self::Kuning => "yellow",
            Self::Hijau => "green",
        }
    }
}

/// One marker entry of the branch status overlay. Developers without any
/// visit are included with no status and the default marker color.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeveloperStatusDto {
    pub kode_cabang: Option<String>,
    pub nama_developer: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "status_marker")]
    pub status: Option<StatusMarker>,
    pub color: String,
    pub visit_date: Option<NaiveDate>,
}

impl DeveloperStatusDto {
    pub fn color_for(status: Option<StatusMarker>) -> String {
        match status {
            Some(s) => s.color().to_string(),
            None => UNVISITED_MARKER_COLOR.to_string(),
        }
    }
}
