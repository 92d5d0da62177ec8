use serde::Serialize;
use utoipa::ToSchema;

use crate::features::areas::dtos::BranchNode;

/// Marker counts over the currently visible subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub area_count: usize,
    pub branch_count: usize,
    pub developer_count: usize,
    pub company_count: usize,
}

/// Where the map should look. `FitBounds` when at least one plotted point
/// has coordinates, otherwise the fixed default view.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Viewport {
    FitBounds { points: Vec<[f64; 2]>, padding: u32 },
    Default { center: [f64; 2], zoom: u8 },
}

/// Region-wide pseudo-tree: every reachable area's branches concatenated,
/// with statistics and the suggested viewport
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionTreeDto {
    pub area_count: usize,
    pub branches: Vec<BranchNode>,
    pub statistics: Statistics,
    pub viewport: Viewport,
}
