use std::sync::Arc;

use crate::core::error::Result;
use crate::features::areas::dtos::BranchNode;
use crate::features::areas::services::AreaService;
use crate::features::dashboard::dtos::{RegionTreeDto, Statistics};
use crate::features::dashboard::stats::{collect_bounds, compute_statistics, viewport_for};

/// Region-wide aggregation over every area's assembled tree
pub struct DashboardService {
    areas: Arc<AreaService>,
}

impl DashboardService {
    pub fn new(areas: Arc<AreaService>) -> Self {
        Self { areas }
    }

    /// Fetch every area's tree and concatenate the branch lists into one
    /// combined pseudo-tree. An area whose tree fetch fails is skipped with
    /// a warning; one bad area never aborts the region view. `area_count`
    /// reflects the areas actually merged.
    pub async fn region_tree(&self) -> Result<RegionTreeDto> {
        let areas = self.areas.get_all().await?;

        let mut area_count = 0usize;
        let mut branches: Vec<BranchNode> = Vec::new();

        for area in &areas {
            match self.areas.get_tree(&area.kode_area).await {
                Ok(tree) => {
                    area_count += 1;
                    branches.extend(tree.branches);
                }
                Err(e) => {
                    tracing::warn!(
                        "Skipping area {} in region aggregation: {}",
                        area.kode_area,
                        e
                    );
                }
            }
        }

        let statistics = compute_statistics(area_count, &branches);
        let viewport = viewport_for(collect_bounds(&branches));

        Ok(RegionTreeDto {
            area_count,
            branches,
            statistics,
            viewport,
        })
    }

    /// Region-wide marker counts
    pub async fn statistics(&self) -> Result<Statistics> {
        let region = self.region_tree().await?;
        Ok(region.statistics)
    }
}
