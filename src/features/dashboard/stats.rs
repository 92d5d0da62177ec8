//! Statistics and bounds over the visible subtree.

use crate::features::areas::dtos::BranchNode;
use crate::features::dashboard::dtos::{Statistics, Viewport};
use crate::shared::constants::{DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM, FIT_BOUNDS_PADDING};

/// Marker counts for a subtree spanning `area_count` areas
pub fn compute_statistics(area_count: usize, branches: &[BranchNode]) -> Statistics {
    Statistics {
        area_count,
        branch_count: branches.len(),
        developer_count: branches.iter().map(|b| b.developers.len()).sum(),
        company_count: branches.iter().map(|b| b.k1_companies.len()).sum(),
    }
}

/// Every plotted point with coordinates: branches, developers and companies
pub fn collect_bounds(branches: &[BranchNode]) -> Vec<[f64; 2]> {
    let mut points = Vec::new();

    for branch in branches {
        if let (Some(lat), Some(lon)) = (branch.latitude, branch.longitude) {
            points.push([lat, lon]);
        }
        for dev in &branch.developers {
            if let (Some(lat), Some(lon)) = (dev.latitude, dev.longitude) {
                points.push([lat, lon]);
            }
        }
        for company in &branch.k1_companies {
            if let (Some(lat), Some(lon)) = (company.latitude, company.longitude) {
                points.push([lat, lon]);
            }
        }
    }

    points
}

/// Fit the collected points, or fall back to the fixed default view when
/// nothing is plottable
pub fn viewport_for(points: Vec<[f64; 2]>) -> Viewport {
    if points.is_empty() {
        Viewport::Default {
            center: [DEFAULT_MAP_CENTER.0, DEFAULT_MAP_CENTER.1],
            zoom: DEFAULT_MAP_ZOOM,
        }
    } else {
        Viewport::FitBounds {
            points,
            padding: FIT_BOUNDS_PADDING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::areas::dtos::{CompanyNode, DeveloperNode};

    fn branch(devs: usize, companies: usize, lat: Option<f64>) -> BranchNode {
        BranchNode {
            kode_cabang: "00101".to_string(),
            nama: Some("Bandung".to_string()),
            nama_manager: None,
            latitude: lat,
            longitude: lat,
            developers: (0..devs)
                .map(|i| DeveloperNode {
                    nama: format!("D{}", i),
                    project: None,
                    latitude: Some(-6.9),
                    longitude: Some(107.6),
                    tipe: None,
                })
                .collect(),
            k1_companies: (0..companies)
                .map(|i| CompanyNode {
                    nama: format!("C{}", i),
                    payroll: None,
                    latitude: None,
                    longitude: None,
                })
                .collect(),
        }
    }

    #[test]
    fn counts_are_sums_over_branches() {
        let branches = vec![branch(2, 1, None), branch(3, 0, None)];
        let stats = compute_statistics(1, &branches);

        assert_eq!(stats.area_count, 1);
        assert_eq!(stats.branch_count, 2);
        assert_eq!(stats.developer_count, 5);
        assert_eq!(stats.company_count, 1);

        let by_hand: usize = branches.iter().map(|b| b.developers.len()).sum();
        assert_eq!(stats.developer_count, by_hand);
    }

    #[test]
    fn empty_subtree_counts_are_zero() {
        let stats = compute_statistics(0, &[]);
        assert_eq!(stats.branch_count, 0);
        assert_eq!(stats.developer_count, 0);
        assert_eq!(stats.company_count, 0);
    }

    #[test]
    fn bounds_skip_points_without_coordinates() {
        // branch itself has no coords, companies have none, developers do
        let branches = vec![branch(2, 1, None)];
        let points = collect_bounds(&branches);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], [-6.9, 107.6]);
    }

    #[test]
    fn viewport_fits_bounds_when_points_exist() {
        let branches = vec![branch(0, 0, Some(-6.5))];
        let viewport = viewport_for(collect_bounds(&branches));
        assert_eq!(
            viewport,
            Viewport::FitBounds {
                points: vec![[-6.5, -6.5]],
                padding: 50,
            }
        );
    }

    #[test]
    fn viewport_falls_back_to_default_when_empty() {
        let viewport = viewport_for(Vec::new());
        assert_eq!(
            viewport,
            Viewport::Default {
                center: [-6.9175, 107.6191],
                zoom: 8,
            }
        );
    }
}
