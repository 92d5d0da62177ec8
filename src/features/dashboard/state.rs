//! Scope cascade for the map drill-down.
//!
//! The dashboard narrows the visible subtree in steps: everything, one
//! area, one branch. Fetches are asynchronous, so every fetch is issued
//! against a ticket carrying the epoch it was started in; a result whose
//! ticket no longer matches the current epoch is discarded instead of
//! overwriting a newer selection. Failed fetches never transition state.

use serde::Serialize;

use crate::features::areas::dtos::{AreaTree, BranchNode};
use crate::features::dashboard::dtos::{Statistics, Viewport};
use crate::features::dashboard::stats::{collect_bounds, compute_statistics, viewport_for};

/// Current narrowing level of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Scope {
    Unscoped,
    RegionWide,
    AreaScoped { kode_area: Option<String> },
    BranchScoped { kode_area: String, kode_cabang: String },
}

/// Handle for one in-flight fetch. Applying a ticket from an older epoch
/// is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    scope: Scope,
    epoch: u64,
}

impl FetchTicket {
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// What the dashboard currently has loaded
#[derive(Debug, Clone, Serialize)]
pub enum LoadedView {
    /// Region scope: every reachable area's branches concatenated
    Combined {
        area_count: usize,
        branches: Vec<BranchNode>,
    },
    /// One area's assembled tree
    Area { tree: AreaTree },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("no area tree is loaded")]
    NoAreaLoaded,
    #[error("branch {0} is not part of the loaded area")]
    UnknownBranch(String),
}

/// Explicit, serializable dashboard state
#[derive(Debug, Clone, Serialize)]
pub struct DashboardState {
    scope: Scope,
    #[serde(skip)]
    epoch: u64,
    loaded: Option<LoadedView>,
    selected_branch: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            scope: Scope::Unscoped,
            epoch: 0,
            loaded: None,
            selected_branch: None,
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn loaded(&self) -> Option<&LoadedView> {
        self.loaded.as_ref()
    }

    pub fn selected_branch(&self) -> Option<&str> {
        self.selected_branch.as_deref()
    }

    /// The branch selector is only usable once an area tree is loaded
    pub fn branch_selector_enabled(&self) -> bool {
        matches!(self.loaded, Some(LoadedView::Area { .. }))
    }

    /// Enter the area scope family without a concrete area yet. No fetch
    /// is needed; the branch selector stays disabled.
    pub fn enter_area_mode(&mut self) {
        self.scope = Scope::AreaScoped { kode_area: None };
        self.selected_branch = None;
    }

    /// Start a region-wide fetch. Bumping the epoch invalidates every
    /// ticket issued earlier.
    pub fn begin_region_fetch(&mut self) -> FetchTicket {
        self.epoch += 1;
        FetchTicket {
            scope: Scope::RegionWide,
            epoch: self.epoch,
        }
    }

    /// Start a fetch of one area's tree
    pub fn begin_area_fetch(&mut self, kode_area: &str) -> FetchTicket {
        self.epoch += 1;
        FetchTicket {
            scope: Scope::AreaScoped {
                kode_area: Some(kode_area.to_string()),
            },
            epoch: self.epoch,
        }
    }

    /// Apply a finished region fetch. Returns false when the ticket is
    /// stale; the state is untouched in that case.
    pub fn apply_region_fetch(
        &mut self,
        ticket: &FetchTicket,
        area_count: usize,
        branches: Vec<BranchNode>,
    ) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!("Discarding stale region fetch (epoch {})", ticket.epoch);
            return false;
        }
        self.scope = Scope::RegionWide;
        self.loaded = Some(LoadedView::Combined {
            area_count,
            branches,
        });
        self.selected_branch = None;
        true
    }

    /// Apply a finished area fetch. Returns false when the ticket is stale.
    pub fn apply_area_fetch(&mut self, ticket: &FetchTicket, tree: AreaTree) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!("Discarding stale area fetch (epoch {})", ticket.epoch);
            return false;
        }
        self.scope = Scope::AreaScoped {
            kode_area: Some(tree.kode_area.clone()),
        };
        self.loaded = Some(LoadedView::Area { tree });
        self.selected_branch = None;
        true
    }

    /// Narrow to one branch of the loaded area. Pure filter over data that
    /// is already loaded; never refetches.
    pub fn select_branch(&mut self, kode_cabang: &str) -> Result<(), StateError> {
        let tree = match &self.loaded {
            Some(LoadedView::Area { tree }) => tree,
            _ => return Err(StateError::NoAreaLoaded),
        };
        if !tree.branches.iter().any(|b| b.kode_cabang == kode_cabang) {
            return Err(StateError::UnknownBranch(kode_cabang.to_string()));
        }
        self.scope = Scope::BranchScoped {
            kode_area: tree.kode_area.clone(),
            kode_cabang: kode_cabang.to_string(),
        };
        self.selected_branch = Some(kode_cabang.to_string());
        Ok(())
    }

    /// Back to the full area view without losing the fetched tree
    pub fn clear_branch(&mut self) {
        if let Some(LoadedView::Area { tree }) = &self.loaded {
            self.scope = Scope::AreaScoped {
                kode_area: Some(tree.kode_area.clone()),
            };
        }
        self.selected_branch = None;
    }

    /// Full reset to the initial state. In-flight fetches become stale.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.scope = Scope::Unscoped;
        self.loaded = None;
        self.selected_branch = None;
    }

    /// Branches of the currently visible subtree
    pub fn visible_branches(&self) -> &[BranchNode] {
        let branches: &[BranchNode] = match &self.loaded {
            Some(LoadedView::Combined { branches, .. }) => branches,
            Some(LoadedView::Area { tree }) => &tree.branches,
            None => &[],
        };
        match &self.selected_branch {
            Some(selected) => {
                // singleton slice of the selected branch, if still present
                match branches.iter().position(|b| &b.kode_cabang == selected) {
                    Some(i) => &branches[i..=i],
                    None => &[],
                }
            }
            None => branches,
        }
    }

    pub fn statistics(&self) -> Statistics {
        let area_count = match (&self.loaded, &self.selected_branch) {
            (Some(LoadedView::Combined { area_count, .. }), _) => *area_count,
            (Some(LoadedView::Area { .. }), _) => 1,
            (None, _) => 0,
        };
        compute_statistics(area_count, self.visible_branches())
    }

    pub fn viewport(&self) -> Viewport {
        viewport_for(collect_bounds(self.visible_branches()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::areas::dtos::{CompanyNode, DeveloperNode};

    fn branch(kode: &str) -> BranchNode {
        BranchNode {
            kode_cabang: kode.to_string(),
            nama: Some(format!("Cabang {}", kode)),
            nama_manager: None,
            latitude: Some(-6.9),
            longitude: Some(107.6),
            developers: vec![DeveloperNode {
                nama: "Acme".to_string(),
                project: Some("P1".to_string()),
                latitude: None,
                longitude: None,
                tipe: None,
            }],
            k1_companies: vec![CompanyNode {
                nama: "CoX".to_string(),
                payroll: Some(10),
                latitude: None,
                longitude: None,
            }],
        }
    }

    fn tree(kode_area: &str, branches: Vec<BranchNode>) -> AreaTree {
        AreaTree {
            kode_area: kode_area.to_string(),
            nama_area: format!("Area {}", kode_area),
            latitude: None,
            longitude: None,
            branches,
        }
    }

    #[test]
    fn initial_state_is_unscoped_and_empty() {
        let state = DashboardState::new();
        assert_eq!(state.scope(), &Scope::Unscoped);
        assert!(state.loaded().is_none());
        assert!(!state.branch_selector_enabled());
        assert_eq!(state.statistics().branch_count, 0);
    }

    #[test]
    fn area_fetch_transitions_to_area_scope() {
        let mut state = DashboardState::new();
        let ticket = state.begin_area_fetch("A01");
        assert!(state.apply_area_fetch(&ticket, tree("A01", vec![branch("B1")])));

        assert_eq!(
            state.scope(),
            &Scope::AreaScoped {
                kode_area: Some("A01".to_string())
            }
        );
        assert!(state.branch_selector_enabled());
        assert_eq!(state.statistics().area_count, 1);
    }

    #[test]
    fn stale_fetch_is_discarded() {
        let mut state = DashboardState::new();
        let first = state.begin_area_fetch("A01");
        let second = state.begin_area_fetch("A02");

        // the newer selection resolves first
        assert!(state.apply_area_fetch(&second, tree("A02", vec![branch("B2")])));
        // the late response for the older selection must not win
        assert!(!state.apply_area_fetch(&first, tree("A01", vec![branch("B1")])));

        assert_eq!(
            state.scope(),
            &Scope::AreaScoped {
                kode_area: Some("A02".to_string())
            }
        );
        assert_eq!(state.visible_branches()[0].kode_cabang, "B2");
    }

    #[test]
    fn region_fetch_staleness_applies_across_scope_kinds() {
        let mut state = DashboardState::new();
        let region = state.begin_region_fetch();
        let area = state.begin_area_fetch("A01");

        assert!(state.apply_area_fetch(&area, tree("A01", vec![branch("B1")])));
        assert!(!state.apply_region_fetch(&region, 3, vec![branch("B9")]));
        assert!(matches!(state.scope(), Scope::AreaScoped { .. }));
    }

    #[test]
    fn branch_selection_filters_without_refetch() {
        let mut state = DashboardState::new();
        let ticket = state.begin_area_fetch("A01");
        state.apply_area_fetch(&ticket, tree("A01", vec![branch("B1"), branch("B2")]));

        state.select_branch("B2").unwrap();
        assert_eq!(
            state.scope(),
            &Scope::BranchScoped {
                kode_area: "A01".to_string(),
                kode_cabang: "B2".to_string()
            }
        );
        assert_eq!(state.visible_branches().len(), 1);
        assert_eq!(state.statistics().branch_count, 1);

        // reverting keeps the fetched tree
        state.clear_branch();
        assert_eq!(state.visible_branches().len(), 2);
        assert!(matches!(state.scope(), Scope::AreaScoped { .. }));
    }

    #[test]
    fn branch_selection_requires_a_loaded_area() {
        let mut state = DashboardState::new();
        assert_eq!(state.select_branch("B1"), Err(StateError::NoAreaLoaded));

        let ticket = state.begin_region_fetch();
        state.apply_region_fetch(&ticket, 2, vec![branch("B1")]);
        // region view has no branch selector either
        assert_eq!(state.select_branch("B1"), Err(StateError::NoAreaLoaded));
        assert!(!state.branch_selector_enabled());
    }

    #[test]
    fn unknown_branch_is_rejected_and_state_kept() {
        let mut state = DashboardState::new();
        let ticket = state.begin_area_fetch("A01");
        state.apply_area_fetch(&ticket, tree("A01", vec![branch("B1")]));

        assert_eq!(
            state.select_branch("B9"),
            Err(StateError::UnknownBranch("B9".to_string()))
        );
        assert!(matches!(state.scope(), Scope::AreaScoped { .. }));
        assert_eq!(state.visible_branches().len(), 1);
    }

    #[test]
    fn failed_fetch_leaves_prior_view_intact() {
        let mut state = DashboardState::new();
        let ticket = state.begin_area_fetch("A01");
        state.apply_area_fetch(&ticket, tree("A01", vec![branch("B1")]));

        // a later fetch fails: the caller drops the ticket without applying
        let _failed = state.begin_area_fetch("A02");
        assert_eq!(
            state.scope(),
            &Scope::AreaScoped {
                kode_area: Some("A01".to_string())
            }
        );
        assert_eq!(state.visible_branches().len(), 1);
    }

    #[test]
    fn reset_clears_everything_and_invalidates_in_flight_fetches() {
        let mut state = DashboardState::new();
        let ticket = state.begin_area_fetch("A01");
        state.apply_area_fetch(&ticket, tree("A01", vec![branch("B1")]));
        state.select_branch("B1").unwrap();

        let in_flight = state.begin_area_fetch("A02");
        state.reset();

        assert_eq!(state.scope(), &Scope::Unscoped);
        assert!(state.loaded().is_none());
        assert_eq!(state.selected_branch(), None);
        assert!(!state.apply_area_fetch(&in_flight, tree("A02", vec![branch("B2")])));
        assert_eq!(
            state.viewport(),
            Viewport::Default {
                center: [-6.9175, 107.6191],
                zoom: 8,
            }
        );
    }

    #[test]
    fn region_statistics_count_all_areas() {
        let mut state = DashboardState::new();
        let ticket = state.begin_region_fetch();
        state.apply_region_fetch(&ticket, 4, vec![branch("B1"), branch("B2"), branch("B3")]);

        let stats = state.statistics();
        assert_eq!(stats.area_count, 4);
        assert_eq!(stats.branch_count, 3);
        assert_eq!(stats.developer_count, 3);
        assert_eq!(stats.company_count, 3);
    }

    #[test]
    fn entering_area_mode_keeps_selector_disabled_until_fetch() {
        let mut state = DashboardState::new();
        state.enter_area_mode();
        assert_eq!(state.scope(), &Scope::AreaScoped { kode_area: None });
        assert!(!state.branch_selector_enabled());
    }
}
