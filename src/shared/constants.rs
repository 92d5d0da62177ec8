/// Default page size for branch listings
pub const BRANCH_PAGE_SIZE: i64 = 10;

/// Default page size for developer and K1 company listings
pub const DEVELOPER_PAGE_SIZE: i64 = 20;
pub const COMPANY_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// MAP VIEW CONSTANTS
// =============================================================================

/// Default map center (West Java) used when no markers are plotted
pub const DEFAULT_MAP_CENTER: (f64, f64) = (-6.9175, 107.6191);

/// Default zoom level for the fallback view
pub const DEFAULT_MAP_ZOOM: u8 = 8;

/// Pixel padding applied when fitting the view to plotted bounds
pub const FIT_BOUNDS_PADDING: u32 = 50;

/// Marker color for developers without any visit record
pub const UNVISITED_MARKER_COLOR: &str = "#33ff66";
