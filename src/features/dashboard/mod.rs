//! Dashboard scope cascade, statistics and the region-wide aggregation.
//!
//! The scope state machine mirrors the map UI's drill-down: region, one
//! area, one branch. It is a plain owned struct so the staleness rules can
//! be tested without any I/O.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod state;
pub mod stats;

pub use services::DashboardService;
