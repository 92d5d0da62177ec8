//! Area feature: the root of the geodata hierarchy.
//!
//! An area groups branches (cabang), and each branch carries its real-estate
//! developers and K1 payroll-partner companies. The service here owns the wide
//! join across those four tables and the fold that turns the flat rows into a
//! nested, de-duplicated tree for map rendering.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AreaService;
