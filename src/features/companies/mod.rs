//! Payroll company (K1) records attached to branches.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CompanyService;
