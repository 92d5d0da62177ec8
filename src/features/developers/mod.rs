//! Developer (real-estate project) records tracked per branch.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::DeveloperService;
