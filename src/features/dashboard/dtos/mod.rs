pub mod dashboard_dto;

pub use dashboard_dto::{RegionTreeDto, Statistics, Viewport};
