pub mod area_service;
pub mod tree_assembler;

pub use area_service::AreaService;
