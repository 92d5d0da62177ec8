pub mod area_dto;
pub mod area_tree;

pub use area_dto::{AreaPayloadDto, AreaResponseDto};
pub use area_tree::{AreaTree, BranchNode, CompanyNode, DeveloperNode};
