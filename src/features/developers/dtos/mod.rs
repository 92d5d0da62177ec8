pub mod developer_dto;

pub use developer_dto::DeveloperPayloadDto;
