pub mod company_dto;

pub use company_dto::CompanyPayloadDto;
