pub mod developer_service;

pub use developer_service::DeveloperService;
