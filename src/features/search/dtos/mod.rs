pub mod search_dto;

pub use search_dto::{SearchHit, SearchQuery};
