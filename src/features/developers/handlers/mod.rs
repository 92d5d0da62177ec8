pub mod developer_handler;

pub use developer_handler::*;
