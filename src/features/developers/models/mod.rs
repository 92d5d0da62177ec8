pub mod developer;

pub use developer::Developer;
