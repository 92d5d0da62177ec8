pub mod areas;
pub mod cabang;
pub mod companies;
pub mod dashboard;
pub mod developers;
pub mod search;
pub mod visits;
