pub mod match_info;
pub mod user;
