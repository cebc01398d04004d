pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;

pub use error::{StoreError, ValidationError};
pub use models::match_info::MatchInfo;
pub use store::MatchStore;
pub use utils::video_host::VideoHosts;
