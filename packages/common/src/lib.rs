pub mod character;
pub mod match_link_type;

pub use character::{Character, ParseCharacterError};
pub use match_link_type::{MatchLinkType, ParseMatchLinkTypeError};
