#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where a match record points to.
///
/// When the `sea-orm` feature is enabled, this enum can be used directly in SeaORM entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")
)]
pub enum MatchLinkType {
    /// A direct link to a video (usually YouTube).
    #[serde(rename = "VI")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "VI"))]
    Video,
    /// A Fightcade replay link.
    #[serde(rename = "FC")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "FC"))]
    Fightcade,
}

impl MatchLinkType {
    pub const ALL: &'static [MatchLinkType] = &[Self::Video, Self::Fightcade];

    /// Returns the stored short code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "VI",
            Self::Fightcade => "FC",
        }
    }
}

impl fmt::Display for MatchLinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown link type code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid match link type '{invalid}'. Valid values: VI, FC")]
pub struct ParseMatchLinkTypeError {
    invalid: String,
}

impl FromStr for MatchLinkType {
    type Err = ParseMatchLinkTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VI" => Ok(Self::Video),
            "FC" => Ok(Self::Fightcade),
            _ => Err(ParseMatchLinkTypeError {
                invalid: s.to_string(),
            }),
        }
    }
}
