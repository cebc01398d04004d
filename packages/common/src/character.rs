#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Playable character, stored as its two-letter roster code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")
)]
pub enum Character {
    #[serde(rename = "AN")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "AN"))]
    Anakaris,
    #[serde(rename = "AU")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "AU"))]
    Aulbath,
    #[serde(rename = "BB")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "BB"))]
    BbHood,
    #[serde(rename = "BI")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "BI"))]
    Bishamon,
    #[serde(rename = "DE")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "DE"))]
    Demitri,
    #[serde(rename = "FE")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "FE"))]
    Felicia,
    #[serde(rename = "GA")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "GA"))]
    Gallon,
    #[serde(rename = "HK")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "HK"))]
    HsienKo,
    #[serde(rename = "JE")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "JE"))]
    Jedah,
    #[serde(rename = "LI")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "LI"))]
    Lilith,
    #[serde(rename = "LR")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "LR"))]
    LordRaptor,
    #[serde(rename = "MO")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "MO"))]
    Morrigan,
    #[serde(rename = "QB")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "QB"))]
    QBee,
    #[serde(rename = "SA")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "SA"))]
    Sasquatch,
    #[serde(rename = "VI")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "VI"))]
    Victor,
    #[serde(rename = "ZA")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "ZA"))]
    Zabel,
}

impl Character {
    /// Default pick for player 1 when none is chosen.
    pub const DEFAULT_PLAYER1: Character = Character::Anakaris;
    /// Default pick for player 2 when none is chosen.
    pub const DEFAULT_PLAYER2: Character = Character::Victor;

    /// The full roster, in code order.
    pub const ALL: &'static [Character] = &[
        Self::Anakaris,
        Self::Aulbath,
        Self::BbHood,
        Self::Bishamon,
        Self::Demitri,
        Self::Felicia,
        Self::Gallon,
        Self::HsienKo,
        Self::Jedah,
        Self::Lilith,
        Self::LordRaptor,
        Self::Morrigan,
        Self::QBee,
        Self::Sasquatch,
        Self::Victor,
        Self::Zabel,
    ];

    /// Returns the two-letter roster code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Anakaris => "AN",
            Self::Aulbath => "AU",
            Self::BbHood => "BB",
            Self::Bishamon => "BI",
            Self::Demitri => "DE",
            Self::Felicia => "FE",
            Self::Gallon => "GA",
            Self::HsienKo => "HK",
            Self::Jedah => "JE",
            Self::Lilith => "LI",
            Self::LordRaptor => "LR",
            Self::Morrigan => "MO",
            Self::QBee => "QB",
            Self::Sasquatch => "SA",
            Self::Victor => "VI",
            Self::Zabel => "ZA",
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error when parsing a code that is not on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown character code '{invalid}'")]
pub struct ParseCharacterError {
    invalid: String,
}

impl ParseCharacterError {
    /// The rejected input.
    pub fn invalid(&self) -> &str {
        &self.invalid
    }
}

impl FromStr for Character {
    type Err = ParseCharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.code() == s)
            .copied()
            .ok_or_else(|| ParseCharacterError {
                invalid: s.to_string(),
            })
    }
}
