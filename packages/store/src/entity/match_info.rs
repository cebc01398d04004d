use std::fmt;

use common::{Character, MatchLinkType};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A recorded match, pointing at a video or a Fightcade replay.
///
/// Timestamps are maintained by `MatchStore`, not by `ActiveModelBehavior`.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub source_type: MatchLinkType,

    #[sea_orm(column_type = "String(StringLen::N(200))", unique_key = "url_video_timestamp")]
    pub url: String,

    pub player1_character: Character,
    pub player2_character: Character,
    /// NULL when no winner was recorded.
    pub winning_character: Option<Character>,

    #[sea_orm(column_type = "Text")]
    pub player1_name: String,
    #[sea_orm(column_type = "Text")]
    pub player2_name: String,

    /// Offset into the video, in seconds.
    #[sea_orm(unique_key = "url_video_timestamp")]
    pub video_timestamp: i32,
    #[sea_orm(column_type = "Text")]
    pub uploader: String,
    pub date_uploaded: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text")]
    pub video_title: String,

    pub created_at: DateTimeUtc,
    pub modified_at: DateTimeUtc,

    pub added_by: Option<i32>,
    #[sea_orm(belongs_to, from = "added_by", to = "id", on_delete = "Cascade")]
    pub user: HasOne<super::user::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<MatchInfo> {} {}", self.id, self.url)
    }
}
