use std::fmt;

use chrono::{DateTime, Utc};
use common::{Character, MatchLinkType};
use sea_orm::ActiveValue::{NotSet, Set};
use uuid::Uuid;

use crate::entity::match_info;
use crate::error::ValidationError;
use crate::utils::video_host::VideoHosts;

pub const MAX_URL_LEN: usize = 200;
pub const MAX_TEXT_LEN: usize = 100;

/// A match record as built by the caller, before it is persisted.
///
/// `MatchInfo::new` assigns a fresh id and the roster defaults, so a draft is
/// always complete apart from the fields the caller chooses to fill in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchInfo {
    pub id: Uuid,
    pub source_type: Option<MatchLinkType>,
    pub url: String,
    pub player1_character: Character,
    pub player2_character: Character,
    pub winning_character: Option<Character>,
    pub player1_name: String,
    pub player2_name: String,
    pub video_timestamp: i32,
    pub uploader: String,
    pub date_uploaded: Option<DateTime<Utc>>,
    pub video_title: String,
    pub added_by: Option<i32>,
}

impl Default for MatchInfo {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            source_type: None,
            url: String::new(),
            player1_character: Character::DEFAULT_PLAYER1,
            player2_character: Character::DEFAULT_PLAYER2,
            winning_character: None,
            player1_name: String::new(),
            player2_name: String::new(),
            video_timestamp: 0,
            uploader: String::new(),
            date_uploaded: None,
            video_title: String::new(),
            added_by: None,
        }
    }
}

impl MatchInfo {
    pub fn new(source_type: MatchLinkType, url: impl Into<String>) -> Self {
        Self {
            source_type: Some(source_type),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_characters(mut self, player1: Character, player2: Character) -> Self {
        self.player1_character = player1;
        self.player2_character = player2;
        self
    }

    pub fn with_players(mut self, player1: impl Into<String>, player2: impl Into<String>) -> Self {
        self.player1_name = player1.into();
        self.player2_name = player2.into();
        self
    }

    pub fn with_winner(mut self, winner: Character) -> Self {
        self.winning_character = Some(winner);
        self
    }

    pub fn with_timestamp(mut self, seconds: i32) -> Self {
        self.video_timestamp = seconds;
        self
    }

    pub fn with_video_metadata(
        mut self,
        uploader: impl Into<String>,
        date_uploaded: DateTime<Utc>,
        video_title: impl Into<String>,
    ) -> Self {
        self.uploader = uploader.into();
        self.date_uploaded = Some(date_uploaded);
        self.video_title = video_title.into();
        self
    }

    pub fn added_by(mut self, user_id: i32) -> Self {
        self.added_by = Some(user_id);
        self
    }

    /// Column values for a write. `id` and `created_at` are left `NotSet`;
    /// the store fills them in only when inserting.
    pub(crate) fn into_active_model(
        self,
        source_type: MatchLinkType,
        now: DateTime<Utc>,
    ) -> match_info::ActiveModel {
        match_info::ActiveModel {
            id: NotSet,
            source_type: Set(source_type),
            url: Set(self.url),
            player1_character: Set(self.player1_character),
            player2_character: Set(self.player2_character),
            winning_character: Set(self.winning_character),
            player1_name: Set(self.player1_name),
            player2_name: Set(self.player2_name),
            video_timestamp: Set(self.video_timestamp),
            uploader: Set(self.uploader),
            date_uploaded: Set(self.date_uploaded),
            video_title: Set(self.video_title),
            created_at: NotSet,
            modified_at: Set(now),
            added_by: Set(self.added_by),
            ..Default::default()
        }
    }
}

impl From<match_info::Model> for MatchInfo {
    fn from(m: match_info::Model) -> Self {
        Self {
            id: m.id,
            source_type: Some(m.source_type),
            url: m.url,
            player1_character: m.player1_character,
            player2_character: m.player2_character,
            winning_character: m.winning_character,
            player1_name: m.player1_name,
            player2_name: m.player2_name,
            video_timestamp: m.video_timestamp,
            uploader: m.uploader,
            date_uploaded: m.date_uploaded,
            video_title: m.video_title,
            added_by: m.added_by,
        }
    }
}

impl fmt::Display for MatchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<MatchInfo> {} {}", self.id, self.url)
    }
}

/// Run every check a record must pass before it is written.
///
/// Returns the source type, which is known to be present once this succeeds.
pub fn validate_match_info(
    record: &MatchInfo,
    video_hosts: &VideoHosts,
) -> Result<MatchLinkType, ValidationError> {
    let source_type = validate_required_fields(record)?;
    validate_field_lengths(record)?;
    validate_video_metadata(record, source_type, video_hosts)?;
    validate_winning_character(record)?;
    Ok(source_type)
}

pub fn validate_required_fields(record: &MatchInfo) -> Result<MatchLinkType, ValidationError> {
    match record.source_type {
        Some(source_type) if !record.url.trim().is_empty() => Ok(source_type),
        _ => Err(ValidationError::MissingRequiredFields),
    }
}

pub fn validate_field_lengths(record: &MatchInfo) -> Result<(), ValidationError> {
    check_len("url", &record.url, MAX_URL_LEN)?;
    check_len("player1_name", &record.player1_name, MAX_TEXT_LEN)?;
    check_len("player2_name", &record.player2_name, MAX_TEXT_LEN)?;
    check_len("uploader", &record.uploader, MAX_TEXT_LEN)?;
    check_len("video_title", &record.video_title, MAX_TEXT_LEN)?;
    Ok(())
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::FieldTooLong { field, max });
    }
    Ok(())
}

/// Videos on a recognized host must carry uploader, upload date and title.
pub fn validate_video_metadata(
    record: &MatchInfo,
    source_type: MatchLinkType,
    video_hosts: &VideoHosts,
) -> Result<(), ValidationError> {
    if source_type != MatchLinkType::Video || !video_hosts.is_recognized(&record.url) {
        return Ok(());
    }
    if record.uploader.is_empty() || record.date_uploaded.is_none() || record.video_title.is_empty()
    {
        return Err(ValidationError::MissingVideoMetadata);
    }
    Ok(())
}

pub fn validate_winning_character(record: &MatchInfo) -> Result<(), ValidationError> {
    if let Some(winner) = record.winning_character
        && winner != record.player1_character
        && winner != record.player2_character
    {
        return Err(ValidationError::WinnerNotAPlayer);
    }
    Ok(())
}
