use sea_orm::*;
use tracing::{debug, instrument};

use crate::entity::match_info;
use crate::error::StoreError;
use crate::models::match_info::{MatchInfo, validate_match_info};
use crate::utils::video_host::VideoHosts;

/// Validates and persists match records.
#[derive(Clone, Debug)]
pub struct MatchStore {
    db: DatabaseConnection,
    video_hosts: VideoHosts,
}

impl MatchStore {
    pub fn new(db: DatabaseConnection, video_hosts: VideoHosts) -> Self {
        Self { db, video_hosts }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn video_hosts(&self) -> &VideoHosts {
        &self.video_hosts
    }

    /// Validate `record` and write it, inserting when no row with its id exists yet.
    ///
    /// Nothing is written if validation fails. A duplicate `(url, video_timestamp)`
    /// is reported as [`StoreError::ConstraintViolation`] and the transaction is
    /// rolled back.
    #[instrument(skip(self, record), fields(id = %record.id, url = %record.url))]
    pub async fn create_or_update(&self, record: MatchInfo) -> Result<match_info::Model, StoreError> {
        let source_type = validate_match_info(&record, &self.video_hosts)?;

        let id = record.id;
        let now = chrono::Utc::now();
        let active = record.into_active_model(source_type, now);

        let txn = self.db.begin().await?;

        // Update first; a zero row count means the id is new. A concurrent writer
        // that wins the race trips a unique key and surfaces as ConstraintViolation.
        let updated = match_info::Entity::update_many()
            .set(active.clone())
            .filter(match_info::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        let model = if updated.rows_affected == 0 {
            debug!("Inserting new match record");
            let mut active = active;
            active.id = Set(id);
            active.created_at = Set(now);
            active.insert(&txn).await?
        } else {
            debug!("Updated existing match record");
            match_info::Entity::find_by_id(id)
                .one(&txn)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("match_info {id}")))?
        };

        txn.commit().await?;

        Ok(model)
    }
}
