use std::time::Duration;

use sea_orm::sea_query::Index;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::match_info;

/// Connect, then create or update the `user` and `match_info` tables.
pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.to_owned());

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("store::entity::*")
        .sync(&db)
        .await?;

    ensure_indexes(&db).await?;

    Ok(db)
}

/// Ensure supporting indexes exist.
///
/// Postgres does not index foreign key columns on its own; cascading a user
/// delete looks up `match_info` rows by `added_by`.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let stmt = Index::create()
        .if_not_exists()
        .name("idx_match_info_added_by")
        .table(match_info::Entity)
        .col(match_info::Column::AddedBy)
        .to_owned();

    let backend = db.get_database_backend();
    db.execute_raw(backend.build(&stmt)).await?;
    info!("Ensured index idx_match_info_added_by exists");

    Ok(())
}
