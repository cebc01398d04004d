use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account that submitted match records. Owned by the surrounding application;
/// only the columns needed to reference it live here.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(has_many)]
    pub matches: HasMany<super::match_info::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
