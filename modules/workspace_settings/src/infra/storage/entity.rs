//! SeaORM entity for the workspace settings table

use sea_orm::entity::prelude::*;

/// One row per setting key
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "workspace_setting")]
pub struct Model {
    /// Canonical key string (GENERAL, STORAGE, ...)
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,

    /// Payload as camelCase JSON; NULL when the setting holds no payload
    pub payload: Option<Json>,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
