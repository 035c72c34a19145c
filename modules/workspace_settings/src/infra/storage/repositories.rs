//! SeaORM repository implementation

use crate::domain::repository::{FindWorkspaceSetting, WorkspaceSettingsRepository};
use crate::domain::stored::StoredWorkspaceSetting;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use super::{entity, mapper};

pub struct SeaOrmWorkspaceSettingsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmWorkspaceSettingsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkspaceSettingsRepository for SeaOrmWorkspaceSettingsRepository {
    async fn list(&self, filter: &FindWorkspaceSetting) -> Result<Vec<StoredWorkspaceSetting>> {
        let mut query = entity::Entity::find();
        if let Some(name) = &filter.name {
            query = query.filter(entity::Column::Name.eq(name.as_str()));
        }

        let rows = query
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Name)
            .all(&*self.db)
            .await?;

        rows.into_iter()
            .map(StoredWorkspaceSetting::try_from)
            .collect::<Result<Vec<_>>>()
    }

    async fn find(&self, filter: &FindWorkspaceSetting) -> Result<Option<StoredWorkspaceSetting>> {
        let mut query = entity::Entity::find();
        if let Some(name) = &filter.name {
            query = query.filter(entity::Column::Name.eq(name.as_str()));
        }

        match query.one(&*self.db).await? {
            Some(row) => Ok(Some(row.try_into()?)),
            None => Ok(None),
        }
    }

    async fn upsert(&self, setting: &StoredWorkspaceSetting) -> Result<StoredWorkspaceSetting> {
        let active = mapper::to_active_model(setting, chrono::Utc::now())?;

        // created_at survives the update branch
        entity::Entity::insert(active)
            .on_conflict(
                OnConflict::column(entity::Column::Name)
                    .update_columns([entity::Column::Payload, entity::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        let row = entity::Entity::find_by_id(setting.key.as_str())
            .one(&*self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("workspace setting {} missing after upsert", setting.key))?;

        row.try_into()
    }
}
