//! Database migrations for workspace settings

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_workspace_setting::Migration)]
    }
}

mod m20250301_000001_create_workspace_setting {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(WorkspaceSetting::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WorkspaceSetting::Name)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(WorkspaceSetting::Payload).json())
                        .col(
                            ColumnDef::new(WorkspaceSetting::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(WorkspaceSetting::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(WorkspaceSetting::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum WorkspaceSetting {
        Table,
        Name,
        Payload,
        CreatedAt,
        UpdatedAt,
    }
}
