//! Migration: Create the singleton branding config row.

use sea_orm_migration::prelude::*;

use crate::config::{APP_CONFIG_ID, DEFAULT_APP_NAME};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppConfig::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AppConfig::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AppConfig::Logo).text().null())
                    .col(ColumnDef::new(AppConfig::AppName).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        let seed = Query::insert()
            .into_table(AppConfig::Table)
            .columns([AppConfig::Id, AppConfig::AppName])
            .values([APP_CONFIG_ID.into(), DEFAULT_APP_NAME.into()])
            .map_err(|e| DbErr::Migration(e.to_string()))?
            .on_conflict(OnConflict::column(AppConfig::Id).do_nothing().to_owned())
            .to_owned();

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppConfig::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
enum AppConfig {
    Table,
    Id,
    Logo,
    AppName,
}
