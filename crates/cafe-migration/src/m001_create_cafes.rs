//! Миграция: создание таблицы cafes.

use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m001_create_cafes"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cafes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cafes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Cafes::Name)
                            .string_len(250)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Cafes::MapUrl).string_len(500).not_null())
                    .col(ColumnDef::new(Cafes::ImgUrl).string_len(500).not_null())
                    .col(ColumnDef::new(Cafes::Location).string_len(250).not_null())
                    .col(ColumnDef::new(Cafes::Seats).string_len(250).not_null())
                    .col(ColumnDef::new(Cafes::HasToilet).boolean().not_null())
                    .col(ColumnDef::new(Cafes::HasWifi).boolean().not_null())
                    .col(ColumnDef::new(Cafes::HasSockets).boolean().not_null())
                    .col(ColumnDef::new(Cafes::CanTakeCalls).boolean().not_null())
                    .col(ColumnDef::new(Cafes::CoffeePrice).string_len(250).null())
                    .to_owned(),
            )
            .await?;

        // Поиск идёт по точному совпадению location
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Cafes::Table)
                    .col(Cafes::Location)
                    .name("idx_cafes_location")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cafes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cafes {
    Table,
    Id,
    Name,
    MapUrl,
    ImgUrl,
    Location,
    Seats,
    HasToilet,
    HasWifi,
    HasSockets,
    CanTakeCalls,
    CoffeePrice,
}
