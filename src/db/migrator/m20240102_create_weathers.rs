use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Weathers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Weathers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Weathers::Forecast).string().not_null())
                    .col(ColumnDef::new(Weathers::Time).string().not_null())
                    .col(ColumnDef::new(Weathers::CreatedAt).string().not_null())
                    .col(ColumnDef::new(Weathers::LocationId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weathers_location_id")
                            .from(Weathers::Table, Weathers::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_weathers_location_id")
                    .table(Weathers::Table)
                    .col(Weathers::LocationId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Weathers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Weathers {
    Table,
    Id,
    Forecast,
    Time,
    CreatedAt,
    LocationId,
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
}
