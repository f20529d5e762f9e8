use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::SearchQuery).string().not_null())
                    .col(
                        ColumnDef::new(Locations::FormattedQuery)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Locations::Latitude).double().not_null())
                    .col(ColumnDef::new(Locations::Longitude).double().not_null())
                    .col(ColumnDef::new(Locations::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Natural key: concurrent cache misses for the same text collapse to one row
        manager
            .create_index(
                Index::create()
                    .name("idx_locations_search_query_unique")
                    .table(Locations::Table)
                    .col(Locations::SearchQuery)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
    SearchQuery,
    FormattedQuery,
    Latitude,
    Longitude,
    CreatedAt,
}
