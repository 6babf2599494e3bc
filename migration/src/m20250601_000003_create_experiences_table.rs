use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Experiences::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Experiences::Company).string_len(150).not_null())
                    .col(ColumnDef::new(Experiences::Location).string_len(255).not_null().default(""))
                    // Free text ("Nov 2022", "Present"), ordered lexically like the original
                    .col(ColumnDef::new(Experiences::StartDate).string_len(50).not_null().default(""))
                    .col(ColumnDef::new(Experiences::EndDate).string_len(50).not_null().default(""))
                    .col(
                        ColumnDef::new(Experiences::Description)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
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
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    Location,
    StartDate,
    EndDate,
    Description,
    CreatedAt,
}
