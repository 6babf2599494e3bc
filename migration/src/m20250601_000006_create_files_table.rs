use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Files::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Files::FileType).string_len(32).not_null())
                    .col(ColumnDef::new(Files::FileName).string_len(255).not_null())
                    .col(ColumnDef::new(Files::FileUrl).text().not_null())
                    .col(
                        ColumnDef::new(Files::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Files::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One active row per type is kept by the application write path,
        // this index only serves the "latest active of type" lookup.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_files_type_active_created
                ON files (file_type, is_active, created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_files_type_active_created;")
            .await?;

        manager
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Files {
    Table,
    Id,
    FileType,
    FileName,
    FileUrl,
    IsActive,
    CreatedAt,
}
