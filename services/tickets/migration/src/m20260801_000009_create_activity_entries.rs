use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActivityEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActivityEntries::Kind).string().not_null())
                    .col(
                        ColumnDef::new(ActivityEntries::Payload)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivityEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Feed reads newest-first.
        manager
            .create_index(
                Index::create()
                    .table(ActivityEntries::Table)
                    .col(ActivityEntries::CreatedAt)
                    .name("idx_activity_entries_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityEntries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ActivityEntries {
    Table,
    Id,
    Kind,
    Payload,
    CreatedAt,
}
