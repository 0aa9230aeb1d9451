use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventBookmarks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(EventBookmarks::EventId).uuid().not_null())
                    .col(ColumnDef::new(EventBookmarks::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(EventBookmarks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(EventBookmarks::EventId)
                            .col(EventBookmarks::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EventBookmarks::Table, EventBookmarks::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EventBookmarks::Table, EventBookmarks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventBookmarks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EventBookmarks {
    Table,
    EventId,
    UserId,
    CreatedAt,
}

#[derive(Iden)]
enum Events {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
