use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite primary key is load-bearing: check-in relies on the
        // unique violation of a second insert for the same pair.
        manager
            .create_table(
                Table::create()
                    .table(Checkins::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Checkins::EventId).uuid().not_null())
                    .col(ColumnDef::new(Checkins::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Checkins::CheckedInAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(Checkins::EventId)
                            .col(Checkins::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Checkins::Table, Checkins::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Checkins::Table, Checkins::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Checkins::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Checkins {
    Table,
    EventId,
    UserId,
    CheckedInAt,
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
