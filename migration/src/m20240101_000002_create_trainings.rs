use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create trainings table
        manager
            .create_table(
                Table::create()
                    .table(Trainings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trainings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trainings::UserId).big_integer())
                    .col(
                        ColumnDef::new(Trainings::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trainings::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Trainings::ActivityType).string().not_null())
                    .col(ColumnDef::new(Trainings::Distance).double().not_null())
                    .col(ColumnDef::new(Trainings::AverageSpeed).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trainings_user_id")
                            .from(Trainings::Table, Trainings::UserId)
                            .to(Users::Table, Users::Id)
                            // 删除用户时训练保留，归属置空
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_trainings_user_id")
                    .table(Trainings::Table)
                    .col(Trainings::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trainings_end_time")
                    .table(Trainings::Table)
                    .col(Trainings::EndTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trainings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Trainings {
    Table,
    Id,
    UserId,
    StartTime,
    EndTime,
    ActivityType,
    Distance,
    AverageSpeed,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
