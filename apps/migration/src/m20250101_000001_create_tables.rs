use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::FullName).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::AvatarUrl).string())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Persons::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Persons::FullName).string().not_null())
                    .col(ColumnDef::new(Persons::Email).string())
                    .col(ColumnDef::new(Persons::Affiliation).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Categories::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Categories::Description).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Venues::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Venues::Name).string().not_null())
                    .col(ColumnDef::new(Venues::Kind).string().not_null())
                    .col(ColumnDef::new(Venues::Issn).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Publications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Publications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Publications::OwnerId).integer().not_null())
                    .col(ColumnDef::new(Publications::Title).string().not_null())
                    .col(ColumnDef::new(Publications::Abstract).text().not_null())
                    .col(ColumnDef::new(Publications::CategoryId).integer())
                    .col(ColumnDef::new(Publications::VenueId).integer())
                    .col(ColumnDef::new(Publications::Year).integer())
                    .col(ColumnDef::new(Publications::Status).string().not_null())
                    .col(ColumnDef::new(Publications::Version).integer().not_null())
                    .col(
                        ColumnDef::new(Publications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Publications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publications_owner")
                            .from(Publications::Table, Publications::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publications_category")
                            .from(Publications::Table, Publications::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publications_venue")
                            .from(Publications::Table, Publications::VenueId)
                            .to(Venues::Table, Venues::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::UserId).integer().not_null())
                    .col(ColumnDef::new(Notifications::PublicationId).integer())
                    .col(ColumnDef::new(Notifications::Message).string().not_null())
                    .col(ColumnDef::new(Notifications::IsRead).boolean().not_null())
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notifications_user")
                            .from(Notifications::Table, Notifications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LoginLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LoginLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LoginLogs::UserId).integer())
                    .col(ColumnDef::new(LoginLogs::Username).string().not_null())
                    .col(ColumnDef::new(LoginLogs::Success).boolean().not_null())
                    .col(ColumnDef::new(LoginLogs::Ip).string())
                    .col(
                        ColumnDef::new(LoginLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EditLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EditLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EditLogs::PublicationId).integer().not_null())
                    .col(ColumnDef::new(EditLogs::Version).integer().not_null())
                    .col(ColumnDef::new(EditLogs::Field).string().not_null())
                    .col(ColumnDef::new(EditLogs::OldValue).text())
                    .col(ColumnDef::new(EditLogs::NewValue).text())
                    .col(ColumnDef::new(EditLogs::EditedBy).integer().not_null())
                    .col(
                        ColumnDef::new(EditLogs::EditedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_edit_logs_publication")
                            .from(EditLogs::Table, EditLogs::PublicationId)
                            .to(Publications::Table, Publications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_edit_logs_publication_version")
                    .table(EditLogs::Table)
                    .col(EditLogs::PublicationId)
                    .col(EditLogs::Version)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StatusHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StatusHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StatusHistory::PublicationId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StatusHistory::FromStatus).string().not_null())
                    .col(ColumnDef::new(StatusHistory::ToStatus).string().not_null())
                    .col(ColumnDef::new(StatusHistory::ChangedBy).integer().not_null())
                    .col(ColumnDef::new(StatusHistory::Note).string())
                    .col(
                        ColumnDef::new(StatusHistory::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_status_history_publication")
                            .from(StatusHistory::Table, StatusHistory::PublicationId)
                            .to(Publications::Table, Publications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReviewActions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReviewActions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ReviewActions::PublicationId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ReviewActions::ReviewerId).integer().not_null())
                    .col(ColumnDef::new(ReviewActions::Decision).string().not_null())
                    .col(ColumnDef::new(ReviewActions::Note).string())
                    .col(
                        ColumnDef::new(ReviewActions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_actions_publication")
                            .from(ReviewActions::Table, ReviewActions::PublicationId)
                            .to(Publications::Table, Publications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReviewActions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StatusHistory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EditLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LoginLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Publications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FullName,
    Role,
    AvatarUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Persons {
    Table,
    Id,
    FullName,
    Email,
    Affiliation,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Venues {
    Table,
    Id,
    Name,
    Kind,
    Issn,
}

#[derive(DeriveIden)]
enum Publications {
    Table,
    Id,
    OwnerId,
    Title,
    Abstract,
    CategoryId,
    VenueId,
    Year,
    Status,
    Version,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    UserId,
    PublicationId,
    Message,
    IsRead,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LoginLogs {
    Table,
    Id,
    UserId,
    Username,
    Success,
    Ip,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EditLogs {
    Table,
    Id,
    PublicationId,
    Version,
    Field,
    OldValue,
    NewValue,
    EditedBy,
    EditedAt,
}

#[derive(DeriveIden)]
enum StatusHistory {
    Table,
    Id,
    PublicationId,
    FromStatus,
    ToStatus,
    ChangedBy,
    Note,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ReviewActions {
    Table,
    Id,
    PublicationId,
    ReviewerId,
    Decision,
    Note,
    CreatedAt,
}
