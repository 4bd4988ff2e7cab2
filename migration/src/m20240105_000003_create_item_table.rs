use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240105_000001_create_user_table::User,
    m20240105_000002_create_item_request_table::ItemRequest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(string(Item::Name))
                    .col(text(Item::Description))
                    .col(boolean(Item::Available))
                    .col(integer(Item::OwnerId))
                    .col(integer_null(Item::RequestId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_owner_id")
                            .from(Item::Table, Item::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_request_id")
                            .from(Item::Table, Item::RequestId)
                            .to(ItemRequest::Table, ItemRequest::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_item_owner_id")
                    .table(Item::Table)
                    .col(Item::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Item {
    #[sea_orm(iden = "items")]
    Table,
    Id,
    Name,
    Description,
    Available,
    OwnerId,
    RequestId,
}
