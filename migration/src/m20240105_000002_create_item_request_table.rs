use sea_orm_migration::{prelude::*, schema::*};

use super::m20240105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemRequest::Id))
                    .col(text(ItemRequest::Description))
                    .col(integer(ItemRequest::RequestorId))
                    .col(
                        timestamp(ItemRequest::Created)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_request_requestor_id")
                            .from(ItemRequest::Table, ItemRequest::RequestorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_item_request_requestor_created")
                    .table(ItemRequest::Table)
                    .col(ItemRequest::RequestorId)
                    .col(ItemRequest::Created)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ItemRequest {
    #[sea_orm(iden = "item_requests")]
    Table,
    Id,
    Description,
    RequestorId,
    Created,
}
