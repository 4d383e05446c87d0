//! Create `products` table.
//! `category_id` is a nullable reference to `categories`; deleting a category
//! does not cascade.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(string_len(Products::Id, 255).primary_key())
                    .col(string_len(Products::Name, 255).not_null())
                    .col(double(Products::Price).not_null())
                    .col(integer(Products::Quantity).not_null())
                    .col(integer_null(Products::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category")
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Price,
    Quantity,
    CategoryId,
}

#[derive(DeriveIden)]
enum Categories { Table, Id }
