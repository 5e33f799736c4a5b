/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Job::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Job::Title).string().not_null())
                    .col(ColumnDef::new(Job::Category).string().not_null())
                    .col(
                        ColumnDef::new(Job::Deadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Job::MinPrice).double().not_null())
                    .col(ColumnDef::new(Job::MaxPrice).double().not_null())
                    .col(ColumnDef::new(Job::Description).text().not_null())
                    .col(ColumnDef::new(Job::BuyerName).string().not_null())
                    .col(ColumnDef::new(Job::BuyerEmail).string().not_null())
                    .col(ColumnDef::new(Job::BuyerPhoto).string().not_null())
                    .col(
                        ColumnDef::new(Job::BidCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Job::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-job-buyer_email")
                    .table(Job::Table)
                    .col(Job::BuyerEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-job-category-deadline")
                    .table(Job::Table)
                    .col(Job::Category)
                    .col(Job::Deadline)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Job {
    Table,
    Id,
    Title,
    Category,
    Deadline,
    MinPrice,
    MaxPrice,
    Description,
    BuyerName,
    BuyerEmail,
    BuyerPhoto,
    BidCount,
    CreatedAt,
}
