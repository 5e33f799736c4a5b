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
                    .table(Bid::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bid::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bid::Email).string().not_null())
                    .col(ColumnDef::new(Bid::Price).double().not_null())
                    .col(ColumnDef::new(Bid::Comment).text().not_null())
                    .col(
                        ColumnDef::new(Bid::Deadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bid::JobId).uuid().not_null())
                    .col(ColumnDef::new(Bid::Title).string().not_null())
                    .col(ColumnDef::new(Bid::Category).string().not_null())
                    .col(
                        ColumnDef::new(Bid::Status)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Bid::Buyer).string().not_null())
                    .col(
                        ColumnDef::new(Bid::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One bid per bidder and job; placing a bid relies on this for ON CONFLICT.
        manager
            .create_index(
                Index::create()
                    .name("idx-bid-email-job_id")
                    .table(Bid::Table)
                    .col(Bid::Email)
                    .col(Bid::JobId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-bid-buyer")
                    .table(Bid::Table)
                    .col(Bid::Buyer)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bid::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bid {
    Table,
    Id,
    Email,
    Price,
    Comment,
    Deadline,
    JobId,
    Title,
    Category,
    Status,
    Buyer,
    CreatedAt,
}
