/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, Utc};
use entity::bid::BidStatus;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveEnum, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use uuid::Uuid;

use super::types::*;

#[derive(Debug, Clone, PartialEq)]
pub struct BidFields {
    pub email: String,
    pub price: f64,
    pub comment: String,
    pub deadline: DateTime<Utc>,
    pub job_id: Uuid,
    pub title: String,
    pub category: String,
    pub status: BidStatus,
    pub buyer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BidPlacement {
    Placed(InsertResult),
    AlreadyExists,
}

/// Which side of the bids a user asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidRole {
    /// Bids the user placed.
    Bidder,
    /// Bids placed on the user's jobs.
    Buyer,
}

/// Inserts the bid and bumps the job's `bid_count` in one transaction.
///
/// The insert is conditional on the unique `(email, job_id)` index, so two
/// concurrent submissions of the same bid cannot both succeed and the counter
/// is only incremented for the one that did.
pub async fn place_bid(db: &DatabaseConnection, fields: BidFields) -> Result<BidPlacement, DbErr> {
    let txn = db.begin().await?;

    let bid_id = Uuid::new_v4();
    let job_id = fields.job_id;
    let email = fields.email.clone();

    let abid = ABid {
        id: Set(bid_id),
        email: Set(fields.email),
        price: Set(fields.price),
        comment: Set(fields.comment),
        deadline: Set(fields.deadline),
        job_id: Set(fields.job_id),
        title: Set(fields.title),
        category: Set(fields.category),
        status: Set(fields.status),
        buyer: Set(fields.buyer),
        created_at: Set(Utc::now()),
    };

    let inserted = EBid::insert(abid)
        .on_conflict(
            OnConflict::columns([CBid::Email, CBid::JobId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await;

    match inserted {
        Ok(0) | Err(DbErr::RecordNotInserted) => {
            txn.rollback().await?;
            tracing::warn!(job = %job_id, bidder = %email, "Duplicate bid rejected");
            return Ok(BidPlacement::AlreadyExists);
        }
        Ok(_) => {}
        Err(e) => return Err(e),
    }

    EJob::update_many()
        .col_expr(CJob::BidCount, Expr::col(CJob::BidCount).add(1))
        .filter(CJob::Id.eq(job_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    tracing::info!(bid = %bid_id, job = %job_id, bidder = %email, "Bid placed");
    Ok(BidPlacement::Placed(InsertResult {
        inserted_id: bid_id,
    }))
}

pub async fn get_bids(
    db: &DatabaseConnection,
    email: &str,
    role: BidRole,
) -> Result<Vec<MBid>, DbErr> {
    let column = match role {
        BidRole::Bidder => CBid::Email,
        BidRole::Buyer => CBid::Buyer,
    };

    EBid::find()
        .filter(column.eq(email))
        .order_by_desc(CBid::CreatedAt)
        .all(db)
        .await
}

pub async fn update_bid_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: BidStatus,
) -> Result<UpdateResult, DbErr> {
    let result = EBid::update_many()
        .col_expr(CBid::Status, Expr::value(status.to_value()))
        .filter(CBid::Id.eq(id))
        .exec(db)
        .await?;

    tracing::debug!(bid = %id, status = ?status, "Bid status updated");
    Ok(UpdateResult {
        matched_count: result.rows_affected,
        modified_count: result.rows_affected,
        upserted_id: None,
    })
}
