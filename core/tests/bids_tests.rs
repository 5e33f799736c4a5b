/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for bid placement and bid queries

use chrono::{TimeZone, Utc};
use entity::bid::BidStatus;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use solosphere_core::bids::*;
use uuid::Uuid;

fn sample_bid(job_id: Uuid) -> BidFields {
    BidFields {
        email: "seller@example.com".to_string(),
        price: 180.0,
        comment: "Can start tomorrow".to_string(),
        deadline: Utc.with_ymd_and_hms(2026, 11, 20, 0, 0, 0).unwrap(),
        job_id,
        title: "Logo design".to_string(),
        category: "Graphics Design".to_string(),
        status: BidStatus::Pending,
        buyer: "buyer@example.com".to_string(),
    }
}

fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

#[tokio::test]
async fn test_place_bid_increments_bid_count_once() -> Result<(), DbErr> {
    let job_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec(1), exec(1)])
        .into_connection();

    let placement = place_bid(&db, sample_bid(job_id)).await?;
    assert!(matches!(placement, BidPlacement::Placed(_)));

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("ON CONFLICT"));
    assert!(log.contains("DO NOTHING"));
    assert_eq!(log.matches("UPDATE").count(), 1);
    assert!(log.contains("+ $1"));

    Ok(())
}

#[tokio::test]
async fn test_second_identical_bid_is_rejected() -> Result<(), DbErr> {
    let job_id = Uuid::new_v4();

    // The second insert hits the unique (email, job_id) index and inserts nothing.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec(1), exec(1), exec(0)])
        .into_connection();

    let first = place_bid(&db, sample_bid(job_id)).await?;
    let second = place_bid(&db, sample_bid(job_id)).await?;

    assert!(matches!(first, BidPlacement::Placed(_)));
    assert_eq!(second, BidPlacement::AlreadyExists);

    let log = format!("{:?}", db.into_transaction_log());
    assert_eq!(log.matches("UPDATE").count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_update_bid_status() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec(1), exec(0)])
        .into_connection();

    let updated = update_bid_status(&db, Uuid::new_v4(), BidStatus::InProgress).await?;
    assert_eq!(updated.matched_count, 1);
    assert_eq!(updated.modified_count, 1);

    let missing = update_bid_status(&db, Uuid::new_v4(), BidStatus::Rejected).await?;
    assert_eq!(missing.matched_count, 0);

    Ok(())
}

#[tokio::test]
async fn test_get_bids_by_role() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::bid::Model>::new(), Vec::new()])
        .into_connection();

    get_bids(&db, "seller@example.com", BidRole::Bidder).await?;
    get_bids(&db, "buyer@example.com", BidRole::Buyer).await?;

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains(r#"\"bid\".\"email\" = $1"#));
    assert!(log.contains(r#"\"bid\".\"buyer\" = $1"#));

    Ok(())
}
