/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for bid entity

use chrono::{TimeZone, Utc};
use entity::bid::BidStatus;
use entity::*;
use sea_orm::{ActiveEnum, DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_bid_entity_by_bidder() -> Result<(), DbErr> {
    let job_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![bid::Model {
            id: Uuid::new_v4(),
            email: "seller@example.com".to_owned(),
            price: 180.0,
            comment: "Done within a week".to_owned(),
            deadline: Utc.with_ymd_and_hms(2026, 11, 20, 0, 0, 0).unwrap(),
            job_id,
            title: "Logo design".to_owned(),
            category: "Graphics Design".to_owned(),
            status: BidStatus::Pending,
            buyer: "buyer@example.com".to_owned(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 2, 0, 0, 0).unwrap(),
        }]])
        .into_connection();

    let bids = bid::Entity::find()
        .filter(bid::Column::Email.eq("seller@example.com"))
        .all(&db)
        .await?;

    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0].job_id, job_id);
    assert_eq!(bids[0].status, BidStatus::Pending);

    Ok(())
}

#[test]
fn test_bid_status_values() {
    assert_eq!(BidStatus::Pending.to_value(), 0);
    assert_eq!(BidStatus::InProgress.to_value(), 1);
    assert_eq!(BidStatus::Complete.to_value(), 2);
    assert_eq!(BidStatus::Rejected.to_value(), 3);
    assert_eq!(BidStatus::default(), BidStatus::Pending);
}

#[test]
fn test_bid_status_serialization() {
    assert_eq!(
        serde_json::to_string(&BidStatus::InProgress).unwrap(),
        "\"in-progress\""
    );

    let status: BidStatus = serde_json::from_str("\"rejected\"").unwrap();
    assert_eq!(status, BidStatus::Rejected);

    assert!(serde_json::from_str::<BidStatus>("\"accepted\"").is_err());
}
