/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::jobs::JobResponse;
use crate::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BidStatus {
    #[default]
    Pending,
    InProgress,
    Complete,
    Rejected,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BidResponse {
    pub id: Uuid,
    pub email: String,
    pub price: f64,
    pub comment: String,
    pub deadline: DateTime<Utc>,
    pub job_id: Uuid,
    pub title: String,
    pub category: String,
    pub status: BidStatus,
    pub buyer: String,
    pub created_at: DateTime<Utc>,
}

/// What a seller offers on a job.
#[derive(Debug, Clone, PartialEq)]
pub struct BidOffer {
    pub price: f64,
    pub comment: String,
    /// Date the seller promises to deliver by.
    pub deadline: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidRejection {
    #[error("Action not permitted")]
    OwnJob,
    #[error("Deadline crossed, bidding forbidden!")]
    DeadlineCrossed,
    #[error("Offer less or at least equal to maximum price!")]
    AboveMaximumPrice,
    #[error("Offer a date within deadline!")]
    LateDelivery,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeBidRequest {
    pub email: String,
    pub price: f64,
    pub comment: String,
    pub deadline: DateTime<Utc>,
    #[serde(rename = "jobId")]
    pub job_id: Uuid,
    pub title: String,
    pub category: String,
    pub status: BidStatus,
    pub buyer: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct BidStatusRequest {
    pub status: BidStatus,
}

/// Checks an offer against the job before it is sent, first failing check wins.
pub fn validate_bid(
    bidder_email: &str,
    job: &JobResponse,
    offer: &BidOffer,
    now: DateTime<Utc>,
) -> Result<(), BidRejection> {
    if bidder_email == job.buyer.email {
        return Err(BidRejection::OwnJob);
    }

    if now > job.deadline {
        return Err(BidRejection::DeadlineCrossed);
    }

    if offer.price > job.max_price {
        return Err(BidRejection::AboveMaximumPrice);
    }

    if offer.deadline > job.deadline {
        return Err(BidRejection::LateDelivery);
    }

    Ok(())
}

pub async fn post_bid(
    config: &RequestConfig,
    bidder_email: &str,
    job: &JobResponse,
    offer: BidOffer,
) -> ConnectorResult<InsertResult> {
    validate_bid(bidder_email, job, &offer, Utc::now())?;

    let req = MakeBidRequest {
        email: bidder_email.to_string(),
        price: offer.price,
        comment: offer.comment,
        deadline: offer.deadline,
        job_id: job.id,
        title: job.title.clone(),
        category: job.category.clone(),
        status: BidStatus::Pending,
        buyer: job.buyer.email.clone(),
    };

    let res = get_client(config, &["add-bid"], RequestType::POST)
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

/// Bids placed by `email`, or with `buyer` set the bid requests on jobs `email` posted.
pub async fn get_my_bids(
    config: &RequestConfig,
    email: &str,
    buyer: bool,
) -> ConnectorResult<Vec<BidResponse>> {
    let mut req = get_client(config, &["my-bids", email], RequestType::GET);

    if buyer {
        req = req.query(&[("buyer", "true")]);
    }

    let res = req.send().await?;
    parse_response(res).await
}

pub async fn patch_bid_status(
    config: &RequestConfig,
    id: Uuid,
    status: BidStatus,
) -> ConnectorResult<UpdateResult> {
    let req = BidStatusRequest { status };

    let res = get_client(config, &["bid-status-update", &id.to_string()], RequestType::PATCH)
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}
