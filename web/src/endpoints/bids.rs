/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::Claims;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use entity::bid::BidStatus;
use serde::{Deserialize, Serialize};
use solosphere_core::bids::{self, BidFields, BidPlacement, BidRole};
use solosphere_core::types::*;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeBidRequest {
    pub email: String,
    pub price: f64,
    #[serde(default)]
    pub comment: String,
    pub deadline: DateTime<Utc>,
    #[serde(alias = "jobId")]
    pub job_id: Uuid,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub status: BidStatus,
    pub buyer: String,
}

impl From<MakeBidRequest> for BidFields {
    fn from(body: MakeBidRequest) -> Self {
        BidFields {
            email: body.email,
            price: body.price,
            comment: body.comment,
            deadline: body.deadline,
            job_id: body.job_id,
            title: body.title,
            category: body.category,
            status: body.status,
            buyer: body.buyer,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct MyBidsQuery {
    pub buyer: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BidStatusRequest {
    pub status: BidStatus,
}

pub async fn post_bid(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeBidRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<InsertResult>>> {
    let Json(body) = body?;

    if body.email.trim().is_empty() {
        return Err(WebError::BadRequest("Bidder email is required".to_string()));
    }

    match bids::place_bid(&state.db, body.into()).await? {
        BidPlacement::Placed(result) => Ok(Json(BaseResponse {
            error: false,
            message: result,
        })),
        BidPlacement::AlreadyExists => Err(WebError::already_bid()),
    }
}

pub async fn get_my_bids(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    email: Result<Path<String>, PathRejection>,
    query: Result<Query<MyBidsQuery>, QueryRejection>,
) -> WebResult<Json<BaseResponse<Vec<MBid>>>> {
    let Path(email) = email?;
    let Query(query) = query?;
    claims.ensure_owner(&email)?;

    let role = if query.buyer.unwrap_or(false) {
        BidRole::Buyer
    } else {
        BidRole::Bidder
    };

    let res = BaseResponse {
        error: false,
        message: bids::get_bids(&state.db, &email, role).await?,
    };

    Ok(Json(res))
}

pub async fn patch_bid_status(
    state: State<Arc<ServerState>>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<BidStatusRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<UpdateResult>>> {
    let Path(id) = id?;
    let Json(body) = body?;

    let res = BaseResponse {
        error: false,
        message: bids::update_bid_status(&state.db, id, body.status).await?,
    };

    Ok(Json(res))
}
