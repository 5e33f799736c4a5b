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
use serde::{Deserialize, Serialize};
use solosphere_core::input::validate_price_range;
use solosphere_core::jobs::{self, DeadlineOrder, JobFields, JobFilter, JobListing, Pagination};
use solosphere_core::types::*;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Buyer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub photo: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeJobRequest {
    pub title: String,
    pub category: String,
    pub deadline: DateTime<Utc>,
    pub min_price: f64,
    pub max_price: f64,
    #[serde(default)]
    pub description: String,
    pub buyer: Buyer,
}

impl MakeJobRequest {
    fn into_fields(self) -> WebResult<JobFields> {
        if self.title.trim().is_empty() {
            return Err(WebError::BadRequest("Job title cannot be empty".to_string()));
        }

        if self.buyer.email.trim().is_empty() {
            return Err(WebError::BadRequest("Buyer email is required".to_string()));
        }

        validate_price_range(self.min_price, self.max_price).map_err(WebError::BadRequest)?;

        Ok(JobFields {
            title: self.title,
            category: self.category,
            deadline: self.deadline,
            min_price: self.min_price,
            max_price: self.max_price,
            description: self.description,
            buyer_name: self.buyer.name,
            buyer_email: self.buyer.email,
            buyer_photo: self.buyer.photo,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JobResponse {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub deadline: DateTime<Utc>,
    pub min_price: f64,
    pub max_price: f64,
    pub description: String,
    pub buyer: Buyer,
    pub bid_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<MJob> for JobResponse {
    fn from(job: MJob) -> Self {
        JobResponse {
            id: job.id,
            title: job.title,
            category: job.category,
            deadline: job.deadline,
            min_price: job.min_price,
            max_price: job.max_price,
            description: job.description,
            buyer: Buyer {
                name: job.buyer_name,
                email: job.buyer_email,
                photo: job.buyer_photo,
            },
            bid_count: job.bid_count,
            created_at: job.created_at,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct AllJobsQuery {
    pub filter: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct JobsCountQuery {
    pub filter: Option<String>,
    pub search: Option<String>,
}

fn job_list(jobs: Vec<MJob>) -> Json<BaseResponse<Vec<JobResponse>>> {
    Json(BaseResponse {
        error: false,
        message: jobs.into_iter().map(JobResponse::from).collect(),
    })
}

pub async fn post_job(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeJobRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<InsertResult>>> {
    let Json(body) = body?;
    let job = jobs::insert_job(&state.db, body.into_fields()?).await?;

    let res = BaseResponse {
        error: false,
        message: InsertResult {
            inserted_id: job.id,
        },
    };

    Ok(Json(res))
}

pub async fn get_jobs(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<JobResponse>>>> {
    Ok(job_list(jobs::get_jobs(&state.db).await?))
}

pub async fn get_jobs_by_buyer(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    email: Result<Path<String>, PathRejection>,
) -> WebResult<Json<BaseResponse<Vec<JobResponse>>>> {
    let Path(email) = email?;
    claims.ensure_owner(&email)?;

    Ok(job_list(jobs::get_jobs_by_buyer(&state.db, &email).await?))
}

pub async fn get_job(
    state: State<Arc<ServerState>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> WebResult<Json<BaseResponse<JobResponse>>> {
    let Path(id) = id?;
    let job = jobs::get_job(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Job"))?;

    let res = BaseResponse {
        error: false,
        message: job.into(),
    };

    Ok(Json(res))
}

pub async fn put_job(
    state: State<Arc<ServerState>>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<MakeJobRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<UpdateResult>>> {
    let Path(id) = id?;
    let Json(body) = body?;
    let result = jobs::upsert_job(&state.db, id, body.into_fields()?).await?;

    let res = BaseResponse {
        error: false,
        message: result,
    };

    Ok(Json(res))
}

pub async fn delete_job(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<Uuid>, PathRejection>,
) -> WebResult<Json<BaseResponse<DeleteResult>>> {
    let Path(id) = id?;
    let job = jobs::get_job(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Job"))?;

    claims.ensure_owner(&job.buyer_email)?;

    let result = jobs::delete_job(&state.db, job.id).await?;
    tracing::info!(job = %id, buyer = %claims.email, "Job deleted");

    let res = BaseResponse {
        error: false,
        message: result,
    };

    Ok(Json(res))
}

pub async fn get_all_jobs(
    state: State<Arc<ServerState>>,
    query: Result<Query<AllJobsQuery>, QueryRejection>,
) -> WebResult<Json<BaseResponse<Vec<JobResponse>>>> {
    let Query(query) = query?;
    let listing = JobListing {
        filter: JobFilter::new(query.filter, query.search),
        order: DeadlineOrder::parse(query.sort),
        pagination: Pagination::new(query.page, query.size).map_err(WebError::BadRequest)?,
    };

    Ok(job_list(jobs::list_jobs(&state.db, &listing).await?))
}

pub async fn get_jobs_count(
    state: State<Arc<ServerState>>,
    query: Result<Query<JobsCountQuery>, QueryRejection>,
) -> WebResult<Json<BaseResponse<CountResult>>> {
    let Query(query) = query?;
    let filter = JobFilter::new(query.filter, query.search);
    let count = jobs::count_jobs(&state.db, &filter).await?;

    let res = BaseResponse {
        error: false,
        message: CountResult { count },
    };

    Ok(Json(res))
}
