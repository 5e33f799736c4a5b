/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Buyer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub photo: String,
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

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MakeJobRequest {
    pub title: String,
    pub category: String,
    pub deadline: DateTime<Utc>,
    pub min_price: f64,
    pub max_price: f64,
    pub description: String,
    pub buyer: Buyer,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "dsc")]
    Descending,
}

/// Query of the paginated job listing. Unset fields are left out of the URL.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct JobQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
struct JobsCountQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<&'a str>,
}

pub async fn post_job(config: &RequestConfig, req: &MakeJobRequest) -> ConnectorResult<InsertResult> {
    let res = get_client(config, &["add-job"], RequestType::POST)
        .json(req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get_jobs(config: &RequestConfig) -> ConnectorResult<Vec<JobResponse>> {
    let res = get_client(config, &["jobs"], RequestType::GET).send().await?;
    parse_response(res).await
}

/// Jobs posted by `email`. Requires a session for the same email.
pub async fn get_jobs_by_buyer(
    config: &RequestConfig,
    email: &str,
) -> ConnectorResult<Vec<JobResponse>> {
    let res = get_client(config, &["jobs", email], RequestType::GET)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get_job(config: &RequestConfig, id: Uuid) -> ConnectorResult<JobResponse> {
    let res = get_client(config, &["job", &id.to_string()], RequestType::GET)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn put_job(
    config: &RequestConfig,
    id: Uuid,
    req: &MakeJobRequest,
) -> ConnectorResult<UpdateResult> {
    let res = get_client(config, &["update-job", &id.to_string()], RequestType::PUT)
        .json(req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn delete_job(config: &RequestConfig, id: Uuid) -> ConnectorResult<DeleteResult> {
    let res = get_client(config, &["job", &id.to_string()], RequestType::DELETE)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get_all_jobs(
    config: &RequestConfig,
    query: &JobQuery,
) -> ConnectorResult<Vec<JobResponse>> {
    let res = get_client(config, &["all-jobs"], RequestType::GET)
        .query(query)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get_jobs_count(
    config: &RequestConfig,
    filter: Option<&str>,
    search: Option<&str>,
) -> ConnectorResult<u64> {
    let query = JobsCountQuery { filter, search };

    let res = get_client(config, &["jobs-count"], RequestType::GET)
        .query(&query)
        .send()
        .await?;

    let count: CountResult = parse_response(res).await?;
    Ok(count.count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_query_skips_unset_fields() {
        let query = JobQuery {
            search: Some("design".to_string()),
            sort: Some(SortOrder::Descending),
            page: Some(2),
            size: Some(6),
            ..Default::default()
        };

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "search": "design", "sort": "dsc", "page": 2, "size": 6 })
        );
    }
}
