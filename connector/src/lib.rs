/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod bids;
pub mod jobs;

use bids::BidRejection;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The server refused the session cookie. Log in again via [`auth::login`].
    #[error("session expired, please log in again")]
    SessionExpired,
    #[error("server responded with {status}: {message}")]
    Api { status: u16, message: String },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unreadable response: {0}")]
    Decode(String),
    #[error(transparent)]
    BidRejected(#[from] BidRejection),
    #[error("invalid server url: {0}")]
    InvalidUrl(String),
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Connection to a SoloSphere server. Clones share the cookie store, so a
/// session started with [`auth::login`] is used by every request.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: Url,
    client: reqwest::Client,
}

impl RequestConfig {
    pub fn new(server_url: &str) -> ConnectorResult<Self> {
        let server_url =
            Url::parse(server_url).map_err(|e| ConnectorError::InvalidUrl(e.to_string()))?;

        if server_url.cannot_be_a_base() {
            return Err(ConnectorError::InvalidUrl(format!(
                "{} cannot carry a path",
                server_url
            )));
        }

        let client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(RequestConfig { server_url, client })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InsertResult {
    pub inserted_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub deleted_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountResult {
    pub count: u64,
}

pub type RequestType = reqwest::Method;

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> ConnectorResult<T> {
    let status = res.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ConnectorError::SessionExpired);
    }

    let bytes = res.bytes().await?;

    if !status.is_success() {
        let message = match serde_json::from_slice::<BaseResponse<String>>(&bytes) {
            Ok(error_res) => error_res.message,
            Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
        };

        return Err(ConnectorError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice::<BaseResponse<T>>(&bytes)
        .map(|parsed_res| parsed_res.message)
        .map_err(|e| ConnectorError::Decode(e.to_string()))
}

/// Builds a request below the server url. Each segment is percent-encoded on
/// its own, so user input such as an email cannot leak into the query or fragment.
fn get_client(
    config: &RequestConfig,
    segments: &[&str],
    request_type: RequestType,
) -> reqwest::RequestBuilder {
    let mut url = config.server_url.clone();

    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }

    config.client.request(request_type, url)
}

pub async fn health(config: &RequestConfig) -> ConnectorResult<String> {
    let res = get_client(config, &[], RequestType::GET).send().await?;
    parse_response(res).await
}
