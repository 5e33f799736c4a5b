/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct MakeTokenRequest {
    pub email: String,
}

/// Starts a session for `email`. The server answers with the `token` cookie,
/// which the client keeps for later requests.
pub async fn login(config: &RequestConfig, email: &str) -> ConnectorResult<String> {
    let req = MakeTokenRequest {
        email: email.to_string(),
    };

    let res = get_client(config, &["jwt"], RequestType::POST)
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn logout(config: &RequestConfig) -> ConnectorResult<String> {
    let res = get_client(config, &["logout"], RequestType::GET).send().await?;
    parse_response(res).await
}
