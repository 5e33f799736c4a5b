/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{encode_jwt, removal_cookie, session_cookie};
use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum_extra::extract::CookieJar;
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use solosphere_core::types::*;
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeTokenRequest {
    pub email: String,
}

pub async fn post_jwt(
    state: State<Arc<ServerState>>,
    jar: CookieJar,
    body: Result<Json<MakeTokenRequest>, JsonRejection>,
) -> WebResult<(CookieJar, Json<BaseResponse<String>>)> {
    let Json(body) = body?;

    if !EmailAddress::is_valid(body.email.as_str()) {
        return Err(WebError::invalid_email());
    }

    let token = encode_jwt(&state, &body.email).map_err(|e| {
        tracing::error!("Failed to generate token: {:#}", e);
        WebError::failed_to_generate_token()
    })?;

    let jar = jar.add(session_cookie(token, state.cli.cookie_secure));

    let res = BaseResponse {
        error: false,
        message: "Token issued".to_string(),
    };

    Ok((jar, Json(res)))
}

pub async fn get_logout(
    state: State<Arc<ServerState>>,
    jar: CookieJar,
) -> WebResult<(CookieJar, Json<BaseResponse<String>>)> {
    let jar = jar.add(removal_cookie(state.cli.cookie_secure));

    let res = BaseResponse {
        error: false,
        message: "Logout Successfully".to_string(),
    };

    Ok((jar, Json(res)))
}
