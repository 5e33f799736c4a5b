/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use anyhow::{Context, Result};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use solosphere_core::consts::{TOKEN_COOKIE, TOKEN_LIFETIME_DAYS};
use solosphere_core::types::*;
use std::sync::Arc;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub email: String,
}

impl Claims {
    /// Guarded routes only serve the resources of the user the token was issued to.
    pub fn ensure_owner(&self, email: &str) -> WebResult<()> {
        if self.email == email {
            Ok(())
        } else {
            tracing::warn!(claim = %self.email, requested = %email, "Forbidden access");
            Err(WebError::forbidden_access())
        }
    }
}

/// Rejects requests without a valid `token` cookie and hands the claims to the handler.
pub async fn authorize(
    state: State<Arc<ServerState>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> WebResult<Response> {
    let token = jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .ok_or_else(WebError::unauthorized_access)?;

    let token_data = decode_jwt(&state, token).map_err(|e| {
        tracing::debug!("Rejected token: {:#}", e);
        WebError::unauthorized_access()
    })?;

    req.extensions_mut().insert(token_data.claims);
    Ok(next.run(req).await)
}

pub fn encode_jwt(state: &ServerState, email: &str) -> Result<String> {
    let now = Utc::now();
    let expire = Duration::days(TOKEN_LIFETIME_DAYS);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;

    let claim = Claims {
        iat,
        exp,
        email: email.to_string(),
    };
    let secret = state.cli.jwt_secret()?;

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .context("Failed to encode token")
}

pub fn decode_jwt(state: &ServerState, jwt: &str) -> Result<TokenData<Claims>> {
    let secret = state.cli.jwt_secret()?;

    decode(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .context("Failed to decode token")
}

fn cookie_base(value: String, secure: bool) -> Cookie<'static> {
    // Cross-site deployments need SameSite=None, which browsers only accept on secure cookies.
    let same_site = if secure {
        SameSite::None
    } else {
        SameSite::Strict
    };

    Cookie::build((TOKEN_COOKIE, value))
        .http_only(true)
        .path("/")
        .secure(secure)
        .same_site(same_site)
        .build()
}

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    cookie_base(token, secure)
}

/// Expired empty `token` cookie, sent whether or not the request carried one.
pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = cookie_base(String::new(), secure);
    cookie.make_removal();
    cookie
}
