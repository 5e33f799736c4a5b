/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use web::authorization::{Claims, decode_jwt};
use web::endpoints::auth::*;

fn signed_cookie(claims: &Claims, secret: &str) -> HeaderValue {
    let token = encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();

    HeaderValue::from_str(&format!("token={}", token)).unwrap()
}

#[test]
fn test_make_token_request_serialization() {
    let request = MakeTokenRequest {
        email: "seller@example.com".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert_eq!(json, r#"{"email":"seller@example.com"}"#);
}

#[tokio::test]
async fn test_issue_token_sets_cookie() {
    let (server, state) = common::create_server(common::empty_db());

    let response = server
        .post("/jwt")
        .json(&json!({ "email": common::SELLER_EMAIL }))
        .await;

    response.assert_status_ok();

    let set_cookie = response.header(SET_COOKIE);
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("SameSite=Strict"));
    assert!(!set_cookie.contains("Secure"));

    let token = set_cookie
        .trim_start_matches("token=")
        .split(';')
        .next()
        .unwrap();
    let claims = decode_jwt(&state, token).unwrap().claims;
    assert_eq!(claims.email, common::SELLER_EMAIL);

    let lifetime = claims.exp - claims.iat;
    assert_eq!(lifetime, 365 * 24 * 60 * 60);
}

#[tokio::test]
async fn test_issue_token_rejects_invalid_email() {
    let (server, _) = common::create_server(common::empty_db());

    let response = server
        .post("/jwt")
        .json(&json!({ "email": "not-an-email" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "Invalid Email");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let (server, state) = common::create_server(common::empty_db());

    let response = server
        .get("/logout")
        .add_header(COOKIE, common::token_cookie(&state, common::SELLER_EMAIL))
        .await;

    response.assert_status_ok();

    let set_cookie = response.header(SET_COOKIE);
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.starts_with("token=;"));
    assert!(set_cookie.contains("Max-Age=0"));

    let body: Value = response.json();
    assert_eq!(body["message"], "Logout Successfully");
}

#[tokio::test]
async fn test_guarded_route_without_cookie() {
    let (server, _) = common::create_server(common::empty_db());

    for path in [
        "/jobs/seller@example.com",
        "/my-bids/seller@example.com",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let body: Value = response.json();
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "Unauthorized access");
    }

    let response = server
        .delete("/job/7b0f6a8e-2c1d-4f59-9a57-3f2a2d1c0b11")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guarded_route_with_wrongly_signed_token() {
    let (server, _) = common::create_server(common::empty_db());
    let now = Utc::now();

    let claims = Claims {
        exp: (now + Duration::days(1)).timestamp() as usize,
        iat: now.timestamp() as usize,
        email: common::SELLER_EMAIL.to_string(),
    };

    let response = server
        .get("/jobs/seller@example.com")
        .add_header(COOKIE, signed_cookie(&claims, "another_secret"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guarded_route_with_expired_token() {
    let (server, _) = common::create_server(common::empty_db());
    let now = Utc::now();

    let claims = Claims {
        exp: (now - Duration::days(1)).timestamp() as usize,
        iat: (now - Duration::days(2)).timestamp() as usize,
        email: common::SELLER_EMAIL.to_string(),
    };

    let response = server
        .get("/jobs/seller@example.com")
        .add_header(COOKIE, signed_cookie(&claims, "test_jwt"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guarded_route_with_foreign_email() {
    let (server, state) = common::create_server(common::empty_db());

    let response = server
        .get("/my-bids/buyer@example.com")
        .add_header(COOKIE, common::token_cookie(&state, common::SELLER_EMAIL))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    let body: Value = response.json();
    assert_eq!(body["message"], "Forbidden access");
}

#[test]
fn test_claims_ensure_owner() {
    let claims = Claims {
        exp: 0,
        iat: 0,
        email: common::SELLER_EMAIL.to_string(),
    };

    assert!(claims.ensure_owner(common::SELLER_EMAIL).is_ok());
    assert!(claims.ensure_owner(common::BUYER_EMAIL).is_err());
}
