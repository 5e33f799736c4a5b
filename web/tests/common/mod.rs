/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum::http::HeaderValue;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use solosphere_core::types::*;
use std::sync::Arc;
use uuid::Uuid;

pub const BUYER_EMAIL: &str = "buyer@example.com";
pub const SELLER_EMAIL: &str = "seller@example.com";

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 9000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret: Some("test_jwt".to_string()),
        jwt_secret_file: None,
        cors_origin: vec!["http://localhost:5173".to_string()],
        cookie_secure: false,
    }
}

pub fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

pub fn create_mock_state(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
    })
}

pub fn create_server(db: DatabaseConnection) -> (TestServer, Arc<ServerState>) {
    let state = create_mock_state(db);
    let app = web::create_router(Arc::clone(&state)).unwrap();
    (TestServer::new(app).unwrap(), state)
}

pub fn token_cookie(state: &ServerState, email: &str) -> HeaderValue {
    let token = web::authorization::encode_jwt(state, email).unwrap();
    HeaderValue::from_str(&format!("token={}", token)).unwrap()
}

pub fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

pub fn sample_job(id: Uuid, buyer_email: &str) -> MJob {
    MJob {
        id,
        title: "Landing page design".to_string(),
        category: "Web Development".to_string(),
        deadline: Utc.with_ymd_and_hms(2026, 12, 1, 0, 0, 0).unwrap(),
        min_price: 200.0,
        max_price: 450.0,
        description: "Responsive landing page".to_string(),
        buyer_name: "Alex Buyer".to_string(),
        buyer_email: buyer_email.to_string(),
        buyer_photo: "https://example.com/buyer.png".to_string(),
        bid_count: 0,
        created_at: Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
    }
}
