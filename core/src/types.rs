/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{load_secret, port_in_range};
use anyhow::{Result, bail};
use clap::Parser;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use entity::*;

#[derive(Parser, Debug, Clone)]
#[command(name = "SoloSphere", display_name = "SoloSphere", bin_name = "solosphere-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "SOLOSPHERE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "SOLOSPHERE_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "SOLOSPHERE_PORT", value_parser = port_in_range, default_value_t = 9000)]
    pub port: u16,
    #[arg(long, env = "SOLOSPHERE_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "SOLOSPHERE_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "SOLOSPHERE_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,
    #[arg(long, env = "SOLOSPHERE_JWT_SECRET_FILE")]
    pub jwt_secret_file: Option<String>,
    #[arg(
        long,
        env = "SOLOSPHERE_CORS_ORIGIN",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub cors_origin: Vec<String>,
    #[arg(long, env = "SOLOSPHERE_COOKIE_SECURE", default_value = "false")]
    pub cookie_secure: bool,
}

impl Cli {
    pub fn database_url(&self) -> Result<String> {
        if let Some(file) = &self.database_url_file {
            load_secret(file)
        } else if let Some(url) = &self.database_url {
            Ok(url.clone())
        } else {
            bail!("No database url provided")
        }
    }

    pub fn jwt_secret(&self) -> Result<String> {
        if let Some(file) = &self.jwt_secret_file {
            load_secret(file)
        } else if let Some(secret) = self.jwt_secret.as_ref().filter(|s| !s.is_empty()) {
            Ok(secret.clone())
        } else {
            bail!("No JWT secret provided")
        }
    }
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
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

pub type EBid = bid::Entity;
pub type EJob = job::Entity;

pub type MBid = bid::Model;
pub type MJob = job::Model;

pub type ABid = bid::ActiveModel;
pub type AJob = job::ActiveModel;

pub type CBid = bid::Column;
pub type CJob = job::Column;
