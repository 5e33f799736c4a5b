/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod bids;
pub mod consts;
pub mod database;
pub mod input;
pub mod jobs;
pub mod types;

use anyhow::Result;
use clap::Parser;
use database::connect_db;
use std::sync::Arc;
use types::*;

/// Parses the configuration, reading a `.env` file from the working directory first.
pub fn load_cli() -> Cli {
    dotenvy::dotenv().ok();
    Cli::parse()
}

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting SoloSphere Server on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
