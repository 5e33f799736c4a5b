/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use anyhow::{Context, Result};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, patch, post, put};
use axum::{Router, middleware};
use endpoints::{auth, bids, jobs};
use solosphere_core::types::{Cli, ServerState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn cors_layer(cli: &Cli) -> Result<CorsLayer> {
    let origins = cli
        .cors_origin
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true))
}

pub fn create_router(state: Arc<ServerState>) -> Result<Router> {
    let cors = cors_layer(&state.cli)?;
    let guard = middleware::from_fn_with_state(Arc::clone(&state), authorization::authorize);

    let app = Router::new()
        .route("/", get(endpoints::get_health))
        .route("/jwt", post(auth::post_jwt))
        .route("/logout", get(auth::get_logout))
        .route("/add-job", post(jobs::post_job))
        .route("/jobs", get(jobs::get_jobs))
        .route(
            "/jobs/{email}",
            get(jobs::get_jobs_by_buyer).route_layer(guard.clone()),
        )
        .route(
            "/job/{id}",
            get(jobs::get_job).merge(delete(jobs::delete_job).route_layer(guard.clone())),
        )
        .route("/update-job/{id}", put(jobs::put_job))
        .route("/all-jobs", get(jobs::get_all_jobs))
        .route("/jobs-count", get(jobs::get_jobs_count))
        .route("/add-bid", post(bids::post_bid))
        .route(
            "/my-bids/{email}",
            get(bids::get_my_bids).route_layer(guard),
        )
        .route("/bid-status-update/{id}", patch(bids::patch_bid_status))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(app)
}

pub async fn serve_web(state: Arc<ServerState>) -> Result<()> {
    // Tokens cannot be issued or checked without a secret.
    state.cli.jwt_secret()?;

    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state)?;

    let listener = TcpListener::bind(&server_url)
        .await
        .with_context(|| format!("Failed to bind {}", server_url))?;
    tracing::info!("SoloSphere Server is running on {}", server_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal");
}
