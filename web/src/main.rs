//! Resume manager
//!
//! Signed-in users keep resumes, each a list of positions held over time.
//! Pages are rendered on the server from embedded templates.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{middleware, response::Redirect, routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod forms;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    ensure_schema, MiniJinjaRenderer, PostgresResumeItemRepository, PostgresResumeRepository,
};
use app::ResumeService;
use config::Config;
use domain::ports::Renderer;

/// Application state shared across all handlers
///
/// Ports are held as trait objects so the router can be driven with
/// in-memory adapters in tests.
#[derive(Clone)]
pub struct AppState {
    pub resume_service: Arc<ResumeService>,
    pub renderer: Arc<dyn Renderer>,
    pub login_url: String,
    pub auth_user_header: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    // Every resume page requires a signed-in user
    let resume_routes = Router::new()
        .route("/resumes/", get(handlers::list_resumes))
        .route(
            "/resumes/new/",
            get(handlers::new_resume_form).post(handlers::create_resume),
        )
        .route("/resumes/:id/", get(handlers::view_resume))
        .route(
            "/resumes/:id/edit/",
            get(handlers::edit_resume_form).post(handlers::rename_resume),
        )
        .route(
            "/resumes/:id/items/new/",
            get(handlers::new_item_form).post(handlers::create_item),
        )
        .route(
            "/resumes/:id/items/:item_id/edit/",
            get(handlers::edit_item_form).post(handlers::submit_item_edit),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::login_required,
        ));

    Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        .route("/", get(|| async { Redirect::to("/resumes/") }))
        .merge(resume_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,resume_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting resume manager...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.run_migrations {
        ensure_schema(&db)
            .await
            .context("Failed to create database schema")?;
    }

    // Create adapters
    let resume_repo = Arc::new(PostgresResumeRepository::new(db.clone()));
    let item_repo = Arc::new(PostgresResumeItemRepository::new(db));
    let renderer = Arc::new(MiniJinjaRenderer::new().context("Failed to load templates")?);

    if config.enforce_ownership {
        tracing::info!("Ownership enforcement enabled");
    }

    // Create application services
    let resume_service = Arc::new(
        ResumeService::new(resume_repo, item_repo)
            .with_ownership_enforcement(config.enforce_ownership),
    );

    let state = AppState {
        resume_service,
        renderer,
        login_url: config.login_url.clone(),
        auth_user_header: config.auth_user_header.clone(),
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
