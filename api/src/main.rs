//! Recipe API Server
//!
//! Lets users save favourite recipes and attach notes to them.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresNoteRepository, PostgresRecipeRepository, PostgresUserRepository};
use app::{FavouriteService, NoteService, UserService};
use config::Config;
use domain::ports::{NoteRepository, RecipeRepository, UserRepository};

/// Application state shared across all handlers
///
/// Services are built over trait objects so the same router runs on the
/// PostgreSQL adapters and on the in-memory test repositories.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn UserRepository>>,
    pub favourite_service: Arc<FavouriteService<dyn UserRepository, dyn RecipeRepository>>,
    pub note_service:
        Arc<NoteService<dyn UserRepository, dyn RecipeRepository, dyn NoteRepository>>,
    pub config: Config,
}

impl AppState {
    /// Wire services over the given repositories
    pub fn new(
        users: Arc<dyn UserRepository>,
        recipes: Arc<dyn RecipeRepository>,
        notes: Arc<dyn NoteRepository>,
        config: Config,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users.clone())),
            favourite_service: Arc::new(FavouriteService::new(users.clone(), recipes.clone())),
            note_service: Arc::new(NoteService::new(users, recipes, notes)),
            config,
        }
    }
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

/// Build the HTTP router
pub fn router(state: AppState) -> anyhow::Result<Router> {
    // Sign-in creates rows, so it is the one route worth rate limiting
    let mut sign_in_routes = Router::new().route("/users", post(handlers::add_user));

    if state.config.rate_limit_enabled {
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(state.config.rate_limit_per_second)
                .burst_size(state.config.rate_limit_burst)
                .finish()
                .context("Invalid rate limit configuration")?,
        );
        sign_in_routes = sign_in_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let app = Router::new()
        .route("/health", get(health))
        // Favourites
        .route("/favourites", post(handlers::add_favourite))
        .route("/favourites/:recipe_id", get(handlers::get_favourite))
        .route("/users/:user_id/favourites", get(handlers::list_favourites))
        .route(
            "/users/:user_id/favourites/:recipe_id",
            delete(handlers::remove_favourite),
        )
        // Notes
        .route("/notes", post(handlers::add_note))
        .route(
            "/notes/:note_id",
            get(handlers::get_note).delete(handlers::remove_note),
        )
        .route(
            "/users/:user_id/recipes/:recipe_id/notes",
            get(handlers::get_notes),
        )
        .merge(sign_in_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recipe_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Recipe API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let user_repo = Arc::new(PostgresUserRepository::new(db.clone()));
    let recipe_repo = Arc::new(PostgresRecipeRepository::new(db.clone()));
    let note_repo = Arc::new(PostgresNoteRepository::new(db));

    let state = AppState::new(user_repo, recipe_repo, note_repo, config.clone());
    let app = router(state)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
