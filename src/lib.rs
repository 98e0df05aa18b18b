pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod seed;
pub mod serializers;

use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared per-request context: the database pool. Configuration stays in the
/// `config` singleton.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Build the full router. Public routes first, then the protected group
/// behind the bearer-token middleware.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/apartments",
            get(handlers::apartments::list).post(handlers::apartments::create),
        )
        .route(
            "/apartments/:id",
            get(handlers::apartments::get)
                .put(handlers::apartments::update)
                .patch(handlers::apartments::patch)
                .delete(handlers::apartments::delete),
        )
        .route(
            "/builders",
            get(handlers::builders::list).post(handlers::builders::create),
        )
        .route(
            "/builders/:id",
            get(handlers::builders::get)
                .put(handlers::builders::update)
                .patch(handlers::builders::patch)
                .delete(handlers::builders::delete),
        )
        .route(
            "/files",
            get(handlers::files::list).post(handlers::files::create),
        )
        .route(
            "/files/:id",
            get(handlers::files::get)
                .put(handlers::files::update)
                .patch(handlers::files::patch)
                .delete(handlers::files::delete),
        )
        .route(
            "/applications",
            get(handlers::applications::list).post(handlers::applications::create),
        )
        .route(
            "/applications/:id",
            get(handlers::applications::get)
                .put(handlers::applications::update)
                .patch(handlers::applications::patch)
                .delete(handlers::applications::delete),
        )
        .route("/profile", get(handlers::auth::profile))
        .route("/change-password", post(handlers::auth::change_password))
        .route_layer(axum::middleware::from_fn(middleware::jwt_auth_middleware));

    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/login", post(handlers::auth::login))
        // Upload is open while /files CRUD requires auth; see DESIGN.md.
        .route("/upload", post(handlers::files::upload))
        .route("/media/*path", get(handlers::files::media))
        // Protected API
        .merge(protected)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
