use axum::Router;
use domain_catalog::{CatalogService, PgCatalogRepository, handlers};

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by `create_router`.
pub fn routes(state: &crate::state::AppState) -> Router {
    let repository = PgCatalogRepository::new(state.db.clone());
    let service = CatalogService::new(repository);

    Router::new().nest("/v1", handlers::router(service))
}

/// The /ready endpoint, with state applied so it merges into the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
