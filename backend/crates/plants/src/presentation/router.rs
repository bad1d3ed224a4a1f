//! Plant Router
//!
//! Every route is layered with the bearer gate from the auth crate.

use auth::presentation::middleware::{AuthGateState, require_bearer};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::PlantRepository;
use crate::infra::postgres::PgPlantRepository;
use crate::presentation::handlers::{self, PlantAppState};

/// Create the plant router with PostgreSQL repository
pub fn plant_router(repo: PgPlantRepository, gate: AuthGateState) -> Router {
    plant_router_generic(repo, gate)
}

/// Create a generic plant router for any repository implementation
pub fn plant_router_generic<R>(repo: R, gate: AuthGateState) -> Router
where
    R: PlantRepository + Clone + Send + Sync + 'static,
{
    let state = PlantAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/plants", post(handlers::create_plant::<R>))
        .route("/plants/{id}", put(handlers::update_plant::<R>))
        .route("/user-plants", get(handlers::list_plants::<R>))
        .route("/user-plants/{id}", delete(handlers::delete_plant::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_bearer))
        .with_state(state)
}
