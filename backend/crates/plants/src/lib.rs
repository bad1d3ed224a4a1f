//! Plants Backend Module
//!
//! CRUD over the plant aggregate: the plant row plus its single sensor
//! snapshot and single watering schedule. Every write runs in one
//! database transaction with an ownership re-check, so a plant that is
//! missing and a plant owned by someone else are indistinguishable to
//! the caller.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, read models, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL repository (transactional)
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PlantError, PlantResult};
pub use infra::postgres::PgPlantRepository;
pub use presentation::router::plant_router;

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgPlantRepository as PlantStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
