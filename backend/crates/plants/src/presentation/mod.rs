//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::PlantAppState;
pub use router::{plant_router, plant_router_generic};
