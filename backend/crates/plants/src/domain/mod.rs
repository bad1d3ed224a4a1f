//! Domain Layer

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::plant::{Plant, PlantAggregate, PlantSummary, SensorReading, WateringSchedule};
pub use repository::PlantRepository;
