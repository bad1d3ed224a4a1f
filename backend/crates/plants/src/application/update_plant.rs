//! Update Plant Use Case
//!
//! Replaces the whole aggregate. The store re-checks ownership inside
//! the same transaction, so a stale or foreign plant id surfaces as the
//! shared not-found error.

use crate::application::validate_plant_fields;
use crate::domain::entity::plant::{Plant, PlantAggregate, SensorReading, WateringSchedule};
use crate::domain::repository::PlantRepository;
use crate::error::PlantResult;
use chrono::Utc;
use kernel::id::{PlantId, UserId};
use std::sync::Arc;

/// Input for plant update
#[derive(Debug)]
pub struct UpdatePlantInput {
    pub plant_id: PlantId,
    pub owner_id: UserId,
    pub name: String,
    pub species: String,
    pub location: Option<String>,
    pub sensor: SensorReading,
    pub schedule: WateringSchedule,
}

/// Plant update use case
pub struct UpdatePlantUseCase<R> {
    repo: Arc<R>,
}

impl<R: PlantRepository> UpdatePlantUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdatePlantInput) -> PlantResult<()> {
        validate_plant_fields(&input.name, &input.species, &input.schedule)?;

        let now = Utc::now();
        let aggregate = PlantAggregate {
            plant: Plant {
                plant_id: input.plant_id,
                owner_id: input.owner_id,
                name: input.name,
                species: input.species,
                location: input.location,
                // created_at is never written on update
                created_at: now,
                updated_at: now,
            },
            sensor: input.sensor,
            schedule: input.schedule,
        };

        self.repo.update(&aggregate).await?;

        tracing::info!(plant_id = %input.plant_id, owner_id = %input.owner_id, "Plant updated");

        Ok(())
    }
}
