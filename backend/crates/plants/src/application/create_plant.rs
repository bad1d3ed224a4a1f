//! Create Plant Use Case

use crate::application::validate_plant_fields;
use crate::domain::entity::plant::{Plant, PlantAggregate, SensorReading, WateringSchedule};
use crate::domain::repository::PlantRepository;
use crate::error::PlantResult;
use kernel::id::{PlantId, UserId};
use std::sync::Arc;

/// Input for plant creation
#[derive(Debug)]
pub struct CreatePlantInput {
    pub owner_id: UserId,
    pub name: String,
    pub species: String,
    pub location: Option<String>,
    pub sensor: SensorReading,
    pub schedule: WateringSchedule,
}

/// Output of a successful creation
#[derive(Debug)]
pub struct CreatePlantOutput {
    pub plant_id: PlantId,
}

/// Plant creation use case
pub struct CreatePlantUseCase<R> {
    repo: Arc<R>,
}

impl<R: PlantRepository> CreatePlantUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreatePlantInput) -> PlantResult<CreatePlantOutput> {
        validate_plant_fields(&input.name, &input.species, &input.schedule)?;

        let plant = Plant::new(input.owner_id, input.name, input.species, input.location);
        let plant_id = plant.plant_id;

        let aggregate = PlantAggregate {
            plant,
            sensor: input.sensor,
            schedule: input.schedule,
        };

        self.repo.create(&aggregate).await?;

        tracing::info!(plant_id = %plant_id, owner_id = %input.owner_id, "Plant created");

        Ok(CreatePlantOutput { plant_id })
    }
}
