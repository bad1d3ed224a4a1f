//! Delete Plant Use Case
//!
//! Removes the plant and every dependent row (watering events, sensor
//! snapshot, schedule) in one transaction.

use crate::domain::repository::PlantRepository;
use crate::error::PlantResult;
use kernel::id::{PlantId, UserId};
use std::sync::Arc;

/// Plant deletion use case
pub struct DeletePlantUseCase<R> {
    repo: Arc<R>,
}

impl<R: PlantRepository> DeletePlantUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, plant_id: &PlantId, owner_id: &UserId) -> PlantResult<()> {
        self.repo.delete(plant_id, owner_id).await?;

        tracing::info!(plant_id = %plant_id, owner_id = %owner_id, "Plant deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_plant::{CreatePlantInput, CreatePlantUseCase};
    use crate::domain::entity::plant::{SensorReading, WateringSchedule};
    use crate::error::PlantError;
    use crate::infra::memory::InMemoryPlantRepository;
    use chrono::Utc;

    async fn create_one(repo: &Arc<InMemoryPlantRepository>, owner: UserId) -> PlantId {
        CreatePlantUseCase::new(Arc::clone(repo))
            .execute(CreatePlantInput {
                owner_id: owner,
                name: "Fern".into(),
                species: "Nephrolepis exaltata".into(),
                location: None,
                sensor: SensorReading {
                    temperature: 20.0,
                    soil_moisture: 0.6,
                    other_params: None,
                },
                schedule: WateringSchedule {
                    start_time: Utc::now(),
                    duration_minutes: 5,
                    frequency_days: 2,
                },
            })
            .await
            .unwrap()
            .plant_id
    }

    #[tokio::test]
    async fn test_delete_plant_success() {
        let repo = Arc::new(InMemoryPlantRepository::new());
        let owner = UserId::new();
        let plant_id = create_one(&repo, owner).await;

        DeletePlantUseCase::new(Arc::clone(&repo))
            .execute(&plant_id, &owner)
            .await
            .unwrap();

        assert!(repo.list_for_owner(&owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_plant() {
        let repo = Arc::new(InMemoryPlantRepository::new());

        let err = DeletePlantUseCase::new(repo)
            .execute(&PlantId::new(), &UserId::new())
            .await;
        assert!(matches!(err, Err(PlantError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_foreign_plant_is_not_found() {
        let repo = Arc::new(InMemoryPlantRepository::new());
        let owner = UserId::new();
        let plant_id = create_one(&repo, owner).await;

        let err = DeletePlantUseCase::new(Arc::clone(&repo))
            .execute(&plant_id, &UserId::new())
            .await;
        assert!(matches!(err, Err(PlantError::NotFound)));
        assert_eq!(repo.list_for_owner(&owner).await.unwrap().len(), 1);
    }
}
