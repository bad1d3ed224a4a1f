//! In-Memory Plant Repository (test support)

use crate::domain::entity::plant::{PlantAggregate, PlantSummary};
use crate::domain::repository::PlantRepository;
use chrono::{DateTime, Utc};
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::{PlantId, UserId};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

struct Stored {
    aggregate: PlantAggregate,
    recorded_at: DateTime<Utc>,
    // Write sequence breaks timestamp ties in listings
    sequence: u64,
}

/// Mutex-backed repository for unit tests
///
/// Writes are applied all-or-nothing, matching the transactional
/// contract of the Postgres store. A one-shot fault hook lets tests
/// fail the snapshot write mid-create.
#[derive(Default)]
pub struct InMemoryPlantRepository {
    plants: Mutex<Vec<Stored>>,
    counter: Mutex<u64>,
    fail_next_snapshot_write: AtomicBool,
}

impl InMemoryPlantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the snapshot write of the next create fail
    pub fn fail_next_snapshot_write(&self) {
        self.fail_next_snapshot_write.store(true, Ordering::SeqCst);
    }

    fn next_sequence(&self) -> u64 {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        *counter
    }
}

impl PlantRepository for InMemoryPlantRepository {
    async fn create(&self, aggregate: &PlantAggregate) -> AppResult<()> {
        let staged = Stored {
            aggregate: aggregate.clone(),
            recorded_at: Utc::now(),
            sequence: self.next_sequence(),
        };

        // The snapshot write is the injectable failure point; bailing
        // out here leaves no plant row visible, as a rolled-back
        // transaction would
        if self.fail_next_snapshot_write.swap(false, Ordering::SeqCst) {
            return Err(AppError::internal("Snapshot write failed"));
        }

        self.plants.lock().unwrap().push(staged);
        Ok(())
    }

    async fn update(&self, aggregate: &PlantAggregate) -> AppResult<()> {
        let sequence = self.next_sequence();
        let mut plants = self.plants.lock().unwrap();

        let stored = plants
            .iter_mut()
            .find(|s| {
                s.aggregate.plant.plant_id == aggregate.plant.plant_id
                    && s.aggregate.plant.owner_id == aggregate.plant.owner_id
            })
            .ok_or_else(|| AppError::not_found("Plant not found or not owned by user"))?;

        let created_at = stored.aggregate.plant.created_at;
        stored.aggregate = aggregate.clone();
        stored.aggregate.plant.created_at = created_at;
        stored.recorded_at = Utc::now();
        stored.sequence = sequence;
        Ok(())
    }

    async fn delete(&self, plant_id: &PlantId, owner_id: &UserId) -> AppResult<()> {
        let mut plants = self.plants.lock().unwrap();
        let before = plants.len();

        plants.retain(|s| {
            !(s.aggregate.plant.plant_id == *plant_id && s.aggregate.plant.owner_id == *owner_id)
        });

        if plants.len() == before {
            return Err(AppError::not_found("Plant not found or not owned by user"));
        }
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: &UserId) -> AppResult<Vec<PlantSummary>> {
        let plants = self.plants.lock().unwrap();

        let mut owned: Vec<&Stored> = plants
            .iter()
            .filter(|s| s.aggregate.plant.owner_id == *owner_id)
            .collect();
        owned.sort_by(|a, b| b.sequence.cmp(&a.sequence));

        Ok(owned
            .into_iter()
            .map(|s| PlantSummary {
                plant_id: s.aggregate.plant.plant_id,
                name: s.aggregate.plant.name.clone(),
                species: s.aggregate.plant.species.clone(),
                location: s.aggregate.plant.location.clone(),
                temperature: Some(s.aggregate.sensor.temperature),
                soil_moisture: Some(s.aggregate.sensor.soil_moisture),
                other_params: s.aggregate.sensor.other_params.clone(),
                last_sensor_update: Some(s.recorded_at),
            })
            .collect())
    }
}
