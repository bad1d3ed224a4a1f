//! Plant Aggregate
//!
//! A plant always travels with exactly one sensor snapshot and one
//! watering schedule. Writes replace the whole aggregate; there is no
//! per-part endpoint.

use chrono::{DateTime, Utc};
use kernel::id::{PlantId, UserId};

/// Plant entity
#[derive(Debug, Clone)]
pub struct Plant {
    pub plant_id: PlantId,
    pub owner_id: UserId,
    pub name: String,
    pub species: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plant {
    /// Create a new plant with a fresh id and current timestamps
    pub fn new(owner_id: UserId, name: String, species: String, location: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            plant_id: PlantId::new(),
            owner_id,
            name,
            species,
            location,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Latest sensor snapshot for a plant
///
/// `recorded_at` is assigned by the store on every write, so the value
/// always reflects the last time the snapshot was touched.
#[derive(Debug, Clone)]
pub struct SensorReading {
    pub temperature: f64,
    pub soil_moisture: f64,
    pub other_params: Option<serde_json::Value>,
}

/// Watering schedule for a plant
#[derive(Debug, Clone)]
pub struct WateringSchedule {
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub frequency_days: i32,
}

/// The full write unit: plant plus snapshot plus schedule
#[derive(Debug, Clone)]
pub struct PlantAggregate {
    pub plant: Plant,
    pub sensor: SensorReading,
    pub schedule: WateringSchedule,
}

/// Read model for plant listings
///
/// Sensor fields are `None` for plants that have no snapshot row.
#[derive(Debug, Clone)]
pub struct PlantSummary {
    pub plant_id: PlantId,
    pub name: String,
    pub species: String,
    pub location: Option<String>,
    pub temperature: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub other_params: Option<serde_json::Value>,
    pub last_sensor_update: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plant_has_equal_timestamps() {
        let plant = Plant::new(UserId::new(), "Monstera".into(), "Monstera deliciosa".into(), None);
        assert_eq!(plant.created_at, plant.updated_at);
    }

    #[test]
    fn test_plant_ids_are_unique() {
        let owner = UserId::new();
        let a = Plant::new(owner, "A".into(), "sp".into(), None);
        let b = Plant::new(owner, "B".into(), "sp".into(), None);
        assert_ne!(a.plant_id, b.plant_id);
    }
}
