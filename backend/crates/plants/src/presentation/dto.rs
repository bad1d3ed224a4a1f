//! API DTOs (Data Transfer Objects)
//!
//! The create/update body keeps the established wire spelling: the two
//! nested objects are `sensorData` and `wateringSchedule`, while their
//! inner fields stay snake_case (`soil_moisture`, `duration_minutes`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Create / Update
// ============================================================================

/// Create or update plant request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRequest {
    pub name: String,
    pub species: String,
    pub location: Option<String>,
    pub sensor_data: SensorDataDto,
    pub watering_schedule: WateringScheduleDto,
}

/// Sensor snapshot payload (snake_case on the wire)
#[derive(Debug, Clone, Deserialize)]
pub struct SensorDataDto {
    pub temperature: f64,
    pub soil_moisture: f64,
    pub other_params: Option<serde_json::Value>,
}

/// Watering schedule payload (snake_case on the wire)
#[derive(Debug, Clone, Deserialize)]
pub struct WateringScheduleDto {
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub frequency_days: i32,
}

/// Create plant response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlantResponse {
    pub message: String,
    pub plant_id: Uuid,
}

// ============================================================================
// Listing
// ============================================================================

/// One row of the plant listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantSummaryResponse {
    pub plant_id: Uuid,
    pub name: String,
    pub species: String,
    pub location: Option<String>,
    pub temperature: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub other_params: Option<serde_json::Value>,
    pub last_sensor_update: Option<DateTime<Utc>>,
}

// ============================================================================
// Shared
// ============================================================================

/// Message-only success response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
