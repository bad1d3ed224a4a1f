//! HTTP Handlers
//!
//! All plant routes sit behind the bearer gate, so every handler can
//! rely on the `Principal` extension being present.

use auth::presentation::middleware::Principal;
use axum::Extension;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::{AppJson, AppPath};
use kernel::id::PlantId;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::create_plant::CreatePlantInput;
use crate::application::update_plant::UpdatePlantInput;
use crate::application::{
    CreatePlantUseCase, DeletePlantUseCase, ListPlantsUseCase, UpdatePlantUseCase,
};
use crate::domain::entity::plant::{SensorReading, WateringSchedule};
use crate::domain::repository::PlantRepository;
use crate::error::PlantResult;
use crate::presentation::dto::{
    CreatePlantResponse, MessageResponse, PlantRequest, PlantSummaryResponse, SensorDataDto,
    WateringScheduleDto,
};

/// Shared state for plant handlers
#[derive(Clone)]
pub struct PlantAppState<R>
where
    R: PlantRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl From<SensorDataDto> for SensorReading {
    fn from(dto: SensorDataDto) -> Self {
        Self {
            temperature: dto.temperature,
            soil_moisture: dto.soil_moisture,
            other_params: dto.other_params,
        }
    }
}

impl From<WateringScheduleDto> for WateringSchedule {
    fn from(dto: WateringScheduleDto) -> Self {
        Self {
            start_time: dto.start_time,
            duration_minutes: dto.duration_minutes,
            frequency_days: dto.frequency_days,
        }
    }
}

// ============================================================================
// Create
// ============================================================================

/// POST /plants
pub async fn create_plant<R>(
    State(state): State<PlantAppState<R>>,
    Extension(principal): Extension<Principal>,
    AppJson(req): AppJson<PlantRequest>,
) -> PlantResult<(StatusCode, Json<CreatePlantResponse>)>
where
    R: PlantRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePlantUseCase::new(state.repo.clone());

    let output = use_case
        .execute(CreatePlantInput {
            owner_id: principal.user_id,
            name: req.name,
            species: req.species,
            location: req.location,
            sensor: req.sensor_data.into(),
            schedule: req.watering_schedule.into(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePlantResponse {
            message: "Plant created successfully".into(),
            plant_id: output.plant_id.into_uuid(),
        }),
    ))
}

// ============================================================================
// List
// ============================================================================

/// GET /user-plants
pub async fn list_plants<R>(
    State(state): State<PlantAppState<R>>,
    Extension(principal): Extension<Principal>,
) -> PlantResult<Json<Vec<PlantSummaryResponse>>>
where
    R: PlantRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPlantsUseCase::new(state.repo.clone());

    let summaries = use_case.execute(&principal.user_id).await?;

    Ok(Json(
        summaries
            .into_iter()
            .map(|s| PlantSummaryResponse {
                plant_id: s.plant_id.into_uuid(),
                name: s.name,
                species: s.species,
                location: s.location,
                temperature: s.temperature,
                soil_moisture: s.soil_moisture,
                other_params: s.other_params,
                last_sensor_update: s.last_sensor_update,
            })
            .collect(),
    ))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /plants/{id}
pub async fn update_plant<R>(
    State(state): State<PlantAppState<R>>,
    AppPath(plant_id): AppPath<Uuid>,
    Extension(principal): Extension<Principal>,
    AppJson(req): AppJson<PlantRequest>,
) -> PlantResult<Json<MessageResponse>>
where
    R: PlantRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePlantUseCase::new(state.repo.clone());

    use_case
        .execute(UpdatePlantInput {
            plant_id: PlantId::from_uuid(plant_id),
            owner_id: principal.user_id,
            name: req.name,
            species: req.species,
            location: req.location,
            sensor: req.sensor_data.into(),
            schedule: req.watering_schedule.into(),
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Plant updated successfully".into(),
    }))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /user-plants/{id}
pub async fn delete_plant<R>(
    State(state): State<PlantAppState<R>>,
    AppPath(plant_id): AppPath<Uuid>,
    Extension(principal): Extension<Principal>,
) -> PlantResult<Json<MessageResponse>>
where
    R: PlantRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePlantUseCase::new(state.repo.clone());

    use_case
        .execute(&PlantId::from_uuid(plant_id), &principal.user_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Plant deleted successfully".into(),
    }))
}
