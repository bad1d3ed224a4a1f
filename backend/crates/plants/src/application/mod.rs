//! Application Layer
//!
//! Use cases for the plant CRUD surface.

pub mod create_plant;
pub mod delete_plant;
pub mod list_plants;
pub mod update_plant;

pub use create_plant::CreatePlantUseCase;
pub use delete_plant::DeletePlantUseCase;
pub use list_plants::ListPlantsUseCase;
pub use update_plant::UpdatePlantUseCase;

use crate::domain::entity::plant::WateringSchedule;
use crate::error::{PlantError, PlantResult};

/// Field checks shared by create and update
pub(crate) fn validate_plant_fields(
    name: &str,
    species: &str,
    schedule: &WateringSchedule,
) -> PlantResult<()> {
    if name.trim().is_empty() || species.trim().is_empty() {
        return Err(PlantError::Validation("Missing required fields".into()));
    }

    if schedule.duration_minutes <= 0 || schedule.frequency_days <= 0 {
        return Err(PlantError::Validation(
            "Watering schedule values must be positive".into(),
        ));
    }

    Ok(())
}
