//! Plant Repository Trait
//!
//! Each write method covers the whole aggregate in one atomic unit.
//! Implementations must fail with a not-found error when the target
//! plant does not exist or belongs to another user, without
//! distinguishing the two cases.

use crate::domain::entity::plant::{PlantAggregate, PlantSummary};
use kernel::error::app_error::AppResult;
use kernel::id::{PlantId, UserId};

/// Repository abstraction for plant aggregates
#[trait_variant::make(PlantRepository: Send)]
pub trait LocalPlantRepository {
    /// Persist a new aggregate (plant, snapshot, schedule)
    async fn create(&self, aggregate: &PlantAggregate) -> AppResult<()>;

    /// Replace an existing aggregate after re-checking ownership
    async fn update(&self, aggregate: &PlantAggregate) -> AppResult<()>;

    /// Delete a plant and all of its dependent rows
    async fn delete(&self, plant_id: &PlantId, owner_id: &UserId) -> AppResult<()>;

    /// List an owner's plants joined with their latest snapshot,
    /// newest snapshot first
    async fn list_for_owner(&self, owner_id: &UserId) -> AppResult<Vec<PlantSummary>>;
}
