//! List Plants Use Case
//!
//! Returns the caller's plants joined with their latest sensor
//! snapshot, newest snapshot first. Plants without a snapshot sort
//! last. An owner with no plants gets an empty list, not an error.

use crate::domain::entity::plant::PlantSummary;
use crate::domain::repository::PlantRepository;
use crate::error::PlantResult;
use kernel::id::UserId;
use std::sync::Arc;

/// Plant listing use case
pub struct ListPlantsUseCase<R> {
    repo: Arc<R>,
}

impl<R: PlantRepository> ListPlantsUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: &UserId) -> PlantResult<Vec<PlantSummary>> {
        Ok(self.repo.list_for_owner(owner_id).await?)
    }
}
