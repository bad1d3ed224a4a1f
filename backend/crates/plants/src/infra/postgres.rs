//! PostgreSQL Plant Repository
//!
//! Every write method opens one transaction. Updates and deletes lock
//! the plant row with `FOR UPDATE` and bail out before touching any
//! dependent table when the plant is missing or owned by someone else.
//! Dropping the transaction on the error path rolls it back.

use crate::domain::entity::plant::{PlantAggregate, PlantSummary};
use crate::domain::repository::PlantRepository;
use chrono::{DateTime, Utc};
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::{PlantId, UserId};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

const NOT_FOUND_OR_NOT_OWNED: &str = "Plant not found or not owned by user";

/// PostgreSQL implementation of the plant repository
#[derive(Clone)]
pub struct PgPlantRepository {
    pool: PgPool,
}

impl PgPlantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lock the plant row and verify ownership inside the transaction
    async fn lock_owned_plant(
        tx: &mut Transaction<'_, Postgres>,
        plant_id: &PlantId,
        owner_id: &UserId,
    ) -> AppResult<()> {
        let row: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT plant_id
            FROM plants
            WHERE plant_id = $1 AND user_id = $2
            FOR UPDATE
            "#,
        )
        .bind(plant_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&mut **tx)
        .await?;

        match row {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(NOT_FOUND_OR_NOT_OWNED)),
        }
    }
}

/// Database row for the plant listing query
#[derive(sqlx::FromRow)]
struct PlantSummaryRow {
    plant_id: Uuid,
    name: String,
    species: String,
    location: Option<String>,
    temperature: Option<f64>,
    soil_moisture: Option<f64>,
    other_params: Option<serde_json::Value>,
    recorded_at: Option<DateTime<Utc>>,
}

impl From<PlantSummaryRow> for PlantSummary {
    fn from(row: PlantSummaryRow) -> Self {
        Self {
            plant_id: PlantId::from_uuid(row.plant_id),
            name: row.name,
            species: row.species,
            location: row.location,
            temperature: row.temperature,
            soil_moisture: row.soil_moisture,
            other_params: row.other_params,
            last_sensor_update: row.recorded_at,
        }
    }
}

impl PlantRepository for PgPlantRepository {
    async fn create(&self, aggregate: &PlantAggregate) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        let plant = &aggregate.plant;

        sqlx::query(
            r#"
            INSERT INTO plants (plant_id, user_id, name, species, location, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(plant.plant_id.as_uuid())
        .bind(plant.owner_id.as_uuid())
        .bind(&plant.name)
        .bind(&plant.species)
        .bind(&plant.location)
        .bind(plant.created_at)
        .bind(plant.updated_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO sensor_data (sensor_id, plant_id, temperature, soil_moisture, other_params, recorded_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plant.plant_id.as_uuid())
        .bind(aggregate.sensor.temperature)
        .bind(aggregate.sensor.soil_moisture)
        .bind(&aggregate.sensor.other_params)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO watering_schedules (schedule_id, plant_id, start_time, duration_minutes, frequency_days)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plant.plant_id.as_uuid())
        .bind(aggregate.schedule.start_time)
        .bind(aggregate.schedule.duration_minutes)
        .bind(aggregate.schedule.frequency_days)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn update(&self, aggregate: &PlantAggregate) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        let plant = &aggregate.plant;

        Self::lock_owned_plant(&mut tx, &plant.plant_id, &plant.owner_id).await?;

        sqlx::query(
            r#"
            UPDATE plants
            SET name = $2, species = $3, location = $4, updated_at = NOW()
            WHERE plant_id = $1
            "#,
        )
        .bind(plant.plant_id.as_uuid())
        .bind(&plant.name)
        .bind(&plant.species)
        .bind(&plant.location)
        .execute(&mut *tx)
        .await?;

        // One snapshot per plant: the upsert refreshes recorded_at so
        // the listing order reflects the latest write
        sqlx::query(
            r#"
            INSERT INTO sensor_data (sensor_id, plant_id, temperature, soil_moisture, other_params, recorded_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (plant_id) DO UPDATE
            SET temperature = EXCLUDED.temperature,
                soil_moisture = EXCLUDED.soil_moisture,
                other_params = EXCLUDED.other_params,
                recorded_at = NOW()
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plant.plant_id.as_uuid())
        .bind(aggregate.sensor.temperature)
        .bind(aggregate.sensor.soil_moisture)
        .bind(&aggregate.sensor.other_params)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO watering_schedules (schedule_id, plant_id, start_time, duration_minutes, frequency_days)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (plant_id) DO UPDATE
            SET start_time = EXCLUDED.start_time,
                duration_minutes = EXCLUDED.duration_minutes,
                frequency_days = EXCLUDED.frequency_days
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plant.plant_id.as_uuid())
        .bind(aggregate.schedule.start_time)
        .bind(aggregate.schedule.duration_minutes)
        .bind(aggregate.schedule.frequency_days)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, plant_id: &PlantId, owner_id: &UserId) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        Self::lock_owned_plant(&mut tx, plant_id, owner_id).await?;

        // Dependents first, plant last (FK order)
        for sql in [
            "DELETE FROM watering_events WHERE plant_id = $1",
            "DELETE FROM sensor_data WHERE plant_id = $1",
            "DELETE FROM watering_schedules WHERE plant_id = $1",
        ] {
            sqlx::query(sql)
                .bind(plant_id.as_uuid())
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("DELETE FROM plants WHERE plant_id = $1 AND user_id = $2")
            .bind(plant_id.as_uuid())
            .bind(owner_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: &UserId) -> AppResult<Vec<PlantSummary>> {
        let rows = sqlx::query_as::<_, PlantSummaryRow>(
            r#"
            SELECT p.plant_id, p.name, p.species, p.location,
                   sd.temperature, sd.soil_moisture, sd.other_params, sd.recorded_at
            FROM plants p
            LEFT JOIN sensor_data sd ON sd.plant_id = p.plant_id
            WHERE p.user_id = $1
            ORDER BY sd.recorded_at DESC NULLS LAST
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PlantSummary::from).collect())
    }
}
