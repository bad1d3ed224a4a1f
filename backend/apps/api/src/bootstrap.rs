//! Database Bootstrap
//!
//! Idempotent schema setup run once at startup, before the server
//! starts accepting requests. Every statement is `IF NOT EXISTS`, so
//! rerunning against an existing database is a no-op.

use sqlx::PgPool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        user_id UUID PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS plants (
        plant_id UUID PRIMARY KEY,
        user_id UUID NOT NULL REFERENCES users (user_id),
        name TEXT NOT NULL,
        species TEXT NOT NULL,
        location TEXT,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
    "#,
    // UNIQUE (plant_id) keeps the one-snapshot invariant and backs the
    // upsert in the plants store
    r#"
    CREATE TABLE IF NOT EXISTS sensor_data (
        sensor_id UUID PRIMARY KEY,
        plant_id UUID NOT NULL UNIQUE REFERENCES plants (plant_id),
        temperature DOUBLE PRECISION NOT NULL,
        soil_moisture DOUBLE PRECISION NOT NULL,
        other_params JSONB,
        recorded_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS watering_schedules (
        schedule_id UUID PRIMARY KEY,
        plant_id UUID NOT NULL UNIQUE REFERENCES plants (plant_id),
        start_time TIMESTAMPTZ NOT NULL,
        duration_minutes INT NOT NULL,
        frequency_days INT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS watering_events (
        event_id UUID PRIMARY KEY,
        plant_id UUID NOT NULL REFERENCES plants (plant_id),
        watered_at TIMESTAMPTZ NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_plants_user_id ON plants (user_id)",
    "CREATE INDEX IF NOT EXISTS idx_watering_events_plant_id ON watering_events (plant_id)",
];

/// Create all tables and indexes if they are missing
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Database schema ensured");
    Ok(())
}
