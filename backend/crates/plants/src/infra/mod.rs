//! Infrastructure Layer

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgPlantRepository;
