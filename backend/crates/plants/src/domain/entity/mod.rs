//! Domain Entities

pub mod plant;
