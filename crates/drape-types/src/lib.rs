//! # drape-types
//!
//! Shared types, identifiers, error types, and constants
//! for the Drape garment fitting engine.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other Drape crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod zone;

pub use error::{DrapeError, DrapeResult};
pub use ids::ParticleId;
pub use zone::{BodyZone, GarmentSource};
