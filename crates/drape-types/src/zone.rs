//! Garment-level metadata tags.
//!
//! These are attached to a whole garment, never stored per vertex.

use serde::{Deserialize, Serialize};

/// Which part of the body a garment is worn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyZone {
    /// Torso-worn (shirts, jackets, dresses).
    #[default]
    Upper,
    /// Hip/leg-worn (trousers, skirts, shorts).
    Lower,
}

impl BodyZone {
    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            BodyZone::Upper => "upper",
            BodyZone::Lower => "lower",
        }
    }
}

/// Where a garment mesh came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentSource {
    /// Curated template, authored in a known frame.
    Template,
    /// Generated from a photo; orientation and scale are arbitrary.
    Generated,
    #[default]
    Unknown,
}

impl GarmentSource {
    pub fn name(&self) -> &'static str {
        match self {
            GarmentSource::Template => "template",
            GarmentSource::Generated => "generated",
            GarmentSource::Unknown => "unknown",
        }
    }
}
