//! Fitting configuration.
//!
//! Tunables shared by the normalizer and the deformation adapter.

use drape_types::constants::{
    LATTICE_TOLERANCE, LOWER_BODY_EASE, MAX_GARMENT_SCALE, MIN_GARMENT_SCALE, MIN_SLICE_SAMPLES,
    MORPH_INFLUENCE_THRESHOLD,
};
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// Configuration for garment normalization and deformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Lower bound of the returned garment scale.
    pub min_scale: f32,
    /// Upper bound of the returned garment scale.
    pub max_scale: f32,
    /// Extra scale for lower-body garments.
    pub lower_body_ease: f32,
    /// In-band vertices required before a slice width is trusted.
    pub min_slice_samples: usize,
    /// Mannequin morph influences at or below this are treated as zero.
    pub morph_threshold: f32,
    /// Relative deviation below which a lattice zone is skipped.
    pub lattice_tolerance: f32,
    /// Exponent factor `k` of the lattice weight `exp(-k·t²)`.
    pub lattice_sharpness: f32,
    /// Recompute normals of sub-meshes whose vertices moved.
    pub recompute_normals: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_GARMENT_SCALE,
            max_scale: MAX_GARMENT_SCALE,
            lower_body_ease: LOWER_BODY_EASE,
            min_slice_samples: MIN_SLICE_SAMPLES,
            morph_threshold: MORPH_INFLUENCE_THRESHOLD,
            lattice_tolerance: LATTICE_TOLERANCE,
            lattice_sharpness: 3.0,
            recompute_normals: true,
        }
    }
}

impl FitConfig {
    /// Checks internal consistency.
    pub fn validate(&self) -> DrapeResult<()> {
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale && self.max_scale.is_finite()) {
            return Err(DrapeError::InvalidConfig(format!(
                "scale clamp [{}, {}] is not a positive range",
                self.min_scale, self.max_scale
            )));
        }
        if !(self.lower_body_ease > 0.0 && self.lower_body_ease.is_finite()) {
            return Err(DrapeError::InvalidConfig(format!(
                "lower_body_ease must be positive, got {}",
                self.lower_body_ease
            )));
        }
        if self.min_slice_samples == 0 {
            return Err(DrapeError::InvalidConfig(
                "min_slice_samples must be at least 1".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.morph_threshold) {
            return Err(DrapeError::InvalidConfig(format!(
                "morph_threshold must be in [0, 1), got {}",
                self.morph_threshold
            )));
        }
        if !(self.lattice_tolerance >= 0.0 && self.lattice_sharpness > 0.0) {
            return Err(DrapeError::InvalidConfig(
                "lattice tolerance must be non-negative and sharpness positive".into(),
            ));
        }
        Ok(())
    }
}
