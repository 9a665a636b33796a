//! Cloth solver configuration.
//!
//! Parameters that control the fixed-step integrator: sub-stepping,
//! relaxation iterations, particle mass, and constraint stiffness.

use drape_types::constants::{FIXED_DT, GRAVITY, MIN_SOLVER_ITERATIONS};
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// Configuration for the cloth world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
    /// Internal timestep (seconds), independent of frame delta.
    pub fixed_dt: f32,

    /// Upper bound on sub-steps per `step` call. Backlog beyond this is dropped.
    pub max_substeps: u32,

    /// Gauss-Seidel sweeps over all constraints per sub-step.
    /// Values below 10 are raised to 10.
    pub solver_iterations: u32,

    /// Mass of every free particle (kg).
    pub particle_mass: f32,

    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Velocity damping per sub-step (0.0 = none, 1.0 = full).
    pub damping: f32,

    /// Stiffness of structural (horizontal/vertical) constraints, in (0, 1].
    pub stiffness: f32,

    /// Stiffness of shear (diagonal) constraints, in (0, 1].
    pub shear_stiffness: f32,

    /// Temporal frequencies of the wind sine / cosine terms (rad/s).
    pub wind_frequency: [f32; 2],

    /// Per-particle phase offsets of the wind sine / cosine terms.
    pub wind_phase: [f32; 2],
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            fixed_dt: FIXED_DT,
            max_substeps: 4,
            solver_iterations: MIN_SOLVER_ITERATIONS,
            particle_mass: 0.01,
            gravity: [0.0, -GRAVITY, 0.0],
            damping: 0.01,
            stiffness: 1.0,
            shear_stiffness: 0.8,
            wind_frequency: [1.3, 0.9],
            wind_phase: [0.31, 0.17],
        }
    }
}

impl ClothConfig {
    /// Creates a config for debugging (single sub-step, heavy damping).
    pub fn debug() -> Self {
        Self {
            max_substeps: 1,
            damping: 0.1,
            ..Default::default()
        }
    }

    /// Creates a high-quality config (more sub-steps and sweeps).
    pub fn high_quality() -> Self {
        Self {
            max_substeps: 8,
            solver_iterations: 30,
            damping: 0.005,
            ..Default::default()
        }
    }

    /// Sweeps actually performed per sub-step.
    pub fn effective_iterations(&self) -> u32 {
        self.solver_iterations.max(MIN_SOLVER_ITERATIONS)
    }

    /// Checks that every parameter is usable by the integrator.
    pub fn validate(&self) -> DrapeResult<()> {
        if !(self.fixed_dt > 0.0 && self.fixed_dt.is_finite()) {
            return Err(DrapeError::InvalidConfig(format!(
                "fixed_dt must be positive, got {}",
                self.fixed_dt
            )));
        }
        if self.max_substeps == 0 {
            return Err(DrapeError::InvalidConfig("max_substeps must be at least 1".into()));
        }
        if !(self.particle_mass > 0.0 && self.particle_mass.is_finite()) {
            return Err(DrapeError::InvalidConfig(format!(
                "particle_mass must be positive, got {}",
                self.particle_mass
            )));
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(DrapeError::InvalidConfig(format!(
                "damping must be in [0, 1), got {}",
                self.damping
            )));
        }
        for (name, k) in [("stiffness", self.stiffness), ("shear_stiffness", self.shear_stiffness)] {
            if !(k > 0.0 && k <= 1.0) {
                return Err(DrapeError::InvalidConfig(format!(
                    "{name} must be in (0, 1], got {k}"
                )));
            }
        }
        if self.gravity.iter().chain(&self.wind_frequency).chain(&self.wind_phase).any(|v| !v.is_finite()) {
            return Err(DrapeError::InvalidConfig("gravity and wind terms must be finite".into()));
        }
        Ok(())
    }
}
