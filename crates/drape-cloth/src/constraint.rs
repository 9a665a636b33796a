//! Distance constraints between particle pairs.

use drape_types::ParticleId;
use serde::{Deserialize, Serialize};

use crate::state::ParticleState;

/// Role of a constraint in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Horizontal,
    Vertical,
    Shear,
}

/// Keeps two particles at `rest_length` apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceConstraint {
    pub a: ParticleId,
    pub b: ParticleId,
    pub rest_length: f32,
    /// Fraction of the error corrected per projection, in (0, 1].
    pub stiffness: f32,
    pub kind: ConstraintKind,
}

impl DistanceConstraint {
    pub fn new(a: ParticleId, b: ParticleId, rest_length: f32, stiffness: f32, kind: ConstraintKind) -> Self {
        Self {
            a,
            b,
            rest_length,
            stiffness,
            kind,
        }
    }

    /// Current length between the endpoints.
    pub fn length(&self, state: &ParticleState) -> f32 {
        (state.position(self.b.index()) - state.position(self.a.index())).length()
    }

    /// Absolute deviation from the rest length.
    pub fn error(&self, state: &ParticleState) -> f32 {
        (self.length(state) - self.rest_length).abs()
    }

    /// Moves both endpoints toward the rest length, weighted by inverse mass.
    ///
    /// Returns the absolute length error before projection.
    pub fn project(&self, state: &mut ParticleState) -> f32 {
        let (a, b) = (self.a.index(), self.b.index());
        let wa = state.inv_mass[a];
        let wb = state.inv_mass[b];
        let w = wa + wb;

        let dx = state.pos_x[b] - state.pos_x[a];
        let dy = state.pos_y[b] - state.pos_y[a];
        let dz = state.pos_z[b] - state.pos_z[a];
        let len = (dx * dx + dy * dy + dz * dz).sqrt();
        let err = len - self.rest_length;
        if w == 0.0 || len < 1e-9 {
            return err.abs();
        }

        let s = self.stiffness * err / (len * w);
        state.pos_x[a] += wa * s * dx;
        state.pos_y[a] += wa * s * dy;
        state.pos_z[a] += wa * s * dz;
        state.pos_x[b] -= wb * s * dx;
        state.pos_y[b] -= wb * s * dy;
        state.pos_z[b] -= wb * s * dz;
        err.abs()
    }
}
