//! Position-based Gauss-Seidel relaxation.
//!
//! Each sub-step integrates gravity and accumulated forces, then sweeps the
//! distance constraints in order, projecting each in place. Velocities are
//! rebuilt from the corrected positions.

use crate::config::ClothConfig;
use crate::constraint::DistanceConstraint;
use crate::state::ParticleState;
use crate::strategy::{SolverStrategy, StepResult};

/// Sequential distance-constraint relaxation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussSeidelRelaxation;

impl GaussSeidelRelaxation {
    pub fn new() -> Self {
        Self
    }
}

impl SolverStrategy for GaussSeidelRelaxation {
    fn substep(
        &mut self,
        state: &mut ParticleState,
        constraints: &[DistanceConstraint],
        config: &ClothConfig,
        dt: f32,
    ) -> StepResult {
        // 1. Save start-of-step positions
        state.save_previous();

        // 2. Predict under gravity and external forces
        state.integrate(dt, config.gravity, config.damping);
        state.clear_forces();

        // 3. Relax
        let iterations = config.effective_iterations();
        let mut max_error = 0.0f32;
        for _ in 0..iterations {
            max_error = 0.0;
            for c in constraints {
                max_error = max_error.max(c.project(state));
            }
        }

        // 4. Velocities from the corrected positions
        state.update_velocities(dt);

        StepResult {
            iterations,
            max_error,
        }
    }

    fn name(&self) -> &str {
        "GaussSeidelRelaxation"
    }
}
