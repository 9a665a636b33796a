//! Solver strategy trait: the seam between the cloth world and the
//! per-sub-step integration scheme.

use crate::config::ClothConfig;
use crate::constraint::DistanceConstraint;
use crate::state::ParticleState;

/// Result of one sub-step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepResult {
    /// Constraint sweeps performed.
    pub iterations: u32,
    /// Largest constraint error seen in the final sweep (before projection).
    pub max_error: f32,
}

/// Advances particles by one fixed sub-step.
///
/// The world calls `substep` once per accumulated `fixed_dt`:
///
/// ```text
/// world.step(frame_dt)
///   └─ for each fixed sub-step: solver.substep(state, constraints, config, fixed_dt)
/// ```
///
/// Implementations must leave pinned particles (`inv_mass == 0`) untouched
/// and clear the external force accumulator once it has been integrated.
pub trait SolverStrategy: Send {
    fn substep(
        &mut self,
        state: &mut ParticleState,
        constraints: &[DistanceConstraint],
        config: &ClothConfig,
        dt: f32,
    ) -> StepResult;

    /// Returns the solver's name.
    fn name(&self) -> &str;
}
