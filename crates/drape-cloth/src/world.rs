//! The cloth world: lifecycle, fixed-step scheduling, and per-frame forcing.
//!
//! ```text
//! Uninitialized ──build──► Active ──dispose──► Disposed
//!                           │  ▲
//!                           └──┘ build (replace grid)
//! ```
//!
//! Stepping, wind, and rotation are no-ops outside `Active`.

use drape_body::BodyMeasurements;
use drape_math::Vec3;
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

use crate::collider::ColliderSet;
use crate::config::ClothConfig;
use crate::grid::{create_cloth_grid, ClothGrid};
use crate::relax::GaussSeidelRelaxation;
use crate::strategy::SolverStrategy;

/// Lifecycle phase of a [`ClothWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorldPhase {
    Uninitialized,
    Active,
    Disposed,
}

impl WorldPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Active => "active",
            Self::Disposed => "disposed",
        }
    }
}

/// What one `step` call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Fixed sub-steps integrated.
    pub substeps: u32,
    /// Frame time discarded because the sub-step cap was hit (seconds).
    pub dropped_time: f32,
    /// Largest constraint error in the last sub-step.
    pub max_error: f32,
}

/// Cloth panel plus mannequin colliders, advanced at a fixed rate.
pub struct ClothWorld {
    config: ClothConfig,
    solver: Box<dyn SolverStrategy>,
    phase: WorldPhase,
    grid: Option<ClothGrid>,
    colliders: ColliderSet,
    accumulator: f32,
    sim_time: f64,
    last_error: f32,
}

impl ClothWorld {
    /// Creates an uninitialized world using Gauss-Seidel relaxation.
    pub fn new(config: ClothConfig) -> DrapeResult<Self> {
        Self::with_solver(config, Box::new(GaussSeidelRelaxation::new()))
    }

    pub fn with_solver(config: ClothConfig, solver: Box<dyn SolverStrategy>) -> DrapeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            solver,
            phase: WorldPhase::Uninitialized,
            grid: None,
            colliders: ColliderSet::default(),
            accumulator: 0.0,
            sim_time: 0.0,
            last_error: 0.0,
        })
    }

    /// Builds the cloth grid and colliders and enters `Active`.
    ///
    /// Invalid grid parameters leave the world as it was. Building again
    /// while active replaces the grid and resets the clock.
    pub fn build(
        &mut self,
        width: f32,
        height: f32,
        segments_x: usize,
        segments_y: usize,
        origin: Vec3,
        measurements: &BodyMeasurements,
    ) -> DrapeResult<()> {
        if self.phase == WorldPhase::Disposed {
            return Err(DrapeError::InvalidState {
                expected: "uninitialized or active",
                found: self.phase.name(),
            });
        }
        let grid = create_cloth_grid(width, height, segments_x, segments_y, origin, &self.config)?;
        let colliders = ColliderSet::from_measurements(measurements);
        tracing::info!(
            particles = grid.particle_count(),
            constraints = grid.constraints.len(),
            colliders = colliders.len(),
            solver = self.solver.name(),
            "cloth world active"
        );

        self.grid = Some(grid);
        self.colliders = colliders;
        self.phase = WorldPhase::Active;
        self.accumulator = 0.0;
        self.sim_time = 0.0;
        self.last_error = 0.0;
        Ok(())
    }

    pub fn phase(&self) -> WorldPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == WorldPhase::Active
    }

    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    pub fn grid(&self) -> Option<&ClothGrid> {
        self.grid.as_ref()
    }

    pub fn colliders(&self) -> &ColliderSet {
        &self.colliders
    }

    /// Advances by `dt` seconds of frame time in fixed sub-steps.
    ///
    /// Leftover time below one sub-step carries to the next call. Backlog
    /// beyond `max_substeps` is discarded. Non-positive or non-finite `dt`
    /// and calls outside `Active` do nothing.
    pub fn step(&mut self, dt: f32) -> StepReport {
        if self.phase != WorldPhase::Active || !(dt.is_finite() && dt > 0.0) {
            return StepReport::default();
        }
        let Some(grid) = self.grid.as_mut() else {
            return StepReport::default();
        };

        let fixed = self.config.fixed_dt;
        self.accumulator += dt;
        let due = (self.accumulator / fixed).floor() as u32;
        let substeps = due.min(self.config.max_substeps);
        let mut dropped_time = 0.0;
        if due > substeps {
            dropped_time = self.accumulator - substeps as f32 * fixed;
            self.accumulator = 0.0;
            tracing::debug!(due, substeps, dropped_time, "sub-step cap reached");
        } else {
            self.accumulator -= substeps as f32 * fixed;
        }

        for _ in 0..substeps {
            let result = self
                .solver
                .substep(&mut grid.state, &grid.constraints, &self.config, fixed);
            self.last_error = result.max_error;
            self.sim_time += fixed as f64;
        }

        StepReport {
            substeps,
            dropped_time,
            max_error: self.last_error,
        }
    }

    /// Adds a time-varying wind force to every free particle.
    ///
    /// Particle `i` at simulated time `t` receives
    /// `(sin(t·f₀ + i·k₀), 0, ½·cos(t·f₁ + i·k₁)) · strength`. Forces
    /// accumulate until the next integrated sub-step consumes them.
    pub fn apply_wind(&mut self, strength: f32) {
        if self.phase != WorldPhase::Active || strength == 0.0 || !strength.is_finite() {
            return;
        }
        let Some(grid) = self.grid.as_mut() else {
            return;
        };
        let t = self.sim_time as f32;
        let [f0, f1] = self.config.wind_frequency;
        let [k0, k1] = self.config.wind_phase;
        for i in 0..grid.state.count {
            let phase = i as f32;
            let force = Vec3::new(
                (t * f0 + phase * k0).sin(),
                0.0,
                (t * f1 + phase * k1).cos() * 0.5,
            ) * strength;
            grid.state.add_force(i, force);
        }
    }

    /// Turns the mannequin about world Y: colliders and free particles rotate
    /// by `angle`; pinned particles stay put.
    pub fn rotate_mannequin(&mut self, angle: f32) {
        if self.phase != WorldPhase::Active || angle == 0.0 || !angle.is_finite() {
            return;
        }
        self.colliders.rotate(angle);
        if let Some(grid) = self.grid.as_mut() {
            grid.state.rotate_free(angle);
        }
    }

    /// Per-frame entry point: wind, then rotation, then stepping.
    pub fn advance(&mut self, dt: f32, wind_strength: f32, rotation_delta: f32) -> StepReport {
        self.apply_wind(wind_strength);
        self.rotate_mannequin(rotation_delta);
        self.step(dt)
    }

    /// Drops the grid and colliders. The world cannot be reactivated.
    pub fn dispose(&mut self) {
        if self.phase == WorldPhase::Disposed {
            return;
        }
        tracing::debug!(sim_time = self.sim_time, "cloth world disposed");
        self.grid = None;
        self.colliders = ColliderSet::default();
        self.phase = WorldPhase::Disposed;
    }

    // ─── Renderer output ──────────────────────────────────────

    /// Interleaved `[x0, y0, z0, x1, ...]` particle positions (empty when inactive).
    pub fn positions(&self) -> Vec<f32> {
        let Some(grid) = self.grid.as_ref() else {
            return Vec::new();
        };
        let s = &grid.state;
        let mut out = Vec::with_capacity(s.count * 3);
        for i in 0..s.count {
            out.extend_from_slice(&[s.pos_x[i], s.pos_y[i], s.pos_z[i]]);
        }
        out
    }

    /// Writes interleaved positions into a render vertex buffer.
    pub fn write_positions(&self, out: &mut [f32]) -> DrapeResult<()> {
        let grid = self.grid.as_ref().ok_or(DrapeError::InvalidState {
            expected: "active",
            found: self.phase.name(),
        })?;
        let s = &grid.state;
        if out.len() != s.count * 3 {
            return Err(DrapeError::InvalidMesh(format!(
                "vertex buffer holds {} floats, cloth needs {}",
                out.len(),
                s.count * 3
            )));
        }
        for (i, p) in out.chunks_exact_mut(3).enumerate() {
            p[0] = s.pos_x[i];
            p[1] = s.pos_y[i];
            p[2] = s.pos_z[i];
        }
        Ok(())
    }

    /// Triangle list matching [`positions`](Self::positions).
    pub fn render_indices(&self) -> Vec<u32> {
        self.grid
            .as_ref()
            .map(ClothGrid::render_indices)
            .unwrap_or_default()
    }

    // ─── Diagnostics ──────────────────────────────────────────

    /// Simulated seconds since the grid was built.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.grid
            .as_ref()
            .map_or(0.0, |g| g.state.kinetic_energy())
    }

    /// Largest current deviation of any constraint from its rest length.
    pub fn max_constraint_error(&self) -> f32 {
        self.grid.as_ref().map_or(0.0, |g| {
            g.constraints
                .iter()
                .map(|c| c.error(&g.state))
                .fold(0.0, f32::max)
        })
    }

    /// Closest approach of free particles to the colliders.
    pub fn min_clearance(&self) -> Option<f32> {
        let grid = self.grid.as_ref()?;
        self.colliders.min_clearance(&grid.state)
    }
}
