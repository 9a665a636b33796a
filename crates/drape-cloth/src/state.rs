//! Particle state: SoA buffers for all per-particle data.
//!
//! This is the primary mutable data structure during simulation.
//! The solver reads and writes these buffers each sub-step.

use drape_math::{rotate_xz, Vec3};
use drape_types::{DrapeError, DrapeResult};

/// SoA particle buffers.
///
/// # Layout
///
/// All arrays have length `count`. Channels are stored contiguously:
/// ```text
/// pos_x: [x0, x1, x2, ...]
/// pos_y: [y0, y1, y2, ...]
/// ...
/// ```
///
/// Pinned particles carry `mass = 0` and `inv_mass = 0` and are never
/// moved by integration or constraint projection.
#[derive(Debug, Clone)]
pub struct ParticleState {
    /// Number of particles.
    pub count: usize,

    // ─── Position (current) ───
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,

    // ─── Position at the start of the sub-step ───
    pub prev_x: Vec<f32>,
    pub prev_y: Vec<f32>,
    pub prev_z: Vec<f32>,

    // ─── Velocity ───
    pub vel_x: Vec<f32>,
    pub vel_y: Vec<f32>,
    pub vel_z: Vec<f32>,

    // ─── Accumulated external force (wind), cleared after each sub-step ───
    pub force_x: Vec<f32>,
    pub force_y: Vec<f32>,
    pub force_z: Vec<f32>,

    pub mass: Vec<f32>,
    pub inv_mass: Vec<f32>,
}

impl ParticleState {
    /// Initialize state from positions and a pin mask.
    ///
    /// Free particles get `particle_mass`; velocities and forces start at zero.
    pub fn from_positions(
        positions: &[Vec3],
        particle_mass: f32,
        pinned: &[bool],
    ) -> DrapeResult<Self> {
        let n = positions.len();
        if pinned.len() != n {
            return Err(DrapeError::InvalidGrid(format!(
                "pin mask length ({}) != particle count ({})",
                pinned.len(),
                n
            )));
        }
        if !(particle_mass > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "particle mass must be positive, got {particle_mass}"
            )));
        }

        let mass: Vec<f32> = pinned
            .iter()
            .map(|&p| if p { 0.0 } else { particle_mass })
            .collect();
        let inv_mass = mass
            .iter()
            .map(|&m| if m > 0.0 { 1.0 / m } else { 0.0 })
            .collect();

        let pos_x: Vec<f32> = positions.iter().map(|p| p.x).collect();
        let pos_y: Vec<f32> = positions.iter().map(|p| p.y).collect();
        let pos_z: Vec<f32> = positions.iter().map(|p| p.z).collect();

        Ok(Self {
            count: n,
            prev_x: pos_x.clone(),
            prev_y: pos_y.clone(),
            prev_z: pos_z.clone(),
            pos_x,
            pos_y,
            pos_z,
            vel_x: vec![0.0; n],
            vel_y: vec![0.0; n],
            vel_z: vec![0.0; n],
            force_x: vec![0.0; n],
            force_y: vec![0.0; n],
            force_z: vec![0.0; n],
            mass,
            inv_mass,
        })
    }

    #[inline]
    pub fn is_pinned(&self, i: usize) -> bool {
        self.inv_mass[i] == 0.0
    }

    /// Number of pinned particles.
    pub fn pinned_count(&self) -> usize {
        self.inv_mass.iter().filter(|&&w| w == 0.0).count()
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    #[inline]
    pub fn velocity(&self, i: usize) -> Vec3 {
        Vec3::new(self.vel_x[i], self.vel_y[i], self.vel_z[i])
    }

    /// Adds to the external force of a free particle. Pinned particles ignore it.
    pub fn add_force(&mut self, i: usize, f: Vec3) {
        if self.is_pinned(i) {
            return;
        }
        self.force_x[i] += f.x;
        self.force_y[i] += f.y;
        self.force_z[i] += f.z;
    }

    pub fn clear_forces(&mut self) {
        self.force_x.fill(0.0);
        self.force_y.fill(0.0);
        self.force_z.fill(0.0);
    }

    /// Save current positions as "previous" for the next sub-step.
    pub fn save_previous(&mut self) {
        self.prev_x.copy_from_slice(&self.pos_x);
        self.prev_y.copy_from_slice(&self.pos_y);
        self.prev_z.copy_from_slice(&self.pos_z);
    }

    /// Symplectic Euler prediction: `v += (g + f/m)·dt`, `v *= 1 − damping`, `p += v·dt`.
    pub fn integrate(&mut self, dt: f32, gravity: [f32; 3], damping: f32) {
        let keep = 1.0 - damping;
        for i in 0..self.count {
            let w = self.inv_mass[i];
            if w == 0.0 {
                continue;
            }
            self.vel_x[i] = (self.vel_x[i] + (gravity[0] + self.force_x[i] * w) * dt) * keep;
            self.vel_y[i] = (self.vel_y[i] + (gravity[1] + self.force_y[i] * w) * dt) * keep;
            self.vel_z[i] = (self.vel_z[i] + (gravity[2] + self.force_z[i] * w) * dt) * keep;

            self.pos_x[i] += self.vel_x[i] * dt;
            self.pos_y[i] += self.vel_y[i] * dt;
            self.pos_z[i] += self.vel_z[i] * dt;
        }
    }

    /// Update free velocities from position change: `v = (p − p_prev) / dt`.
    pub fn update_velocities(&mut self, dt: f32) {
        let inv_dt = 1.0 / dt;
        for i in 0..self.count {
            if self.inv_mass[i] == 0.0 {
                continue;
            }
            self.vel_x[i] = (self.pos_x[i] - self.prev_x[i]) * inv_dt;
            self.vel_y[i] = (self.pos_y[i] - self.prev_y[i]) * inv_dt;
            self.vel_z[i] = (self.pos_z[i] - self.prev_z[i]) * inv_dt;
        }
    }

    /// Rotates free particles' (x, z) about the world Y axis.
    ///
    /// Velocities rotate with them so the motion stays in the turning frame.
    pub fn rotate_free(&mut self, angle: f32) {
        for i in 0..self.count {
            if self.inv_mass[i] == 0.0 {
                continue;
            }
            (self.pos_x[i], self.pos_z[i]) = rotate_xz(self.pos_x[i], self.pos_z[i], angle);
            (self.prev_x[i], self.prev_z[i]) = rotate_xz(self.prev_x[i], self.prev_z[i], angle);
            (self.vel_x[i], self.vel_z[i]) = rotate_xz(self.vel_x[i], self.vel_z[i], angle);
        }
    }

    /// Compute kinetic energy of free particles: 0.5 · Σ m_i · ‖v_i‖².
    pub fn kinetic_energy(&self) -> f64 {
        let mut energy = 0.0f64;
        for i in 0..self.count {
            let vx = self.vel_x[i] as f64;
            let vy = self.vel_y[i] as f64;
            let vz = self.vel_z[i] as f64;
            energy += 0.5 * self.mass[i] as f64 * (vx * vx + vy * vy + vz * vz);
        }
        energy
    }
}
