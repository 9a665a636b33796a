//! Rectangular cloth grids.

use drape_math::Vec3;
use drape_mesh::generators::grid_indices;
use drape_types::{DrapeError, DrapeResult, ParticleId};

use crate::config::ClothConfig;
use crate::constraint::{ConstraintKind, DistanceConstraint};
use crate::state::ParticleState;

/// Read-only view of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClothParticle {
    pub id: ParticleId,
    pub column: usize,
    pub row: usize,
    pub position: Vec3,
    pub pinned: bool,
}

/// Particles and constraints of one cloth panel.
///
/// Particles are row-major from the top row down: particle `(i, j)` (column
/// `i`, row `j`) has index `j · (segments_x + 1) + i`. Row 0 is pinned.
#[derive(Debug, Clone)]
pub struct ClothGrid {
    pub state: ParticleState,
    pub constraints: Vec<DistanceConstraint>,
    pub segments_x: usize,
    pub segments_y: usize,
    pub width: f32,
    pub height: f32,
}

impl ClothGrid {
    pub fn particle_count(&self) -> usize {
        self.state.count
    }

    pub fn columns(&self) -> usize {
        self.segments_x + 1
    }

    pub fn rows(&self) -> usize {
        self.segments_y + 1
    }

    /// Particle index of column `i`, row `j`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        j * self.columns() + i
    }

    /// View of particle `index`.
    pub fn particle(&self, index: usize) -> ClothParticle {
        ClothParticle {
            id: ParticleId(index as u32),
            column: index % self.columns(),
            row: index / self.columns(),
            position: self.state.position(index),
            pinned: self.state.is_pinned(index),
        }
    }

    pub fn particles(&self) -> impl Iterator<Item = ClothParticle> + '_ {
        (0..self.particle_count()).map(|i| self.particle(i))
    }

    /// Triangle list matching the particle order.
    pub fn render_indices(&self) -> Vec<u32> {
        grid_indices(self.segments_x, self.segments_y)
    }

    pub fn count_of(&self, kind: ConstraintKind) -> usize {
        self.constraints.iter().filter(|c| c.kind == kind).count()
    }
}

/// Expected constraint count for an `m × n` segment grid.
pub fn expected_constraint_count(segments_x: usize, segments_y: usize) -> usize {
    let (m, n) = (segments_x, segments_y);
    m * (n + 1) + n * (m + 1) + 2 * m * n
}

/// Builds a cloth panel hanging straight down from `origin`.
///
/// `origin` is the top-center of the panel; the panel lies in the XY plane
/// at `origin.z`. The top row is pinned.
pub fn create_cloth_grid(
    width: f32,
    height: f32,
    segments_x: usize,
    segments_y: usize,
    origin: Vec3,
    config: &ClothConfig,
) -> DrapeResult<ClothGrid> {
    if segments_x == 0 || segments_y == 0 {
        return Err(DrapeError::InvalidGrid(format!(
            "segment counts must be positive, got {segments_x}×{segments_y}"
        )));
    }
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        return Err(DrapeError::InvalidGrid(format!(
            "panel size must be positive and finite, got {width}×{height}"
        )));
    }
    if !origin.is_finite() {
        return Err(DrapeError::InvalidGrid("origin must be finite".into()));
    }
    let cols = segments_x + 1;
    let rows = segments_y + 1;
    let count = cols
        .checked_mul(rows)
        .filter(|&n| n <= u32::MAX as usize)
        .ok_or_else(|| DrapeError::InvalidGrid(format!("{cols}×{rows} particles overflow")))?;

    let dx = width / segments_x as f32;
    let dy = height / segments_y as f32;
    let left = origin.x - width / 2.0;

    let mut positions = Vec::with_capacity(count);
    let mut pinned = Vec::with_capacity(count);
    for j in 0..rows {
        for i in 0..cols {
            positions.push(Vec3::new(left + i as f32 * dx, origin.y - j as f32 * dy, origin.z));
            pinned.push(j == 0);
        }
    }
    let state = ParticleState::from_positions(&positions, config.particle_mass, &pinned)?;

    let id = |i: usize, j: usize| ParticleId((j * cols + i) as u32);
    let diagonal = (dx * dx + dy * dy).sqrt();
    let mut constraints = Vec::with_capacity(expected_constraint_count(segments_x, segments_y));
    for j in 0..rows {
        for i in 0..segments_x {
            constraints.push(DistanceConstraint::new(
                id(i, j),
                id(i + 1, j),
                dx,
                config.stiffness,
                ConstraintKind::Horizontal,
            ));
        }
    }
    for j in 0..segments_y {
        for i in 0..cols {
            constraints.push(DistanceConstraint::new(
                id(i, j),
                id(i, j + 1),
                dy,
                config.stiffness,
                ConstraintKind::Vertical,
            ));
        }
    }
    for j in 0..segments_y {
        for i in 0..segments_x {
            constraints.push(DistanceConstraint::new(
                id(i, j),
                id(i + 1, j + 1),
                diagonal,
                config.shear_stiffness,
                ConstraintKind::Shear,
            ));
            constraints.push(DistanceConstraint::new(
                id(i + 1, j),
                id(i, j + 1),
                diagonal,
                config.shear_stiffness,
                ConstraintKind::Shear,
            ));
        }
    }

    Ok(ClothGrid {
        state,
        constraints,
        segments_x,
        segments_y,
        width,
        height,
    })
}
