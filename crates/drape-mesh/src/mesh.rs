//! Sub-mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Optional channels are represented by empty buffers, so the shape of a
//! sub-mesh is decided once at load time and never probed at runtime.

use drape_math::{Aabb, Vec3};
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

use crate::morph::MorphTargets;

/// Snapshot of undeformed vertex positions.
///
/// Body-relative deformation is always evaluated from this snapshot, so
/// applying it repeatedly with the same inputs yields the same buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestPose {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
}

/// One renderable piece of a garment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubMesh {
    /// Name of the piece (e.g. "sleeve_l", "body").
    pub name: String,

    // --- Vertex data (SoA) ---
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,

    /// Vertex normals. Empty when the source mesh carries none.
    pub normal_x: Vec<f32>,
    pub normal_y: Vec<f32>,
    pub normal_z: Vec<f32>,

    /// Triangle indices, flat `[t0v0, t0v1, t0v2, ...]`.
    /// Empty means non-indexed geometry (consecutive vertex triples).
    pub indices: Vec<u32>,

    /// Shape keys, when the asset exposes any.
    pub morph_targets: Option<MorphTargets>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) rest: Option<RestPose>,
}

impl SubMesh {
    /// Creates a sub-mesh from position triples without normals or indices.
    pub fn from_positions(name: impl Into<String>, positions: &[[f32; 3]]) -> Self {
        let mut mesh = Self {
            name: name.into(),
            ..Default::default()
        };
        mesh.pos_x = positions.iter().map(|p| p[0]).collect();
        mesh.pos_y = positions.iter().map(|p| p[1]).collect();
        mesh.pos_z = positions.iter().map(|p| p[2]).collect();
        mesh
    }

    /// Constructs a sub-mesh from interleaved AoS data.
    ///
    /// Converts `[x0, y0, z0, x1, y1, z1, ...]` to SoA layout. `normals`
    /// may be empty; otherwise it must match `positions` in length.
    pub fn from_interleaved(
        name: impl Into<String>,
        positions: &[f32],
        normals: &[f32],
        indices: &[u32],
    ) -> DrapeResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(DrapeError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }
        if !normals.is_empty() && normals.len() != positions.len() {
            return Err(DrapeError::InvalidMesh(format!(
                "Normal buffer length ({}) != position buffer length ({})",
                normals.len(),
                positions.len()
            )));
        }

        let mut mesh = Self {
            name: name.into(),
            ..Default::default()
        };
        for p in positions.chunks_exact(3) {
            mesh.pos_x.push(p[0]);
            mesh.pos_y.push(p[1]);
            mesh.pos_z.push(p[2]);
        }
        for n in normals.chunks_exact(3) {
            mesh.normal_x.push(n[0]);
            mesh.normal_y.push(n[1]);
            mesh.normal_z.push(n[2]);
        }
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }

    /// Attaches morph targets (builder style).
    pub fn with_morph_targets(mut self, targets: MorphTargets) -> Self {
        self.morph_targets = Some(targets);
        self
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles (indexed or soup).
    #[inline]
    pub fn triangle_count(&self) -> usize {
        if self.indices.is_empty() {
            self.vertex_count() / 3
        } else {
            self.indices.len() / 3
        }
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        if self.indices.is_empty() {
            let b = base as u32;
            [b, b + 1, b + 2]
        } else {
            [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
        }
    }

    /// Returns true if the sub-mesh carries a normal buffer.
    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normal_x.is_empty()
    }

    /// Returns true if the sub-mesh exposes at least one morph target.
    #[inline]
    pub fn has_morph_targets(&self) -> bool {
        self.morph_targets.as_ref().is_some_and(|m| !m.is_empty())
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the normal of vertex `i`.
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, x: f32, y: f32, z: f32) {
        self.pos_x[i] = x;
        self.pos_y[i] = y;
        self.pos_z[i] = z;
    }

    /// Iterates over all vertex positions.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.vertex_count()).map(move |i| self.position(i))
    }

    /// Bounding box of the current positions in local space.
    pub fn local_bounds(&self) -> Aabb {
        Aabb::from_points(self.positions())
    }

    /// Interleaved copy of the positions, ready for a vertex attribute.
    pub fn positions_interleaved(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertex_count() * 3);
        for i in 0..self.vertex_count() {
            out.extend_from_slice(&[self.pos_x[i], self.pos_y[i], self.pos_z[i]]);
        }
        out
    }

    /// Positions with the current morph influences blended in.
    ///
    /// For renderers that cannot evaluate shape keys themselves.
    pub fn morphed_positions(&self) -> Vec<f32> {
        let mut out = self.positions_interleaved();
        if let Some(morphs) = &self.morph_targets {
            for (i, p) in out.chunks_exact_mut(3).enumerate() {
                let d = morphs.blended_delta(i);
                p[0] += d[0];
                p[1] += d[1];
                p[2] += d[2];
            }
        }
        out
    }

    // ─── Rest pose ────────────────────────────────────────────

    /// Captures the current positions as the rest pose if none exists yet.
    pub fn capture_rest(&mut self) -> &RestPose {
        let n = self.vertex_count();
        if self.rest.as_ref().is_some_and(|r| r.x.len() != n) {
            // Topology changed since the snapshot; the old pose is meaningless.
            self.rest = None;
        }
        self.rest.get_or_insert_with(|| RestPose {
            x: self.pos_x.clone(),
            y: self.pos_y.clone(),
            z: self.pos_z.clone(),
        })
    }

    /// Returns the rest pose, if one has been captured.
    pub fn rest(&self) -> Option<&RestPose> {
        self.rest.as_ref()
    }

    /// Rest position of vertex `i`, or the current position without a rest pose.
    #[inline]
    pub fn rest_position(&self, i: usize) -> Vec3 {
        match &self.rest {
            Some(r) if r.x.len() == self.vertex_count() => Vec3::new(r.x[i], r.y[i], r.z[i]),
            _ => self.position(i),
        }
    }

    /// Iterates over rest positions (current positions without a rest pose).
    pub fn rest_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.vertex_count()).map(move |i| self.rest_position(i))
    }

    /// Bounding box of the rest pose (current positions without one).
    pub fn rest_bounds(&self) -> Aabb {
        Aabb::from_points(self.rest_positions())
    }

    /// Copies the rest pose back into the position buffers.
    ///
    /// Returns true if any coordinate changed.
    pub fn restore_rest(&mut self) -> bool {
        let Some(rest) = self.rest.as_ref().filter(|r| r.x.len() == self.pos_x.len()) else {
            return false;
        };
        let changed = rest.x != self.pos_x || rest.y != self.pos_y || rest.z != self.pos_z;
        if changed {
            self.pos_x.copy_from_slice(&rest.x);
            self.pos_y.copy_from_slice(&rest.y);
            self.pos_z.copy_from_slice(&rest.z);
        }
        changed
    }

    /// Validates sub-mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have consistent lengths
    /// - Triangle indices are within bounds
    /// - Morph dictionary indices and delta buffers are consistent
    pub fn validate(&self) -> DrapeResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(DrapeError::InvalidMesh(format!(
                "Sub-mesh '{}': position arrays have inconsistent lengths",
                self.name
            )));
        }
        if self.has_normals()
            && (self.normal_x.len() != n || self.normal_y.len() != n || self.normal_z.len() != n)
        {
            return Err(DrapeError::InvalidMesh(format!(
                "Sub-mesh '{}': normal arrays have inconsistent lengths",
                self.name
            )));
        }

        if self.indices.len() % 3 != 0 {
            return Err(DrapeError::InvalidMesh(format!(
                "Sub-mesh '{}': index count is not divisible by 3",
                self.name
            )));
        }
        if self.indices.is_empty() && n % 3 != 0 && n > 0 {
            tracing::debug!(
                sub_mesh = %self.name,
                vertices = n,
                "non-indexed sub-mesh has a trailing partial triangle"
            );
        }
        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(DrapeError::InvalidMesh(format!(
                    "Sub-mesh '{}': index {} at position {} is out of range (vertex count: {})",
                    self.name, idx, i, n
                )));
            }
        }

        if let Some(morphs) = &self.morph_targets {
            for (name, &idx) in &morphs.dictionary {
                if idx >= morphs.influences.len() {
                    return Err(DrapeError::InvalidMesh(format!(
                        "Morph target '{name}' points past the influence array"
                    )));
                }
                if let Some(deltas) = morphs.deltas.get(idx) {
                    if !deltas.is_empty() && deltas.len() != n {
                        return Err(DrapeError::InvalidMesh(format!(
                            "Morph target '{name}' has {} deltas for {} vertices",
                            deltas.len(),
                            n
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
