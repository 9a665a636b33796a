//! Garment-level container: sub-meshes, metadata, and world transform.

use drape_math::{Aabb, Quat, Vec3};
use drape_types::{BodyZone, DrapeResult, GarmentSource};
use serde::{Deserialize, Serialize};

use crate::mesh::SubMesh;

/// Rigid transform with uniform scale, applied as `R · (s · p) + t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: 1.0,
    };

    /// Transforms a local-space point into world space.
    #[inline]
    pub fn apply(&self, p: Vec3) -> Vec3 {
        self.rotation * (p * self.scale) + self.translation
    }

    /// Returns true if this is (exactly) the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A garment: ordered sub-meshes plus metadata attached to the whole garment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GarmentMesh {
    /// Renderable pieces, in asset order.
    pub sub_meshes: Vec<SubMesh>,
    /// Body zone the garment is worn on.
    pub body_zone: BodyZone,
    /// Where the asset came from.
    pub source: GarmentSource,
    /// Local → world transform owned by the fitting pipeline.
    pub transform: Transform,
}

impl GarmentMesh {
    /// Creates a garment with identity transform and default metadata.
    pub fn new(sub_meshes: Vec<SubMesh>) -> Self {
        Self {
            sub_meshes,
            ..Default::default()
        }
    }

    /// Sets the body zone (builder style).
    pub fn with_zone(mut self, zone: BodyZone) -> Self {
        self.body_zone = zone;
        self
    }

    /// Sets the source classification (builder style).
    pub fn with_source(mut self, source: GarmentSource) -> Self {
        self.source = source;
        self
    }

    /// Total vertex count across all sub-meshes.
    pub fn vertex_count(&self) -> usize {
        self.sub_meshes.iter().map(|m| m.vertex_count()).sum()
    }

    /// Returns true if any sub-mesh exposes morph targets.
    pub fn has_morph_targets(&self) -> bool {
        self.sub_meshes.iter().any(|m| m.has_morph_targets())
    }

    /// Resets the world transform to identity.
    pub fn reset_transform(&mut self) {
        self.transform = Transform::IDENTITY;
    }

    /// Iterates over all positions in local space.
    pub fn local_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.sub_meshes.iter().flat_map(|m| m.positions())
    }

    /// Iterates over all positions transformed into world space.
    pub fn world_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let t = self.transform;
        self.local_positions().map(move |p| t.apply(p))
    }

    /// Bounding box of all sub-meshes in local space.
    pub fn local_bounds(&self) -> Aabb {
        Aabb::from_points(self.local_positions())
    }

    /// Bounding box of all sub-meshes in world space.
    pub fn world_bounds(&self) -> Aabb {
        Aabb::from_points(self.world_positions())
    }

    /// Iterates over all rest positions in local space.
    ///
    /// Sub-meshes without a captured rest pose contribute their current
    /// positions, so this equals [`local_positions`](Self::local_positions)
    /// until the first deformation.
    pub fn rest_local_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.sub_meshes.iter().flat_map(|m| m.rest_positions())
    }

    /// Iterates over all rest positions transformed into world space.
    pub fn rest_world_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let t = self.transform;
        self.rest_local_positions().map(move |p| t.apply(p))
    }

    /// Bounding box of the rest pose in local space.
    pub fn rest_local_bounds(&self) -> Aabb {
        Aabb::from_points(self.rest_local_positions())
    }

    /// Bounding box of the rest pose in world space.
    pub fn rest_world_bounds(&self) -> Aabb {
        Aabb::from_points(self.rest_world_positions())
    }

    /// Validates every sub-mesh.
    pub fn validate(&self) -> DrapeResult<()> {
        self.sub_meshes.iter().try_for_each(|m| m.validate())
    }
}
