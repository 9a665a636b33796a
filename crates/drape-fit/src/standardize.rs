//! Orientation standardization contract.
//!
//! Raw meshes arrive in arbitrary frames. A standardizer sets the garment
//! transform so that its world-space bounds are upright, centered on the
//! origin, and one unit tall. Detecting the up axis of a photo-generated
//! mesh is the job of an external step; the implementations here assume
//! the mesh is already upright.

use drape_mesh::{GarmentMesh, Transform};

/// Brings a garment into the canonical frame by editing its transform.
pub trait OrientationStandardizer {
    fn standardize(&self, mesh: &mut GarmentMesh);
}

/// Centers the rest-pose bounding box and scales it to unit height.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsStandardizer;

impl OrientationStandardizer for BoundsStandardizer {
    fn standardize(&self, mesh: &mut GarmentMesh) {
        let bounds = mesh.rest_local_bounds();
        let height = bounds.height();
        if bounds.is_empty() || !(height > f32::EPSILON) || !height.is_finite() {
            tracing::debug!(
                vertices = mesh.vertex_count(),
                height,
                "garment has no vertical extent; keeping identity transform"
            );
            return;
        }
        let scale = 1.0 / height;
        mesh.transform = Transform {
            translation: -bounds.center() * scale,
            rotation: mesh.transform.rotation,
            scale,
        };
    }
}

/// Leaves the transform untouched (for meshes authored in the canonical frame).
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStandardizer;

impl OrientationStandardizer for IdentityStandardizer {
    fn standardize(&self, _mesh: &mut GarmentMesh) {}
}

impl<T: OrientationStandardizer + ?Sized> OrientationStandardizer for &T {
    fn standardize(&self, mesh: &mut GarmentMesh) {
        (**self).standardize(mesh)
    }
}

impl<T: OrientationStandardizer + ?Sized> OrientationStandardizer for Box<T> {
    fn standardize(&self, mesh: &mut GarmentMesh) {
        (**self).standardize(mesh)
    }
}
