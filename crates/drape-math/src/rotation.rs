//! Rotations about the world Y (up) axis.
//!
//! The mannequin turns about Y; cloth particles and colliders follow it
//! by rotating their horizontal (x, z) coordinates.

use glam::Vec3;

/// Rotates the horizontal pair `(x, z)` by `angle` radians about +Y.
///
/// Uses the same handedness as [`Quat::from_rotation_y`], so the result
/// matches rotating `Vec3::new(x, _, z)` by that quaternion.
#[inline]
pub fn rotate_xz(x: f32, z: f32, angle: f32) -> (f32, f32) {
    let (s, c) = angle.sin_cos();
    (c * x + s * z, -s * x + c * z)
}

/// Rotates a point about the world Y axis through the origin.
#[inline]
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (x, z) = rotate_xz(p.x, p.z, angle);
    Vec3::new(x, p.y, z)
}

