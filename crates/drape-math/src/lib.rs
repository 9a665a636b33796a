//! # drape-math
//!
//! Math primitives for the Drape fitting engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Quat`, etc.)
//! - Axis-aligned bounding boxes for garment and mannequin extents
//! - Rotation helpers about the world Y axis

pub mod bounds;
pub mod rotation;

pub use bounds::Aabb;
pub use rotation::{rotate_xz, rotate_y};

// Re-export glam types as the canonical math types for Drape.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
