//! # drape-mesh
//!
//! Garment mesh representation with Structure-of-Arrays (SoA) layout.
//!
//! ## Key Types
//!
//! - [`GarmentMesh`]: An ordered list of sub-meshes plus garment-level
//!   metadata (body zone, source) and a world transform.
//! - [`SubMesh`]: Positions, optional normals, optional indices and
//!   optional morph targets, decided once at load time.
//! - [`MorphTargets`]: Named shape keys with blendable influences.
//! - Procedural generators for tests and demos (quad grids, garment tubes).

pub mod garment;
pub mod generators;
pub mod mesh;
pub mod morph;
pub mod normals;

pub use garment::{GarmentMesh, Transform};
pub use mesh::SubMesh;
pub use morph::MorphTargets;
