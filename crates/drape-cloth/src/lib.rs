//! # drape-cloth
//!
//! Mass-spring cloth with distance constraints, advanced at a fixed rate.
//!
//! ## Key Types
//!
//! - [`ClothWorld`]: Lifecycle (`Uninitialized → Active → Disposed`),
//!   fixed sub-stepping, wind, and mannequin rotation
//! - [`ClothGrid`]: Pinned-top particle panel with structural and shear constraints
//! - [`ParticleState`]: SoA buffers for positions, velocities, forces, masses
//! - [`SolverStrategy`]: Per-sub-step integration scheme
//! - [`ColliderSet`]: Torso/shoulder/chest shapes derived from measurements
//!
//! Colliders are computed and rotated with the mannequin but the solver does
//! not resolve contacts against them.

pub mod collider;
pub mod config;
pub mod constraint;
pub mod grid;
pub mod relax;
pub mod state;
pub mod strategy;
pub mod world;

pub use collider::{create_mannequin_colliders, Collider, ColliderRole, ColliderSet, ColliderShape};
pub use config::ClothConfig;
pub use constraint::{ConstraintKind, DistanceConstraint};
pub use grid::{create_cloth_grid, expected_constraint_count, ClothGrid, ClothParticle};
pub use relax::GaussSeidelRelaxation;
pub use state::ParticleState;
pub use strategy::{SolverStrategy, StepResult};
pub use world::{ClothWorld, StepReport, WorldPhase};
