//! Fitting event types.
//!
//! Structured events emitted at component boundaries. Events are
//! lightweight value types that carry just enough data to be useful
//! for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// An event emitted by the fitting engine, tagged with a frame index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitEvent {
    /// Frame number (0 for one-shot fitting operations).
    pub frame: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// A garment was normalized against a mannequin.
    Normalized {
        /// Body zone name ("upper" / "lower").
        zone: String,
        /// Uniform scale handed to the renderer.
        scale: f32,
        /// Vertical anchor (world units).
        anchor_y: f32,
        /// The slice sample was too small and the bounding box was used.
        slice_fallback: bool,
        /// No live landmark was available.
        landmark_fallback: bool,
    },

    /// Body-relative deformation finished.
    Deformed {
        /// Strategy name ("morph", "lattice", "none").
        strategy: String,
        /// Morph targets copied from the mannequin.
        mapped_targets: u32,
        /// Vertices moved by lattice deformation.
        displaced_vertices: u32,
    },

    /// A cloth grid became active.
    ClothBuilt {
        particles: u32,
        constraints: u32,
        colliders: u32,
    },

    /// One frame of cloth simulation completed.
    ClothStep {
        /// Fixed sub-steps integrated this frame.
        substeps: u32,
        /// Total simulated time (seconds).
        sim_time: f64,
        /// Kinetic energy of free particles.
        kinetic_energy: f64,
    },
}

impl FitEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u32, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
