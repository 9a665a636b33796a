//! Physical constants and fitting defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Fixed cloth simulation timestep (seconds). 1/60th of a second.
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Minimum number of constraint relaxation iterations per sub-step.
pub const MIN_SOLVER_ITERATIONS: u32 = 10;

/// Reference body height (cm) that collider layouts are authored for.
pub const REFERENCE_HEIGHT_CM: f32 = 170.0;

/// Lower bound of the garment scale clamp.
pub const MIN_GARMENT_SCALE: f32 = 0.1;

/// Upper bound of the garment scale clamp.
pub const MAX_GARMENT_SCALE: f32 = 5.0;

/// Ease multiplier for lower-body garments (sit looser than the body).
pub const LOWER_BODY_EASE: f32 = 1.08;

/// Minimum number of in-band vertices for a trusted slice-width sample.
pub const MIN_SLICE_SAMPLES: usize = 5;

/// Mannequin morph influences at or below this value are treated as zero.
pub const MORPH_INFLUENCE_THRESHOLD: f32 = 0.01;

/// Relative measurement deviation below which lattice zones are skipped.
pub const LATTICE_TOLERANCE: f32 = 0.03;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;
