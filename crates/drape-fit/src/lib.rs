//! # drape-fit
//!
//! Measurement-driven garment fitting.
//!
//! ## Pipeline
//!
//! ```text
//! GarmentDescriptor ─► classify zone
//!        │
//! GarmentMesh ──► OrientationStandardizer ─► GarmentNormalizer ─► scale, anchor
//!        │
//!        └──► BodyDeformationAdapter (morph mirroring │ lattice) ─► deformed vertices
//! ```
//!
//! [`GarmentFitter`] runs both stages and writes the final transform.
//! Every stage degrades instead of failing; fallbacks are logged through
//! `tracing` and reported on the returned values.

pub mod adapt;
pub mod aliases;
pub mod config;
pub mod descriptor;
pub mod normalize;
pub mod pipeline;
pub mod standardize;

pub use adapt::{AdaptReport, BodyDeformationAdapter, DeformStrategy};
pub use aliases::{MorphAlias, MorphAliasTable};
pub use config::FitConfig;
pub use descriptor::{classify_body_zone, GarmentDescriptor};
pub use normalize::{GarmentNormalizer, NormalizeResult, SliceSample};
pub use pipeline::{FitResult, GarmentFitter};
pub use standardize::{BoundsStandardizer, IdentityStandardizer, OrientationStandardizer};
