//! # drape-body
//!
//! Body description for garment fitting.
//!
//! ## Key Types
//!
//! - [`BodyMeasurements`]: six scalar measurements plus gender; BMI derived.
//! - [`BodyZoneTable`] / [`DeformationZoneTable`]: constant lookup tables
//!   injected into the fitting components.
//! - [`MannequinQuery`]: the interface the renderer's mannequin exposes.
//! - [`ParametricMannequin`]: a measurement-driven reference mannequin.

pub mod mannequin;
pub mod measurements;
pub mod zones;

pub use mannequin::{Landmark, MannequinQuery, ParametricMannequin, StaticMannequin};
pub use measurements::{BodyMeasurements, Gender, MeasurementKey};
pub use zones::{
    BodyZoneSpec, BodyZoneTable, DeformAxes, DeformationZone, DeformationZoneKind,
    DeformationZoneTable,
};
