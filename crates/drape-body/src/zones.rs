//! Constant zone tables.
//!
//! Two tables drive fitting:
//! - [`BodyZoneTable`]: where an upper/lower garment sits on the body and
//!   which measurement sets its width.
//! - [`DeformationZoneTable`]: the four landmark bands (shoulder, bust,
//!   waist, hips) used by lattice deformation.
//!
//! Both are plain values. Components receive them at construction, so
//! fitting stays a pure function of its inputs.

use drape_types::BodyZone;
use serde::{Deserialize, Serialize};

use crate::mannequin::Landmark;
use crate::measurements::MeasurementKey;

/// Placement and measurement rules for one body zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyZoneSpec {
    pub zone: BodyZone,
    /// Top of the zone as a fraction of mannequin height.
    pub top_frac: f32,
    /// Bottom of the zone as a fraction of mannequin height.
    pub bottom_frac: f32,
    /// Fallback anchor height as a fraction of mannequin height.
    pub anchor_frac: f32,
    /// Live landmark preferred over `anchor_frac`.
    pub anchor_landmark: Landmark,
    /// Vertical band `[lo, hi]` (fractions of garment height, from the bottom)
    /// sampled for the slice width.
    pub slice_band: [f32; 2],
    /// Measurement the slice width is matched against.
    pub measurement_key: MeasurementKey,
    /// Reference value of that measurement (cm).
    pub baseline_cm: f32,
    /// The measurement is a circumference rather than a straight width.
    pub is_circumference: bool,
}

/// The two [`BodyZoneSpec`] entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyZoneTable {
    pub upper: BodyZoneSpec,
    pub lower: BodyZoneSpec,
}

impl BodyZoneTable {
    /// Built-in table.
    pub const DEFAULT: Self = Self {
        upper: BodyZoneSpec {
            zone: BodyZone::Upper,
            top_frac: 0.87,
            bottom_frac: 0.50,
            anchor_frac: 0.87,
            anchor_landmark: Landmark::Neck,
            slice_band: [0.55, 0.75],
            measurement_key: MeasurementKey::Bust,
            baseline_cm: 90.0,
            is_circumference: true,
        },
        lower: BodyZoneSpec {
            zone: BodyZone::Lower,
            top_frac: 0.62,
            bottom_frac: 0.04,
            anchor_frac: 0.62,
            anchor_landmark: Landmark::Waist,
            slice_band: [0.78, 0.92],
            measurement_key: MeasurementKey::Hips,
            baseline_cm: 95.0,
            is_circumference: true,
        },
    };

    /// Placement rules for a zone.
    pub fn spec(&self, zone: BodyZone) -> &BodyZoneSpec {
        match zone {
            BodyZone::Upper => &self.upper,
            BodyZone::Lower => &self.lower,
        }
    }
}

impl Default for BodyZoneTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Axes a deformation zone displaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeformAxes {
    /// Width only (straight measurements such as shoulder width).
    X,
    /// Width and depth (circumferences).
    XZ,
}

impl DeformAxes {
    #[inline]
    pub fn includes_z(&self) -> bool {
        matches!(self, DeformAxes::XZ)
    }
}

/// The four lattice landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeformationZoneKind {
    Shoulder,
    Bust,
    Waist,
    Hips,
}

impl DeformationZoneKind {
    pub fn name(&self) -> &'static str {
        match self {
            DeformationZoneKind::Shoulder => "shoulder",
            DeformationZoneKind::Bust => "bust",
            DeformationZoneKind::Waist => "waist",
            DeformationZoneKind::Hips => "hips",
        }
    }
}

/// A horizontal band of a garment that follows one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeformationZone {
    pub kind: DeformationZoneKind,
    /// Band center as a fraction of an upper garment's height, from the bottom.
    pub y_frac: f32,
    /// Band center as a fraction of a lower garment's height, from the bottom.
    pub y_frac_lower: f32,
    /// Falloff radius as a fraction of garment height.
    pub falloff: f32,
    pub axes: DeformAxes,
    pub measurement_key: MeasurementKey,
    pub baseline_cm: f32,
    /// Body zones this band applies to.
    pub upper: bool,
    pub lower: bool,
}

impl DeformationZone {
    /// Returns true if the band is relevant for a garment of `zone`.
    pub fn applies_to(&self, zone: BodyZone) -> bool {
        match zone {
            BodyZone::Upper => self.upper,
            BodyZone::Lower => self.lower,
        }
    }

    /// Band center fraction for a garment of `zone`.
    pub fn y_frac_for(&self, zone: BodyZone) -> f32 {
        match zone {
            BodyZone::Upper => self.y_frac,
            BodyZone::Lower => self.y_frac_lower,
        }
    }
}

/// The four [`DeformationZone`] entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeformationZoneTable {
    pub zones: [DeformationZone; 4],
}

impl DeformationZoneTable {
    /// Built-in table. Shoulder and bust never touch lower garments;
    /// hips never touch upper garments.
    pub const DEFAULT: Self = Self {
        zones: [
            DeformationZone {
                kind: DeformationZoneKind::Shoulder,
                y_frac: 0.92,
                y_frac_lower: 1.0,
                falloff: 0.12,
                axes: DeformAxes::X,
                measurement_key: MeasurementKey::ShoulderWidth,
                baseline_cm: 40.0,
                upper: true,
                lower: false,
            },
            DeformationZone {
                kind: DeformationZoneKind::Bust,
                y_frac: 0.70,
                y_frac_lower: 1.0,
                falloff: 0.18,
                axes: DeformAxes::XZ,
                measurement_key: MeasurementKey::Bust,
                baseline_cm: 90.0,
                upper: true,
                lower: false,
            },
            DeformationZone {
                kind: DeformationZoneKind::Waist,
                y_frac: 0.35,
                y_frac_lower: 0.95,
                falloff: 0.18,
                axes: DeformAxes::XZ,
                measurement_key: MeasurementKey::Waist,
                baseline_cm: 70.0,
                upper: true,
                lower: true,
            },
            DeformationZone {
                kind: DeformationZoneKind::Hips,
                y_frac: 0.05,
                y_frac_lower: 0.78,
                falloff: 0.20,
                axes: DeformAxes::XZ,
                measurement_key: MeasurementKey::Hips,
                baseline_cm: 95.0,
                upper: false,
                lower: true,
            },
        ],
    };

    /// Zones that apply to a garment of `zone`, in table order.
    pub fn for_zone(&self, zone: BodyZone) -> impl Iterator<Item = &DeformationZone> + '_ {
        self.zones.iter().filter(move |z| z.applies_to(zone))
    }

    /// Looks up a zone by kind.
    pub fn get(&self, kind: DeformationZoneKind) -> Option<&DeformationZone> {
        self.zones.iter().find(|z| z.kind == kind)
    }
}

impl Default for DeformationZoneTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
