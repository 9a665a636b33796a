//! Garment normalization: zone classification, canonical framing, and
//! measurement-driven scale/anchor computation.
//!
//! The normalizer never fails. Each missing or degenerate input degrades to
//! a fallback that is logged and recorded on the result.

use std::f32::consts::PI;

use drape_body::{BodyMeasurements, BodyZoneSpec, BodyZoneTable, MannequinQuery};
use drape_math::{Aabb, Vec2, Vec3};
use drape_mesh::{GarmentMesh, Transform};
use drape_types::constants::EPSILON;
use drape_types::BodyZone;
use serde::{Deserialize, Serialize};

use crate::config::FitConfig;
use crate::descriptor::GarmentDescriptor;
use crate::standardize::{BoundsStandardizer, OrientationStandardizer};

/// Horizontal garment width measured in a vertical band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceSample {
    /// `max(x) − min(x)` in the standardized world frame.
    pub width: f32,
    /// Vertices that fell inside the band.
    pub samples: usize,
    /// The band was too sparse and the bounding-box width was used.
    pub fallback: bool,
}

/// Output of [`GarmentNormalizer::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub body_zone: BodyZone,
    /// Uniform scale to apply on top of the standardized transform.
    pub scale: f32,
    /// World Y the garment top should sit at.
    pub anchor_y: f32,
    /// Mannequin centroid on the ground plane (x, z).
    pub anchor_xz: Vec2,
    /// Standardized garment height.
    pub garment_height: f32,
    /// Standardized garment max Y.
    pub garment_top_offset: f32,
    /// Mannequin world units per centimeter of body height.
    pub world_per_cm: f32,
    /// Unclamped `target · world_per_cm / slice_width`.
    pub raw_ratio: f32,
    pub slice: SliceSample,
    /// The anchor came from the zone fraction instead of a live landmark.
    pub landmark_fallback: bool,
}

impl NormalizeResult {
    /// Final placement transform for a garment standardized with `standardized`.
    ///
    /// Scales the standardized garment by [`scale`](Self::scale) and moves its
    /// top onto the anchor, centered over the mannequin.
    pub fn placement(&self, standardized: &Transform) -> Transform {
        let s = self.scale;
        let offset = Vec3::new(
            self.anchor_xz.x,
            self.anchor_y - self.garment_top_offset * s,
            self.anchor_xz.y,
        );
        Transform {
            translation: standardized.translation * s + offset,
            rotation: standardized.rotation,
            scale: standardized.scale * s,
        }
    }
}

/// Computes scale and anchor that fit a garment to a body.
pub struct GarmentNormalizer<S = BoundsStandardizer> {
    zones: BodyZoneTable,
    config: FitConfig,
    standardizer: S,
}

impl Default for GarmentNormalizer {
    fn default() -> Self {
        Self::new(BodyZoneTable::DEFAULT, FitConfig::default(), BoundsStandardizer)
    }
}

impl<S: OrientationStandardizer> GarmentNormalizer<S> {
    pub fn new(zones: BodyZoneTable, config: FitConfig, standardizer: S) -> Self {
        Self {
            zones,
            config,
            standardizer,
        }
    }

    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    pub fn zones(&self) -> &BodyZoneTable {
        &self.zones
    }

    /// Classifies, standardizes, and measures `mesh` against the mannequin.
    ///
    /// Writes the zone, source, and standardized transform onto the mesh;
    /// vertex buffers are not touched. Measurements are taken on the rest
    /// pose, so a garment deformed by an earlier fit measures the same.
    pub fn normalize<M: MannequinQuery + ?Sized>(
        &self,
        mesh: &mut GarmentMesh,
        descriptor: &GarmentDescriptor,
        measurements: &BodyMeasurements,
        mannequin: &M,
    ) -> NormalizeResult {
        let body_zone = descriptor.body_zone();
        mesh.body_zone = body_zone;
        mesh.source = descriptor.source;

        mesh.reset_transform();
        self.standardizer.standardize(mesh);

        let spec = self.zones.spec(body_zone);
        let body = mannequin.world_bounds();
        let body_height = body.height();
        let world_per_cm = world_per_cm(body_height, measurements.height_cm);

        let garment = mesh.rest_world_bounds();
        let slice = sample_slice_width(mesh, &garment, spec.slice_band, self.config.min_slice_samples);

        let target_cm = target_width_cm(spec, measurements);
        let raw_ratio = target_cm * world_per_cm / slice.width;
        let scale = self.clamp_scale(raw_ratio, body_zone);

        let (anchor_y, landmark_fallback) = anchor_height(spec, &body, mannequin);
        let centroid = body.center();

        let result = NormalizeResult {
            body_zone,
            scale,
            anchor_y,
            anchor_xz: Vec2::new(centroid.x, centroid.z),
            garment_height: if garment.is_empty() { 0.0 } else { garment.height() },
            garment_top_offset: if garment.is_empty() { 0.0 } else { garment.max.y },
            world_per_cm,
            raw_ratio,
            slice,
            landmark_fallback,
        };
        tracing::debug!(
            garment = %descriptor.name,
            zone = body_zone.name(),
            scale,
            raw_ratio,
            anchor_y,
            slice_width = slice.width,
            "normalized garment"
        );
        result
    }

    /// Applies the lower-body ease and clamps; non-finite ratios become 1.0.
    fn clamp_scale(&self, raw_ratio: f32, zone: BodyZone) -> f32 {
        let ease = match zone {
            BodyZone::Lower => self.config.lower_body_ease,
            BodyZone::Upper => 1.0,
        };
        let ratio = if raw_ratio.is_finite() && raw_ratio > 0.0 {
            raw_ratio
        } else {
            tracing::warn!(raw_ratio, "degenerate garment scale, using 1.0");
            1.0
        };
        (ratio * ease).clamp(self.config.min_scale, self.config.max_scale)
    }
}

fn world_per_cm(body_height: f32, height_cm: f32) -> f32 {
    let wpc = body_height / height_cm;
    if wpc.is_finite() && wpc > 0.0 {
        wpc
    } else {
        tracing::warn!(body_height, height_cm, "cannot derive world units per cm");
        f32::NAN
    }
}

/// Front-facing width the garment should span, in centimeters.
pub fn target_width_cm(spec: &BodyZoneSpec, measurements: &BodyMeasurements) -> f32 {
    let value = measurements.measurement(spec.measurement_key);
    if spec.is_circumference {
        value / PI
    } else {
        value
    }
}

/// Measures the garment's rest-pose X extent inside `band` (fractions of
/// its height).
///
/// Falls back to the full bounding-box width when fewer than `min_samples`
/// vertices land in the band or the band has no horizontal extent.
pub fn sample_slice_width(
    mesh: &GarmentMesh,
    bounds: &Aabb,
    band: [f32; 2],
    min_samples: usize,
) -> SliceSample {
    if bounds.is_empty() {
        return SliceSample {
            width: 0.0,
            samples: 0,
            fallback: true,
        };
    }
    let lo = bounds.y_at(band[0]);
    let hi = bounds.y_at(band[1]);

    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut samples = 0;
    for p in mesh.rest_world_positions() {
        if p.y >= lo && p.y <= hi {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            samples += 1;
        }
    }

    let width = max_x - min_x;
    if samples >= min_samples && width > EPSILON {
        return SliceSample {
            width,
            samples,
            fallback: false,
        };
    }
    tracing::warn!(
        samples,
        min_samples,
        "slice band too sparse, falling back to bounding-box width"
    );
    SliceSample {
        width: bounds.width(),
        samples,
        fallback: true,
    }
}

/// Anchor Y from the zone landmark, or the zone fraction when it is missing.
fn anchor_height<M: MannequinQuery + ?Sized>(
    spec: &BodyZoneSpec,
    body: &Aabb,
    mannequin: &M,
) -> (f32, bool) {
    match mannequin.landmark_world_position(spec.anchor_landmark) {
        Some(p) if p.y.is_finite() => (p.y, false),
        _ => {
            tracing::debug!(
                landmark = spec.anchor_landmark.name(),
                "landmark unavailable, anchoring at zone fraction"
            );
            let y = if body.is_empty() {
                0.0
            } else {
                body.min.y + body.height() * spec.anchor_frac
            };
            (y, true)
        }
    }
}
