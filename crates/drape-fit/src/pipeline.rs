//! One-shot fitting: normalize, deform, and place a garment.

use drape_body::{BodyMeasurements, MannequinQuery};
use drape_mesh::{GarmentMesh, MorphTargets, Transform};
use drape_telemetry::{EventBus, EventKind};
use serde::{Deserialize, Serialize};

use crate::adapt::{AdaptReport, BodyDeformationAdapter};
use crate::descriptor::GarmentDescriptor;
use crate::normalize::{GarmentNormalizer, NormalizeResult};
use crate::standardize::{BoundsStandardizer, OrientationStandardizer};

/// Everything a renderer needs after fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub normalize: NormalizeResult,
    pub adapt: AdaptReport,
    /// Transform written onto the garment.
    pub placement: Transform,
}

/// Runs normalization and deformation for one (garment, body) pair.
pub struct GarmentFitter<S = BoundsStandardizer> {
    normalizer: GarmentNormalizer<S>,
    adapter: BodyDeformationAdapter,
}

impl Default for GarmentFitter {
    fn default() -> Self {
        Self::new(GarmentNormalizer::default(), BodyDeformationAdapter::default())
    }
}

impl<S: OrientationStandardizer> GarmentFitter<S> {
    pub fn new(normalizer: GarmentNormalizer<S>, adapter: BodyDeformationAdapter) -> Self {
        Self { normalizer, adapter }
    }

    pub fn normalizer(&self) -> &GarmentNormalizer<S> {
        &self.normalizer
    }

    pub fn adapter(&self) -> &BodyDeformationAdapter {
        &self.adapter
    }

    /// Fits `mesh` to the body and writes the final placement transform.
    ///
    /// Deformation happens in garment-local space, so it is independent of
    /// the placement. Events go to `events` when given.
    pub fn fit<M: MannequinQuery + ?Sized>(
        &self,
        mesh: &mut GarmentMesh,
        descriptor: &GarmentDescriptor,
        measurements: &BodyMeasurements,
        mannequin: &M,
        mannequin_morphs: Option<&MorphTargets>,
        events: Option<&EventBus>,
    ) -> FitResult {
        let normalize = self
            .normalizer
            .normalize(mesh, descriptor, measurements, mannequin);
        let standardized = mesh.transform;

        let adapt = self
            .adapter
            .adapt(mesh, mannequin_morphs, measurements, normalize.body_zone);

        let placement = normalize.placement(&standardized);
        mesh.transform = placement;

        if let Some(bus) = events {
            bus.record(EventKind::Normalized {
                zone: normalize.body_zone.name().to_string(),
                scale: normalize.scale,
                anchor_y: normalize.anchor_y,
                slice_fallback: normalize.slice.fallback,
                landmark_fallback: normalize.landmark_fallback,
            });
            bus.record(EventKind::Deformed {
                strategy: adapt.strategy.name().to_string(),
                mapped_targets: adapt.mapped_targets as u32,
                displaced_vertices: adapt.displaced_vertices as u32,
            });
        }

        tracing::info!(
            garment = %descriptor.name,
            zone = normalize.body_zone.name(),
            scale = normalize.scale,
            strategy = adapt.strategy.name(),
            "garment fitted"
        );
        FitResult {
            normalize,
            adapt,
            placement,
        }
    }
}
